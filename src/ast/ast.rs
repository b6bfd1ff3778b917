use super::expressions::Expr;

/// Program
///
/// The root of the tree: every binding of a source file, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub bindings: Vec<LetBinding>,
}

impl Program {
    pub fn new(bindings: Vec<LetBinding>) -> Self {
        Program { bindings }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LetBinding> {
        self.bindings.iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a LetBinding;
    type IntoIter = std::slice::Iter<'a, LetBinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Let Binding
///
/// `let name arg1 arg2 = body`. A binding without arguments is a plain value.
/// Names are kept as written; nothing here checks for duplicates or shadowing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetBinding {
    pub name: String,
    pub args: Vec<String>,
    pub body: Expr,
}

impl LetBinding {
    pub fn new<S: Into<String>>(name: S, args: Vec<S>, body: Expr) -> Self {
        LetBinding {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
            body,
        }
    }
}
