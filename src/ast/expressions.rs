/// Expression
///
/// One variant per node kind. Children are owned, so a tree has no sharing
/// and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// `if cond then then_branch else else_branch`
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Name(String),
    Bool(bool),
    Num(i64),
}

impl Expr {
    pub fn new_if(cond: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn name<S: Into<String>>(identifier: S) -> Self {
        Expr::Name(identifier.into())
    }

    /// Length of the longest chain of nested `if` nodes, 0 for a leaf.
    pub fn if_depth(&self) -> usize {
        match self {
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => {
                1 + cond
                    .if_depth()
                    .max(then_branch.if_depth())
                    .max(else_branch.if_depth())
            }
            Expr::Name(_) | Expr::Bool(_) | Expr::Num(_) => 0,
        }
    }
}
