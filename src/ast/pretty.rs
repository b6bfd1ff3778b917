//! Structural printer: renders a tree back into source text that parses to
//! the same tree.

use std::fmt;

use super::{
    ast::{LetBinding, Program},
    expressions::Expr,
};

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for binding in &self.bindings {
            writeln!(f, "{}", binding)?;
        }
        Ok(())
    }
}

impl fmt::Display for LetBinding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "let {}", self.name)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        write!(f, " = {}", self.body)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => write!(f, "if {} then {} else {}", cond, then_branch, else_branch),
            Expr::Name(name) => write!(f, "{}", name),
            Expr::Bool(value) => write!(f, "{}", value),
            Expr::Num(value) => write!(f, "{}", value),
        }
    }
}
