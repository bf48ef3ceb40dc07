use crate::{Expr, Literal, Symbol};

pub fn value(value: impl Into<Literal>) -> Expr {
    Expr::Literal(value.into())
}

pub fn col(name: impl Into<String>) -> Expr {
    Expr::Symbol(Symbol::new(name))
}

pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Expr {
    Expr::Call {
        name: name.into(),
        args,
    }
}

pub fn coalesce(operands: Vec<Expr>) -> Expr {
    Expr::Coalesce(operands)
}
