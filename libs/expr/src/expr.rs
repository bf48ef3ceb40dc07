use std::ops::{Add, Div, Mul, Neg, Not, Sub};

use serde::{Deserialize, Serialize};

use crate::{BinaryOperator, Literal, Symbol, UnaryOperator};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    Literal(Literal),
    Symbol(Symbol),
    Binary {
        op: BinaryOperator,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Unary {
        op: UnaryOperator,
        expr: Box<Expr>,
    },
    Call {
        name: String,
        args: Vec<Expr>,
    },
    Coalesce(Vec<Expr>),
}

impl Expr {
    #[inline]
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Expr::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Returns the operands if this expression picks its first non-null operand.
    ///
    /// `coalesce(..)` and the two argument `ifnull(a, b)` calls are the same
    /// form as [`Expr::Coalesce`].
    pub fn coalesce_operands(&self) -> Option<&[Expr]> {
        match self {
            Expr::Coalesce(operands) => Some(operands),
            Expr::Call { name, args } if name.eq_ignore_ascii_case("coalesce") => Some(args),
            Expr::Call { name, args } if name.eq_ignore_ascii_case("ifnull") && args.len() == 2 => {
                Some(args)
            }
            _ => None,
        }
    }

    pub fn rewrite_symbols(&self, f: &impl Fn(&Symbol) -> Symbol) -> Expr {
        match self {
            Expr::Literal(literal) => Expr::Literal(literal.clone()),
            Expr::Symbol(symbol) => Expr::Symbol(f(symbol)),
            Expr::Binary { op, lhs, rhs } => Expr::Binary {
                op: *op,
                lhs: Box::new(lhs.rewrite_symbols(f)),
                rhs: Box::new(rhs.rewrite_symbols(f)),
            },
            Expr::Unary { op, expr } => Expr::Unary {
                op: *op,
                expr: Box::new(expr.rewrite_symbols(f)),
            },
            Expr::Call { name, args } => Expr::Call {
                name: name.clone(),
                args: args.iter().map(|arg| arg.rewrite_symbols(f)).collect(),
            },
            Expr::Coalesce(operands) => Expr::Coalesce(
                operands
                    .iter()
                    .map(|operand| operand.rewrite_symbols(f))
                    .collect(),
            ),
        }
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Binary {
            op: BinaryOperator::Plus,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Binary {
            op: BinaryOperator::Minus,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Binary {
            op: BinaryOperator::Multiply,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Binary {
            op: BinaryOperator::Divide,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        Expr::Unary {
            op: UnaryOperator::Neg,
            expr: Box::new(self),
        }
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::Unary {
            op: UnaryOperator::Not,
            expr: Box::new(self),
        }
    }
}
