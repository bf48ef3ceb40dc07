use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::Expr;

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::Symbol(symbol) => write!(f, "{}", symbol),
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
            Expr::Unary { op, expr } => write!(f, "{} {}", op, expr),
            Expr::Call { name, args } => write!(f, "{}({})", name, args.iter().join(", ")),
            Expr::Coalesce(operands) => write!(f, "COALESCE({})", operands.iter().join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dsl::{call, coalesce, col, value};

    #[test]
    fn test_display() {
        assert_eq!(col("a").to_string(), "a");
        assert_eq!((col("a") + value(1)).to_string(), "(a + 1)");
        assert_eq!(
            coalesce(vec![col("a"), col("b")]).to_string(),
            "COALESCE(a, b)"
        );
        assert_eq!(
            call("ifnull", vec![col("a"), value("x")]).to_string(),
            "ifnull(a, \"x\")"
        );
        assert_eq!(call("now", vec![]).to_string(), "now()");
        assert_eq!((!col("flag")).to_string(), "not flag");
    }
}
