use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

use anyhow::{Error, Result};
use dql_expr::{Expr, NullableValue, Symbol};
use serde::{Deserialize, Serialize};

/// One argument of the function distributing rows across workers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SerializedArgumentBinding", into = "SerializedArgumentBinding")]
pub enum ArgumentBinding {
    Variable(Symbol),
    Constant(NullableValue),
    /// A compound expression that has not been resolved to a symbol yet,
    /// such as the `COALESCE` key of a full outer join. Never a bare symbol.
    Expression(Expr),
}

/// The wire form, where exactly one of the two fields is set.
#[derive(Serialize, Deserialize)]
struct SerializedArgumentBinding {
    expression: Option<Expr>,
    constant: Option<NullableValue>,
}

impl TryFrom<SerializedArgumentBinding> for ArgumentBinding {
    type Error = Error;

    fn try_from(value: SerializedArgumentBinding) -> Result<Self> {
        ArgumentBinding::try_new(value.expression, value.constant)
    }
}

impl From<ArgumentBinding> for SerializedArgumentBinding {
    fn from(argument: ArgumentBinding) -> Self {
        match argument {
            ArgumentBinding::Variable(symbol) => SerializedArgumentBinding {
                expression: Some(Expr::Symbol(symbol)),
                constant: None,
            },
            ArgumentBinding::Constant(constant) => SerializedArgumentBinding {
                expression: None,
                constant: Some(constant),
            },
            ArgumentBinding::Expression(expr) => SerializedArgumentBinding {
                expression: Some(expr),
                constant: None,
            },
        }
    }
}

impl ArgumentBinding {
    pub fn try_new(expression: Option<Expr>, constant: Option<NullableValue>) -> Result<Self> {
        match (expression, constant) {
            (Some(expr), None) => Ok(Self::from_expression(expr)),
            (None, Some(constant)) => Ok(ArgumentBinding::Constant(constant)),
            (Some(_), Some(_)) => {
                anyhow::bail!("either expression or constant must be set, but both are set")
            }
            (None, None) => {
                anyhow::bail!("either expression or constant must be set, but neither is set")
            }
        }
    }

    pub fn variable(symbol: impl Into<Symbol>) -> Self {
        ArgumentBinding::Variable(symbol.into())
    }

    /// A bare symbol becomes a variable, anything else is kept for later
    /// resolution.
    pub fn from_expression(expr: Expr) -> Self {
        match expr {
            Expr::Symbol(symbol) => ArgumentBinding::Variable(symbol),
            expr => ArgumentBinding::Expression(expr),
        }
    }

    #[inline]
    pub fn is_variable(&self) -> bool {
        matches!(self, ArgumentBinding::Variable(_))
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        matches!(self, ArgumentBinding::Constant(_))
    }

    #[inline]
    pub fn is_expression(&self) -> bool {
        matches!(self, ArgumentBinding::Expression(_))
    }

    pub fn column(&self) -> Result<&Symbol> {
        match self {
            ArgumentBinding::Variable(symbol) => Ok(symbol),
            _ => anyhow::bail!("'{}' is not a variable binding", self),
        }
    }

    pub fn constant(&self) -> Result<&NullableValue> {
        match self {
            ArgumentBinding::Constant(constant) => Ok(constant),
            _ => anyhow::bail!("'{}' is not a constant binding", self),
        }
    }

    pub fn rename_variable(&self, f: &impl Fn(&Symbol) -> Symbol) -> ArgumentBinding {
        match self {
            ArgumentBinding::Variable(symbol) => ArgumentBinding::Variable(f(symbol)),
            ArgumentBinding::Constant(_) => self.clone(),
            ArgumentBinding::Expression(expr) => {
                ArgumentBinding::from_expression(expr.rewrite_symbols(f))
            }
        }
    }
}

impl Display for ArgumentBinding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentBinding::Variable(symbol) => write!(f, "{}", symbol),
            ArgumentBinding::Constant(constant) => write!(f, "{}", constant),
            ArgumentBinding::Expression(expr) => write!(f, "{}", expr),
        }
    }
}
