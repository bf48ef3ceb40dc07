use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Arithmetic operators. A partitioning never looks inside them, so they
/// only matter for telling compound keys apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, Deserialize, Serialize)]
pub enum BinaryOperator {
    #[display(fmt = "+")]
    Plus,

    #[display(fmt = "-")]
    Minus,

    #[display(fmt = "*")]
    Multiply,

    #[display(fmt = "/")]
    Divide,
}
