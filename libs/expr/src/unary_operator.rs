use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, Deserialize, Serialize)]
pub enum UnaryOperator {
    #[display(fmt = "-")]
    Neg,

    #[display(fmt = "not")]
    Not,
}
