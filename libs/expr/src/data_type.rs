use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The type of a constant partitioning argument.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum DataType {
    #[display(fmt = "boolean")]
    Boolean,

    #[display(fmt = "int8")]
    Int8,

    #[display(fmt = "int16")]
    Int16,

    #[display(fmt = "int32")]
    Int32,

    /// BIGINT.
    #[display(fmt = "int64")]
    Int64,

    #[display(fmt = "float32")]
    Float32,

    #[display(fmt = "float64")]
    Float64,

    /// UTF-8 string of any length.
    #[display(fmt = "string")]
    String,
}
