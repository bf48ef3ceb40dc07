use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

use anyhow::Result;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::DataType;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub enum Literal {
    Boolean(bool),
    Int(i64),
    Float(#[serde(with = "float")] OrderedFloat<f64>),
    String(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Boolean(n) => write!(f, "{}", n),
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Float(n) => write!(f, "{}", n),
            Literal::String(n) => write!(f, "\"{}\"", n),
        }
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value as i64)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(OrderedFloat(value))
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl Literal {
    fn fits(&self, data_type: DataType) -> bool {
        match (self, data_type) {
            (Literal::Boolean(_), DataType::Boolean) => true,
            (Literal::Int(n), DataType::Int8) => i8::try_from(*n).is_ok(),
            (Literal::Int(n), DataType::Int16) => i16::try_from(*n).is_ok(),
            (Literal::Int(n), DataType::Int32) => i32::try_from(*n).is_ok(),
            (Literal::Int(_), DataType::Int64) => true,
            (Literal::Float(n), DataType::Float32) => {
                !n.0.is_finite() || n.0.abs() <= f32::MAX as f64
            }
            (Literal::Float(_), DataType::Float64) => true,
            (Literal::String(_), DataType::String) => true,
            _ => false,
        }
    }
}

/// Floats are plain numbers in binary formats. Human readable formats such as
/// JSON have no NaN or infinity, so those are written as strings.
mod float {
    use std::fmt::{self, Formatter};

    use ordered_float::OrderedFloat;
    use serde::de::{Error, Unexpected, Visitor};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &OrderedFloat<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = value.0;
        if !serializer.is_human_readable() || value.is_finite() {
            return serializer.serialize_f64(value);
        }
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value > 0.0 {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OrderedFloat<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(FloatVisitor).map(OrderedFloat)
        } else {
            f64::deserialize(deserializer).map(OrderedFloat)
        }
    }

    struct FloatVisitor;

    impl<'de> Visitor<'de> for FloatVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut Formatter) -> fmt::Result {
            f.write_str("a number, \"NaN\", \"inf\" or \"-inf\"")
        }

        fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(v)
        }

        fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v as f64)
        }

        fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
            match v {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
            }
        }
    }
}

/// A constant of a known type, which may be null.
///
/// Two nulls of different types are different constants.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct NullableValue {
    data_type: DataType,
    value: Option<Literal>,
}

macro_rules! impl_from_value {
    ($ty:ty, $data_type:ident) => {
        impl From<$ty> for NullableValue {
            fn from(value: $ty) -> Self {
                Self {
                    data_type: DataType::$data_type,
                    value: Some(value.into()),
                }
            }
        }
    };
}

impl_from_value!(bool, Boolean);
impl_from_value!(i32, Int32);
impl_from_value!(i64, Int64);
impl_from_value!(f64, Float64);
impl_from_value!(&str, String);
impl_from_value!(String, String);

impl NullableValue {
    /// Creates a constant typed after the Rust type of `value`, so `5i64`
    /// is an `int64` and `5` an `int32`.
    pub fn of(value: impl Into<NullableValue>) -> Self {
        value.into()
    }

    pub fn null(data_type: DataType) -> Self {
        Self {
            data_type,
            value: None,
        }
    }

    pub fn typed(data_type: DataType, literal: impl Into<Literal>) -> Result<Self> {
        let literal = literal.into();
        anyhow::ensure!(
            literal.fits(data_type),
            "literal {} cannot be represented as '{}' type",
            literal,
            data_type
        );
        Ok(Self {
            data_type,
            value: Some(literal),
        })
    }

    #[inline]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    #[inline]
    pub fn value(&self) -> Option<&Literal> {
        self.value.as_ref()
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }
}

impl Display for NullableValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "null::{}", self.data_type),
        }
    }
}
