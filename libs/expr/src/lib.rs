mod binary_operator;
mod data_type;
mod display;
#[allow(clippy::module_inception)]
mod expr;
mod literal;
mod symbol;
mod unary_operator;

pub mod dsl;

pub use binary_operator::BinaryOperator;
pub use data_type::DataType;
pub use expr::Expr;
pub use literal::{Literal, NullableValue};
pub use symbol::Symbol;
pub use unary_operator::UnaryOperator;
