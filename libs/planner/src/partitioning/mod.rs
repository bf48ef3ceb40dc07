//! Physical distribution of a stage's output and the algebra the optimizer
//! uses to avoid or require shuffles.

mod argument;
mod codec;
mod compatibility;
mod lookup;
mod projection;
mod translate;

#[cfg(test)]
mod properties;

use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

use dql_expr::{Expr, Symbol};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::PartitioningHandle;

pub use argument::ArgumentBinding;
pub use lookup::{ConstantLookup, NoConstants, SymbolMapping};
pub use translate::{FnTranslator, Translator};

/// A handle plus the ordered arguments fed to its distribution function.
///
/// Argument order matters: `hash(a, b)` and `hash(b, a)` place rows differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Partitioning {
    handle: PartitioningHandle,
    arguments: Vec<ArgumentBinding>,
}

impl Partitioning {
    pub fn new(handle: PartitioningHandle, arguments: Vec<ArgumentBinding>) -> Self {
        Self { handle, arguments }
    }

    pub fn create(handle: PartitioningHandle, columns: impl IntoIterator<Item = Symbol>) -> Self {
        Self::new(
            handle,
            columns.into_iter().map(ArgumentBinding::Variable).collect(),
        )
    }

    pub fn create_with_expressions(
        handle: PartitioningHandle,
        expressions: impl IntoIterator<Item = Expr>,
    ) -> Self {
        Self::new(
            handle,
            expressions
                .into_iter()
                .map(ArgumentBinding::from_expression)
                .collect(),
        )
    }

    #[inline]
    pub fn handle(&self) -> &PartitioningHandle {
        &self.handle
    }

    #[inline]
    pub fn arguments(&self) -> &[ArgumentBinding] {
        &self.arguments
    }

    pub fn columns(&self) -> HashSet<Symbol> {
        self.variables().cloned().collect()
    }

    pub fn with_handle(&self, handle: PartitioningHandle) -> Self {
        Self::new(handle, self.arguments.clone())
    }

    fn variables(&self) -> impl Iterator<Item = &Symbol> {
        self.arguments.iter().filter_map(|argument| match argument {
            ArgumentBinding::Variable(symbol) => Some(symbol),
            _ => None,
        })
    }
}

impl Display for Partitioning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.handle, self.arguments.iter().join(", "))
    }
}
