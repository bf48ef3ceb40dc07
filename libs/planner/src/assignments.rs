use std::collections::{HashMap, HashSet};

use anyhow::Result;
use dql_expr::{Expr, Symbol};

use crate::partitioning::ArgumentBinding;

/// The output columns of a projection, in the order they are produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignments {
    entries: Vec<(Symbol, Expr)>,
}

impl Assignments {
    pub fn try_new(entries: Vec<(Symbol, Expr)>) -> Result<Self> {
        let mut outputs = HashSet::new();
        for (output, _) in &entries {
            if !outputs.insert(output) {
                anyhow::bail!("projection contains duplicate output symbol: '{}'", output);
            }
        }
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Expr)> {
        self.entries.iter().map(|(symbol, expr)| (symbol, expr))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maps every input symbol that is projected as-is to the first output
    /// carrying it.
    pub fn input_to_output(&self) -> HashMap<Symbol, ArgumentBinding> {
        let mut mappings = HashMap::new();
        for (output, expr) in &self.entries {
            if let Some(input) = expr.as_symbol() {
                mappings
                    .entry(input.clone())
                    .or_insert_with(|| ArgumentBinding::variable(output.clone()));
            }
        }
        mappings
    }
}
