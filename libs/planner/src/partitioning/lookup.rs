use std::collections::{HashMap, HashSet};

use dql_expr::{NullableValue, Symbol};

/// Maps a symbol of one side of a join to the symbols of the other side it
/// is known to be equal to.
pub trait SymbolMapping {
    fn mapped_symbols(&self, symbol: &Symbol) -> HashSet<Symbol>;
}

impl SymbolMapping for HashMap<Symbol, HashSet<Symbol>> {
    fn mapped_symbols(&self, symbol: &Symbol) -> HashSet<Symbol> {
        self.get(symbol).cloned().unwrap_or_default()
    }
}

impl<F> SymbolMapping for F
where
    F: Fn(&Symbol) -> HashSet<Symbol>,
{
    fn mapped_symbols(&self, symbol: &Symbol) -> HashSet<Symbol> {
        self(symbol)
    }
}

/// Values that symbols are known to hold, usually proven by a filter.
pub trait ConstantLookup {
    fn constant_of(&self, symbol: &Symbol) -> Option<NullableValue>;
}

impl ConstantLookup for HashMap<Symbol, NullableValue> {
    fn constant_of(&self, symbol: &Symbol) -> Option<NullableValue> {
        self.get(symbol).cloned()
    }
}

impl<F> ConstantLookup for F
where
    F: Fn(&Symbol) -> Option<NullableValue>,
{
    fn constant_of(&self, symbol: &Symbol) -> Option<NullableValue> {
        self(symbol)
    }
}

#[derive(Debug, Default, Copy, Clone)]
pub struct NoConstants;

impl ConstantLookup for NoConstants {
    fn constant_of(&self, _symbol: &Symbol) -> Option<NullableValue> {
        None
    }
}
