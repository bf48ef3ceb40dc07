use std::collections::HashMap;

use dql_expr::{Expr, NullableValue, Symbol};

use crate::partitioning::{ArgumentBinding, Partitioning};

/// Carries a partitioning across a plan boundary.
pub trait Translator {
    fn translate_column(&self, symbol: &Symbol) -> Option<Symbol>;

    /// The value `symbol` is known to hold, used when it has no counterpart.
    fn translate_constant(&self, _symbol: &Symbol) -> Option<NullableValue> {
        None
    }

    /// Resolves a compound argument to an equivalent output symbol.
    fn translate_expression(&self, _expr: &Expr) -> Option<Symbol> {
        None
    }
}

impl Translator for HashMap<Symbol, Symbol> {
    fn translate_column(&self, symbol: &Symbol) -> Option<Symbol> {
        self.get(symbol).cloned()
    }
}

pub struct FnTranslator<C, K, E> {
    column: C,
    constant: K,
    expression: E,
}

impl<C, K, E> FnTranslator<C, K, E>
where
    C: Fn(&Symbol) -> Option<Symbol>,
    K: Fn(&Symbol) -> Option<NullableValue>,
    E: Fn(&Expr) -> Option<Symbol>,
{
    pub fn new(column: C, constant: K, expression: E) -> Self {
        Self {
            column,
            constant,
            expression,
        }
    }
}

impl<C, K, E> Translator for FnTranslator<C, K, E>
where
    C: Fn(&Symbol) -> Option<Symbol>,
    K: Fn(&Symbol) -> Option<NullableValue>,
    E: Fn(&Expr) -> Option<Symbol>,
{
    fn translate_column(&self, symbol: &Symbol) -> Option<Symbol> {
        (self.column)(symbol)
    }

    fn translate_constant(&self, symbol: &Symbol) -> Option<NullableValue> {
        (self.constant)(symbol)
    }

    fn translate_expression(&self, expr: &Expr) -> Option<Symbol> {
        (self.expression)(expr)
    }
}

impl ArgumentBinding {
    pub fn translate(&self, translator: &impl Translator) -> Option<ArgumentBinding> {
        match self {
            ArgumentBinding::Constant(_) => Some(self.clone()),
            ArgumentBinding::Expression(expr) => translator
                .translate_expression(expr)
                .map(ArgumentBinding::Variable),
            // The constant is the last resort, a symbol keeps more rewrites possible.
            ArgumentBinding::Variable(symbol) => translator
                .translate_column(symbol)
                .map(ArgumentBinding::Variable)
                .or_else(|| {
                    translator
                        .translate_constant(symbol)
                        .map(ArgumentBinding::Constant)
                }),
        }
    }
}

impl Partitioning {
    /// Renames every variable. `f` must be defined for all of them.
    pub fn translate(&self, f: impl Fn(&Symbol) -> Symbol) -> Partitioning {
        Partitioning::new(
            self.handle.clone(),
            self.arguments
                .iter()
                .map(|argument| argument.rename_variable(&f))
                .collect(),
        )
    }

    /// Returns `None` unless every argument can be translated.
    pub fn translate_with(&self, translator: &impl Translator) -> Option<Partitioning> {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| {
                let translated = argument.translate(translator);
                if translated.is_none() {
                    tracing::debug!(
                        partitioning = %self,
                        argument = %argument,
                        "partitioning argument cannot be translated"
                    );
                }
                translated
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Partitioning::new(self.handle.clone(), arguments))
    }
}
