use std::collections::{HashMap, HashSet};

use dql_expr::{Expr, Symbol};

use crate::partitioning::{ArgumentBinding, Partitioning};
use crate::Assignments;

impl Partitioning {
    /// Restates this partitioning in terms of the outputs of a projection.
    ///
    /// A compound argument survives only as a null-coalescing form over plain
    /// symbols that the projection computes again, in any operand order.
    pub fn translate_through_projection(
        &self,
        input_to_output: &HashMap<Symbol, ArgumentBinding>,
        assignments: &Assignments,
    ) -> Option<Partitioning> {
        let mut arguments = Vec::with_capacity(self.arguments.len());

        for argument in &self.arguments {
            let translated = match argument {
                ArgumentBinding::Constant(_) => Some(argument.clone()),
                ArgumentBinding::Variable(symbol) => input_to_output.get(symbol).cloned(),
                ArgumentBinding::Expression(expr) => coalesce_output(expr, assignments)
                    .cloned()
                    .map(ArgumentBinding::Variable),
            };

            match translated {
                Some(translated) => arguments.push(translated),
                None => {
                    tracing::debug!(
                        partitioning = %self,
                        argument = %argument,
                        "partitioning argument is not produced by projection"
                    );
                    return None;
                }
            }
        }

        Some(Partitioning::new(self.handle.clone(), arguments))
    }
}

/// Finds the first output computing the same null-coalescing form as `expr`.
fn coalesce_output<'a>(expr: &Expr, assignments: &'a Assignments) -> Option<&'a Symbol> {
    let operands = symbol_operands(expr)?;
    assignments
        .iter()
        .find(|(_, assignment)| symbol_operands(assignment).as_ref() == Some(&operands))
        .map(|(output, _)| output)
}

fn symbol_operands(expr: &Expr) -> Option<HashSet<&Symbol>> {
    expr.coalesce_operands()?
        .iter()
        .map(Expr::as_symbol)
        .collect()
}
