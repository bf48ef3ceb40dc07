use std::collections::HashSet;

use dql_expr::Symbol;

use crate::partitioning::{ArgumentBinding, ConstantLookup, Partitioning, SymbolMapping};
use crate::{HandleResolver, PlannerConfig};

impl Partitioning {
    fn is_handle_compatible_with(
        &self,
        right: &Partitioning,
        resolver: &impl HandleResolver,
        config: &PlannerConfig,
    ) -> bool {
        if self.handle == right.handle {
            return true;
        }
        match resolver.common_partitioning(config, &self.handle, &right.handle) {
            Some(common) => {
                tracing::debug!(
                    name = %config.name,
                    left = %self.handle,
                    right = %right.handle,
                    common = %common,
                    "partitioning handles resolved to a common handle"
                );
                true
            }
            None => false,
        }
    }

    /// Both sides use the same symbols and are distributed identically.
    pub fn is_compatible_with(
        &self,
        right: &Partitioning,
        resolver: &impl HandleResolver,
        config: &PlannerConfig,
    ) -> bool {
        self.is_handle_compatible_with(right, resolver, config)
            && self.arguments == right.arguments
    }

    /// Compares partitionings whose symbols live in different namespaces,
    /// typically the two inputs of a join.
    ///
    /// A variable only matches a constant of the other side when the lookup
    /// for its own side pins it to that exact value. Unresolved compound
    /// arguments never match.
    pub fn is_compatible_with_mapping(
        &self,
        right: &Partitioning,
        left_to_right: &impl SymbolMapping,
        left_constants: &impl ConstantLookup,
        right_constants: &impl ConstantLookup,
        resolver: &impl HandleResolver,
        config: &PlannerConfig,
    ) -> bool {
        if !self.is_handle_compatible_with(right, resolver, config) {
            return false;
        }

        if self.arguments.len() != right.arguments.len() {
            return false;
        }

        self.arguments
            .iter()
            .zip(&right.arguments)
            .all(|(left_argument, right_argument)| {
                is_partitioned_with(
                    left_argument,
                    left_constants,
                    right_argument,
                    right_constants,
                    left_to_right,
                )
            })
    }

    /// Partitioned on `(k1, .., kn)` implies partitioned on any superset of
    /// those keys. Constant arguments carry no distribution and are skipped.
    pub fn is_partitioned_on(
        &self,
        columns: &HashSet<Symbol>,
        known_constants: &HashSet<Symbol>,
    ) -> bool {
        for argument in &self.arguments {
            match argument {
                ArgumentBinding::Constant(_) => continue,
                ArgumentBinding::Variable(symbol) => {
                    if !known_constants.contains(symbol) && !columns.contains(symbol) {
                        return false;
                    }
                }
                ArgumentBinding::Expression(_) => return false,
            }
        }
        true
    }

    pub fn is_partitioned_on_exactly(
        &self,
        columns: &HashSet<Symbol>,
        known_constants: &HashSet<Symbol>,
    ) -> bool {
        let mut to_check = HashSet::new();
        for argument in &self.arguments {
            match argument {
                ArgumentBinding::Constant(_) => continue,
                ArgumentBinding::Variable(symbol) => {
                    if !known_constants.contains(symbol) {
                        to_check.insert(symbol);
                    }
                }
                ArgumentBinding::Expression(_) => return false,
            }
        }
        to_check.len() == columns.len() && columns.iter().all(|c| to_check.contains(c))
    }

    /// Every variable is pinned to a single value, so all rows land on one
    /// worker.
    pub fn is_effectively_single_partition(&self, known_constants: &HashSet<Symbol>) -> bool {
        self.is_partitioned_on(&HashSet::new(), known_constants)
    }

    /// Repartitioning on `keys` only moves data if the non-constant keys
    /// differ from the non-constant variables already partitioned on.
    pub fn is_repartition_effective(
        &self,
        keys: &[Symbol],
        known_constants: &HashSet<Symbol>,
    ) -> bool {
        let keys_without_constants = keys
            .iter()
            .filter(|symbol| !known_constants.contains(*symbol))
            .collect::<HashSet<_>>();
        let non_constant_args = self
            .variables()
            .filter(|symbol| !known_constants.contains(*symbol))
            .collect::<HashSet<_>>();
        non_constant_args != keys_without_constants
    }
}

fn is_partitioned_with(
    left_argument: &ArgumentBinding,
    left_constants: &impl ConstantLookup,
    right_argument: &ArgumentBinding,
    right_constants: &impl ConstantLookup,
    left_to_right: &impl SymbolMapping,
) -> bool {
    match (left_argument, right_argument) {
        (ArgumentBinding::Variable(left), ArgumentBinding::Variable(right)) => {
            left_to_right.mapped_symbols(left).contains(right)
        }
        // Normally a variable never equals a constant, unless the variable is
        // pinned to that very value elsewhere in the plan.
        (ArgumentBinding::Variable(left), ArgumentBinding::Constant(right)) => {
            left_constants.constant_of(left).as_ref() == Some(right)
        }
        (ArgumentBinding::Constant(left), ArgumentBinding::Constant(right)) => left == right,
        (ArgumentBinding::Constant(left), ArgumentBinding::Variable(right)) => {
            right_constants.constant_of(right).as_ref() == Some(left)
        }
        (ArgumentBinding::Expression(_), _) | (_, ArgumentBinding::Expression(_)) => false,
    }
}
