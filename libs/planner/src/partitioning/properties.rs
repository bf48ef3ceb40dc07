use std::collections::{HashMap, HashSet};

use dql_expr::{DataType, Expr, NullableValue, Symbol};
use proptest::prelude::*;

use crate::partitioning::{ArgumentBinding, Partitioning};
use crate::{Assignments, NoCommonPartitioning, PartitioningHandle, PlannerConfig};

fn symbol() -> impl Strategy<Value = Symbol> {
    prop::sample::select(vec!["a", "b", "c", "d", "e"]).prop_map(|name: &str| Symbol::from(name))
}

fn symbols() -> impl Strategy<Value = HashSet<Symbol>> {
    prop::collection::hash_set(symbol(), 0..5)
}

fn float() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => any::<f64>(),
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn constant() -> impl Strategy<Value = NullableValue> {
    prop_oneof![
        any::<i32>().prop_map(|n| NullableValue::of(n)),
        any::<i64>().prop_map(|n| NullableValue::of(n)),
        float().prop_map(|n| NullableValue::of(n)),
        "[a-z]{0,4}".prop_map(|s| NullableValue::of(s)),
        Just(NullableValue::null(DataType::Int64)),
    ]
}

fn coalesce_key() -> impl Strategy<Value = ArgumentBinding> {
    prop::collection::vec(symbol(), 1..4)
        .prop_map(|operands| ArgumentBinding::from_expression(coalesce_of(&operands)))
}

/// Variables and constants only.
fn symbolic_argument() -> impl Strategy<Value = ArgumentBinding> {
    prop_oneof![
        3 => symbol().prop_map(ArgumentBinding::Variable),
        1 => constant().prop_map(ArgumentBinding::Constant),
    ]
}

fn argument() -> impl Strategy<Value = ArgumentBinding> {
    prop_oneof![
        4 => symbolic_argument(),
        1 => coalesce_key(),
    ]
}

fn partitioning() -> impl Strategy<Value = Partitioning> {
    prop::collection::vec(argument(), 0..5)
        .prop_map(|arguments| Partitioning::new(PartitioningHandle::FixedHash, arguments))
}

fn symbolic_partitioning() -> impl Strategy<Value = Partitioning> {
    prop::collection::vec(symbolic_argument(), 0..5)
        .prop_map(|arguments| Partitioning::new(PartitioningHandle::FixedHash, arguments))
}

fn coalesce_of(operands: &[Symbol]) -> Expr {
    Expr::Coalesce(operands.iter().map(Symbol::to_expr).collect())
}

proptest! {
    #[test]
    fn test_identity_translation(partitioning in partitioning()) {
        prop_assert_eq!(partitioning.translate(|symbol| symbol.clone()), partitioning.clone());
        prop_assert!(partitioning.is_compatible_with(
            &partitioning,
            &NoCommonPartitioning,
            &PlannerConfig::default()
        ));
    }

    #[test]
    fn test_partitioned_on_superset(
        partitioning in partitioning(),
        columns in symbols(),
        extra in symbols(),
        known_constants in symbols(),
    ) {
        if partitioning.is_partitioned_on(&columns, &known_constants) {
            let superset = columns.union(&extra).cloned().collect();
            prop_assert!(partitioning.is_partitioned_on(&superset, &known_constants));
        }
    }

    #[test]
    fn test_exact_implies_partitioned_on(
        partitioning in partitioning(),
        columns in symbols(),
        known_constants in symbols(),
    ) {
        if partitioning.is_partitioned_on_exactly(&columns, &known_constants) {
            prop_assert!(partitioning.is_partitioned_on(&columns, &known_constants));
        }
    }

    #[test]
    fn test_single_partition_is_partitioned_on_anything(
        partitioning in partitioning(),
        columns in symbols(),
        known_constants in symbols(),
    ) {
        if partitioning.is_effectively_single_partition(&known_constants) {
            prop_assert!(partitioning.is_partitioned_on(&columns, &known_constants));
        }
    }

    #[test]
    fn test_single_partition_when_columns_are_constant(
        partitioning in symbolic_partitioning(),
        extra in symbols(),
    ) {
        let known_constants = partitioning.columns().union(&extra).cloned().collect();
        prop_assert!(partitioning.is_effectively_single_partition(&known_constants));
    }

    #[test]
    fn test_coalesce_key_is_never_satisfied(
        key in coalesce_key(),
        columns in symbols(),
        known_constants in symbols(),
    ) {
        let partitioning = Partitioning::new(PartitioningHandle::FixedHash, vec![key]);
        prop_assert!(!partitioning.is_partitioned_on(&columns, &known_constants));
        prop_assert!(!partitioning.is_effectively_single_partition(&known_constants));
    }

    #[test]
    fn test_repartition_on_own_columns(
        partitioning in partitioning(),
        known_constants in symbols(),
    ) {
        let keys = partitioning.columns().into_iter().collect::<Vec<_>>();
        prop_assert!(!partitioning.is_repartition_effective(&keys, &known_constants));
    }

    #[test]
    fn test_coalesce_operand_order(
        (operands, shuffled) in prop::collection::vec(symbol(), 1..5)
            .prop_flat_map(|operands| (Just(operands.clone()), Just(operands).prop_shuffle())),
    ) {
        let partitioning = Partitioning::new(
            PartitioningHandle::FixedHash,
            vec![ArgumentBinding::from_expression(coalesce_of(&operands))],
        );
        let assignments =
            Assignments::try_new(vec![(Symbol::from("x"), coalesce_of(&shuffled))]).unwrap();
        prop_assert_eq!(
            partitioning.translate_through_projection(&HashMap::new(), &assignments),
            Some(Partitioning::create(PartitioningHandle::FixedHash, vec![Symbol::from("x")]))
        );
    }

    #[test]
    fn test_codec_round_trip(partitioning in partitioning()) {
        let json = partitioning.to_json().unwrap();
        prop_assert_eq!(Partitioning::from_json(&json).unwrap(), partitioning.clone());

        let bytes = partitioning.to_bytes().unwrap();
        prop_assert_eq!(Partitioning::from_bytes(&bytes).unwrap(), partitioning);
    }
}
