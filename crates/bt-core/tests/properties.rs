//! Properties of the sampling engine checked across generated inputs.

use bt_core::{
    ChanceTable, ConditionalLootTable, ConditionalWeightedTable, Conditional, ConditionalSample,
    LootTable, RiggedRandom, Sample, Table, TableEntry, WeightedTable,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone)]
enum Op {
    Add(u8, f64),
    Remove(u8, f64),
    RemoveAt(usize),
    RemoveAll(Vec<u8>),
    RetainOnly(Vec<u8>),
    RetainHeavy(f64),
    Clear,
}

fn weight() -> impl Strategy<Value = f64> {
    (0u32..1000).prop_map(|w| f64::from(w) / 10.0)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..8, weight()).prop_map(|(v, w)| Op::Add(v, w)),
        2 => (0u8..8, weight()).prop_map(|(v, w)| Op::Remove(v, w)),
        1 => (0usize..10).prop_map(Op::RemoveAt),
        1 => prop::collection::vec(0u8..8, 0..4).prop_map(Op::RemoveAll),
        1 => prop::collection::vec(0u8..8, 0..4).prop_map(Op::RetainOnly),
        1 => weight().prop_map(Op::RetainHeavy),
        1 => Just(Op::Clear),
    ]
}

fn entries_carrying(table: &WeightedTable<u8>, values: &[u8]) -> Vec<TableEntry<u8>> {
    table
        .entries()
        .iter()
        .filter(|e| e.value().is_some_and(|v| values.contains(v)))
        .cloned()
        .collect()
}

proptest! {
    #[test]
    fn total_weight_tracks_entries(ops in prop::collection::vec(op(), 0..40)) {
        let mut table = WeightedTable::<u8>::new(1);
        for op in ops {
            match op {
                Op::Add(value, weight) => table.add_value(value, weight).unwrap(),
                Op::Remove(value, weight) => {
                    table.remove(&TableEntry::leaf(value, weight).unwrap());
                }
                Op::RemoveAt(index) => {
                    table.remove_at(index);
                }
                Op::RemoveAll(values) => {
                    let targets = entries_carrying(&table, &values);
                    table.remove_all(&targets);
                }
                Op::RetainOnly(values) => {
                    let keep = entries_carrying(&table, &values);
                    table.retain_only(&keep);
                }
                Op::RetainHeavy(min) => {
                    table.retain(|e| e.weight() >= min);
                }
                Op::Clear => table.clear(),
            }
            let expected: f64 = table.entries().iter().map(|e| e.weight()).sum();
            prop_assert_eq!(table.total_weight(), expected);
        }
    }

    #[test]
    fn zero_draw_always_picks_first_entry(
        weights in prop::collection::vec(0.1f64..100.0, 1..12),
        rolls in 1u32..8,
    ) {
        let mut table = WeightedTable::new(rolls);
        for (i, w) in weights.iter().enumerate() {
            table.add_value(i, *w).unwrap();
        }
        let mut rng = RiggedRandom::with_draws(std::iter::repeat_n(0.0, rolls as usize));
        let results = table.sample(&mut rng).unwrap();
        prop_assert_eq!(results, vec![0usize; rolls as usize]);
    }

    #[test]
    fn weighted_yields_one_value_per_roll(
        weights in prop::collection::vec(0.0f64..10.0, 1..10),
        rolls in 0u32..20,
        seed in any::<u64>(),
    ) {
        prop_assume!(weights.iter().sum::<f64>() > 0.0);
        let mut table = WeightedTable::new(rolls);
        for (i, w) in weights.iter().enumerate() {
            table.add_value(i, *w).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let results = table.sample(&mut rng).unwrap();
        prop_assert_eq!(results.len(), rolls as usize);
        for index in results {
            prop_assert!(weights[index] > 0.0);
        }
    }

    #[test]
    fn rejected_context_consumes_nothing(rolls in 0u32..10, level in 0u32..100) {
        let mut table = ConditionalWeightedTable::<u32, u32>::new(rolls);
        table.add_value(1, 1.0).unwrap();
        table.add_condition(|level| *level >= 50);

        let mut rng = RiggedRandom::new(11);
        let results = table.sample(&mut rng, &level).unwrap();
        if level >= 50 {
            prop_assert_eq!(results.len(), rolls as usize);
            prop_assert_eq!(rng.draws(), rolls as usize);
        } else {
            prop_assert!(results.is_empty());
            prop_assert_eq!(rng.draws(), 0);
        }
    }
}

#[test]
fn chance_rate_converges_to_weight() {
    for p in [0.05, 0.3, 0.5, 0.9] {
        let mut table = ChanceTable::new(20_000);
        table.add_value((), p).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let hits = table.sample(&mut rng).unwrap().len() as f64;
        let rate = hits / 20_000.0;
        assert!((rate - p).abs() < 0.02, "p = {p}, observed {rate}");
    }
}

#[test]
fn concrete_single_entry_scenario() {
    let mut table = WeightedTable::new(1);
    table.add_value("a", 4.0).unwrap();
    let mut rng = RiggedRandom::with_draws([0.0]);
    assert_eq!(table.sample(&mut rng).unwrap(), vec!["a"]);
}

#[test]
fn nested_table_result_is_flattened() {
    let mut inner = WeightedTable::new(1);
    inner.add_value("x", 1.0).unwrap();
    inner.add_value("y", 1.0).unwrap();
    let mut outer = WeightedTable::<&str>::new(1);
    outer.add_table(1.0, inner.clone()).unwrap();

    let mut outer_rng = RiggedRandom::with_draws([0.3, 0.8]);
    let mut inner_rng = RiggedRandom::with_draws([0.8]);
    assert_eq!(
        outer.sample(&mut outer_rng).unwrap(),
        inner.sample(&mut inner_rng).unwrap()
    );
}

#[test]
fn loot_pools_keep_their_order() {
    let mut first = WeightedTable::new(1);
    first.add_value("x", 1.0).unwrap();
    let mut second = WeightedTable::new(2);
    second.add_value("y", 1.0).unwrap();
    second.add_value("z", 1.0).unwrap();

    let mut loot = LootTable::<&str>::new();
    loot.add_pool(first);
    loot.add_pool(second);

    let mut rng = RiggedRandom::with_draws([0.0, 0.2, 0.7]);
    assert_eq!(loot.sample(&mut rng).unwrap(), vec!["x", "y", "z"]);
}

#[test]
fn gated_loot_is_deterministic_for_a_seed() {
    let mut pool = ConditionalWeightedTable::<u8, bool>::new(5);
    for value in 0..6 {
        pool.add_value(value, f64::from(value) + 1.0).unwrap();
    }
    pool.add_condition(|enabled| *enabled);
    let mut loot = ConditionalLootTable::<u8, bool>::new();
    loot.add_pool(pool);

    let a = loot.sample(&mut StdRng::seed_from_u64(5), &true).unwrap();
    let b = loot.sample(&mut StdRng::seed_from_u64(5), &true).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 5);
}
