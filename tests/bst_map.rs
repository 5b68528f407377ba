use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sized_bst::{BstMap, Invariant, Rank, SymbolTable};
use tracing_subscriber::EnvFilter;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// How often the randomized tests run the full structural check.
const CHECK_EVERY: usize = 100;

/// Routes the crate's `tracing` events to the test output. Set `RUST_LOG=sized_bst=trace` to
/// see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Keys drawn from a range smaller than `TEST_SIZE` so operations collide.
fn key_strategy() -> impl Strategy<Value = i64> {
    -1_000i64..1_000i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Put(i64, i64),
    Remove(i64),
    Get(i64),
    Contains(i64),
    DeleteMin,
    DeleteMax,
    Floor(i64),
    Ceiling(i64),
    Rank(i64),
    Select(usize),
    RangeLen(i64, i64),
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        6 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Put(k, v)),
        3 => key_strategy().prop_map(MapOp::Remove),
        2 => key_strategy().prop_map(MapOp::Get),
        1 => key_strategy().prop_map(MapOp::Contains),
        1 => Just(MapOp::DeleteMin),
        1 => Just(MapOp::DeleteMax),
        1 => key_strategy().prop_map(MapOp::Floor),
        1 => key_strategy().prop_map(MapOp::Ceiling),
        1 => key_strategy().prop_map(MapOp::Rank),
        1 => (0usize..1_200).prop_map(MapOp::Select),
        1 => (key_strategy(), key_strategy()).prop_map(|(low, high)| MapOp::RangeLen(low, high)),
    ]
}

// ─── Randomized comparison against BTreeMap ──────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both BstMap and BTreeMap and asserts
    /// identical results at every step.
    #[test]
    fn map_ops_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut bst: BstMap<i64, i64> = BstMap::new();
        let mut bt: BTreeMap<i64, i64> = BTreeMap::new();

        for (step, op) in ops.iter().enumerate() {
            match op {
                MapOp::Put(k, v) => {
                    prop_assert_eq!(bst.put(*k, *v), bt.insert(*k, *v), "put({}, {})", k, v);
                }
                MapOp::Remove(k) => {
                    prop_assert_eq!(bst.remove(k), bt.remove(k), "remove({})", k);
                }
                MapOp::Get(k) => {
                    prop_assert_eq!(bst.get(k), bt.get(k), "get({})", k);
                }
                MapOp::Contains(k) => {
                    prop_assert_eq!(bst.contains(k), bt.contains_key(k), "contains({})", k);
                }
                MapOp::DeleteMin => {
                    prop_assert_eq!(bst.delete_min(), bt.pop_first(), "delete_min");
                }
                MapOp::DeleteMax => {
                    prop_assert_eq!(bst.delete_max(), bt.pop_last(), "delete_max");
                }
                MapOp::Floor(k) => {
                    let expected = bt.range(..=*k).next_back().map(|(k, _)| k);
                    prop_assert_eq!(bst.floor(k), expected, "floor({})", k);
                }
                MapOp::Ceiling(k) => {
                    let expected = bt.range(*k..).next().map(|(k, _)| k);
                    prop_assert_eq!(bst.ceiling(k), expected, "ceiling({})", k);
                }
                MapOp::Rank(k) => {
                    prop_assert_eq!(bst.rank(k), bt.range(..*k).count(), "rank({})", k);
                }
                MapOp::Select(i) => {
                    prop_assert_eq!(bst.select(*i), bt.keys().nth(*i), "select({})", i);
                }
                MapOp::RangeLen(low, high) => {
                    let expected = if high < low { 0 } else { bt.range(*low..=*high).count() };
                    prop_assert_eq!(bst.range_len(low, high), expected, "range_len({}, {})", low, high);
                }
            }

            prop_assert_eq!(bst.len(), bt.len());
            prop_assert_eq!(bst.is_empty(), bt.is_empty());
            prop_assert_eq!(bst.min(), bt.keys().next());
            prop_assert_eq!(bst.max(), bt.keys().next_back());
            if step % CHECK_EVERY == 0 {
                prop_assert_eq!(bst.check(), Ok(()), "after step {}: {:?}", step, op);
            }
        }

        prop_assert_eq!(bst.check(), Ok(()));
        prop_assert_eq!(bst.keys(), bt.keys().collect::<Vec<_>>());
    }

    #[test]
    fn range_keys_match_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        bounds in proptest::collection::vec((key_strategy(), key_strategy()), 50),
    ) {
        let bst: BstMap<i64, i64> = entries.iter().copied().collect();
        let bt: BTreeMap<i64, i64> = entries.iter().copied().collect();

        for (low, high) in bounds {
            let expected: Vec<&i64> = if high < low { Vec::new() } else { bt.range(low..=high).map(|(k, _)| k).collect() };
            prop_assert_eq!(bst.range_len(&low, &high), expected.len());
            prop_assert_eq!(bst.range_keys(&low, &high), expected);
        }
    }

    /// Every key's rank selects it again, and every rank's key ranks back to it.
    #[test]
    fn rank_and_select_are_inverse(keys in proptest::collection::vec(key_strategy(), 1..TEST_SIZE)) {
        let bst: BstMap<i64, ()> = keys.iter().map(|&k| (k, ())).collect();

        for i in 0..bst.len() {
            let key = bst.select(i).expect("rank within bounds");
            prop_assert_eq!(bst.rank(key), i);
        }
        for key in &keys {
            prop_assert_eq!(bst.select(bst.rank(key)), Some(key));
        }
        prop_assert!(bst.is_rank_consistent());
    }

    #[test]
    fn removing_every_key_empties_the_map(keys in proptest::collection::vec(key_strategy(), 0..500)) {
        let mut bst: BstMap<i64, i64> = keys.iter().map(|&k| (k, -k)).collect();

        for key in &keys {
            bst.remove(key);
            prop_assert!(!bst.contains(key));
            prop_assert!(bst.is_size_consistent());
            prop_assert!(bst.is_symmetric_ordered());
        }
        prop_assert!(bst.is_empty());
        prop_assert_eq!(bst.height(), None);
    }

    #[test]
    fn clone_is_equal_and_independent(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..500)) {
        let original: BstMap<i64, i64> = entries.iter().copied().collect();
        let mut cloned = original.clone();

        prop_assert_eq!(&cloned, &original);
        prop_assert_eq!(cloned.height(), original.height());

        let min = *original.min().expect("non-empty");
        cloned.remove(&min);
        prop_assert!(original.contains(&min));
        prop_assert_ne!(cloned, original);
    }
}

// ─── Worked examples ─────────────────────────────────────────────────────────

#[test]
fn putting_existing_key_replaces_value() {
    let mut map = BstMap::new();
    map.put(5, "A");
    map.put(5, "B");

    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&5), Some(&"B"));
}

#[test]
fn queries_over_three_keys() {
    let map = BstMap::from([(10, ()), (20, ()), (30, ())]);

    assert_eq!(map.rank(&25), 2);
    assert_eq!(map.floor(&25), Some(&20));
    assert_eq!(map.ceiling(&25), Some(&30));
    assert_eq!(map.select(0), Some(&10));
    assert_eq!(map.select(2), Some(&30));
    assert_eq!(map.min(), Some(&10));
    assert_eq!(map.max(), Some(&30));
}

#[test]
fn closed_interval_queries() {
    let map = BstMap::from([(10, ()), (20, ()), (30, ()), (40, ())]);

    assert_eq!(map.range_len(&15, &35), 2);
    assert_eq!(map.range_keys(&15, &35), [&20, &30]);
    assert_eq!(map.range_len(&10, &40), 4);
    assert_eq!(map.range_len(&25, &24), 0);
    assert!(map.range_keys(&25, &24).is_empty());
}

#[test]
fn removing_node_with_two_children_promotes_predecessor() {
    init_tracing();
    let mut map = BstMap::new();
    for key in [5, 3, 8, 1, 4, 7, 9] {
        map.put(key, key.to_string());
    }

    assert_eq!(map.remove(&5), Some(String::from("5")));

    assert_eq!(map.keys(), [&1, &3, &4, &7, &8, &9]);
    // 4 is the largest key in the old root's left subtree, so it is the new root: it
    // precedes exactly the two keys left of it.
    assert_eq!(map.rank(&4), 2);
    assert_eq!(map.height(), Some(2));
    assert_eq!(map.check(), Ok(()));
}

#[test]
fn removing_absent_key_is_a_no_op() {
    let mut map = BstMap::from([(1, 'a'), (2, 'b')]);
    let before = map.clone();

    assert_eq!(map.remove(&3), None);
    assert_eq!(map, before);
    assert_eq!(map.height(), before.height());
}

#[test]
fn empty_map_answers_every_query() {
    let mut map: BstMap<i32, i32> = BstMap::default();

    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.get(&1), None);
    assert_eq!(map.min(), None);
    assert_eq!(map.max(), None);
    assert_eq!(map.floor(&1), None);
    assert_eq!(map.ceiling(&1), None);
    assert_eq!(map.rank(&1), 0);
    assert_eq!(map.select(0), None);
    assert_eq!(map.range_len(&0, &10), 0);
    assert!(map.keys().is_empty());
    assert_eq!(map.delete_min(), None);
    assert_eq!(map.delete_max(), None);
    assert_eq!(map.remove(&1), None);
    assert_eq!(map.first_key_value(), None);
    assert_eq!(map.height(), None);
    assert_eq!(map.check(), Ok(()));
}

#[test]
fn clear_resets_to_empty() {
    init_tracing();
    let mut map: BstMap<i32, i32> = (0..100).map(|i| (i, i)).collect();
    map.clear();

    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert!(map.keys().is_empty());

    map.put(7, 7);
    assert_eq!(map.keys(), [&7]);
}

#[test]
fn sorted_insertion_degenerates_into_a_path() {
    let mut map = BstMap::new();
    for i in 0..1_000 {
        map.put(i, i);
    }

    assert_eq!(map.height(), Some(999));
    assert_eq!(map.select(500), Some(&500));
    assert_eq!(map.rank(&999), 999);
    assert_eq!(map.check(), Ok(()));

    // Dropping the path must not exhaust the stack.
    drop(map);
}

#[test]
fn delete_min_and_max_drain_in_order() {
    let mut map: BstMap<i32, char> = [(3, 'c'), (1, 'a'), (4, 'd'), (2, 'b'), (5, 'e')].into_iter().collect();

    assert_eq!(map.delete_min(), Some((1, 'a')));
    assert_eq!(map.delete_max(), Some((5, 'e')));
    assert_eq!(map.delete_min(), Some((2, 'b')));
    assert_eq!(map.entries(), [(&3, &'c'), (&4, &'d')]);
    assert_eq!(map.check(), Ok(()));
}

#[test]
fn rank_indexing() {
    let mut map = BstMap::from([("b", 2), ("a", 1), ("c", 3)]);

    assert_eq!(map[Rank(0)], 1);
    map[Rank(2)] += 10;
    assert_eq!(map[&"c"], 13);
    assert_eq!(map.select_entry(2), Some((&"c", &13)));
}

#[test]
fn extend_and_entry_accessors() {
    let mut map = BstMap::new();
    map.extend([(2, "two"), (1, "one")]);
    map.extend([(3, "three")]);

    assert_eq!(map.first_key_value(), Some((&1, &"one")));
    assert_eq!(map.last_key_value(), Some((&3, &"three")));
    assert_eq!(map.get_key_value(&2), Some((&2, &"two")));
    assert_eq!(map.remove_entry(&2), Some((2, "two")));
    assert_eq!(format!("{map:?}"), r#"{1: "one", 3: "three"}"#);
}

#[test]
fn generic_code_uses_the_trait() {
    fn second_smallest<T: SymbolTable<i32, ()>>(table: &T) -> Option<&i32> {
        table.select(1)
    }

    let map = BstMap::from([(9, ()), (4, ()), (6, ())]);
    assert_eq!(second_smallest(&map), Some(&6));
    assert_eq!(SymbolTable::keys(&map), [&4, &6, &9]);
}

#[test]
fn healthy_check_reports_nothing() {
    init_tracing();
    let map: BstMap<i32, i32> = (0..200).map(|i| ((i * 73) % 211, i)).collect();

    let result = map.check();
    assert!(result.is_ok(), "{result:?}");
    assert!(map.is_symmetric_ordered());
    assert!(map.is_size_consistent());
    assert!(map.is_rank_consistent());
    assert_eq!(Invariant::RankConsistency.to_string(), "ranks not consistent");
}
