// HashMap property tests (model-based).
//
// Property 1: operation sequences match std::collections::HashMap.
//  - Model: std HashMap driven with the same operations.
//  - Operations: insert, remove, get, entry-or-insert, clear, trim, retain.
//  - Invariant after each step: return values, len(), and contains_key()
//    agree with the model.
//
// Property 2: probe reachability after deletion.
//  - Insert N random keys, delete a random subset, assert every survivor is
//    still found with its last-assigned value.
//
// Property 3: removal during iteration visits each entry exactly once.
//  - extract_if with a counting predicate over a randomly built map; every
//    key present at the start is tested once, regardless of which entries
//    the predicate removes.
use std::collections::HashMap as StdHashMap;

use proptest::prelude::*;
use shift_hash::HashMap;

#[derive(Debug, Clone)]
enum Op {
    Insert(u16, i32),
    Remove(u16),
    Get(u16),
    OrInsert(u16, i32),
    Clear,
    Trim,
    Retain(u16),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => (any::<u16>(), any::<i32>()).prop_map(|(k, v)| Op::Insert(k % 512, v)),
        4 => any::<u16>().prop_map(|k| Op::Remove(k % 512)),
        4 => any::<u16>().prop_map(|k| Op::Get(k % 512)),
        2 => (any::<u16>(), any::<i32>()).prop_map(|(k, v)| Op::OrInsert(k % 512, v)),
        1 => Just(Op::Clear),
        1 => Just(Op::Trim),
        1 => any::<u16>().prop_map(|m| Op::Retain(m % 7 + 2)),
    ]
}

proptest! {
    #[test]
    fn prop_matches_std_hashmap(ops in proptest::collection::vec(op_strategy(), 1..400)) {
        let mut map: HashMap<u16, i32> = HashMap::new();
        let mut model: StdHashMap<u16, i32> = StdHashMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    prop_assert_eq!(map.insert(k, v), model.insert(k, v));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(map.remove(&k), model.remove(&k));
                }
                Op::Get(k) => {
                    prop_assert_eq!(map.get(&k), model.get(&k));
                }
                Op::OrInsert(k, v) => {
                    let got = *map.entry(k).or_insert(v);
                    let expected = *model.entry(k).or_insert(v);
                    prop_assert_eq!(got, expected);
                }
                Op::Clear => {
                    map.clear();
                    model.clear();
                }
                Op::Trim => {
                    prop_assert!(map.trim());
                }
                Op::Retain(m) => {
                    let m = i32::from(m);
                    map.retain(|_, v| *v % m != 0);
                    model.retain(|_, v| *v % m != 0);
                }
            }

            prop_assert_eq!(map.len(), model.len());
        }

        // Final sweep: both directions, so neither map holds extras.
        for (k, v) in map.iter() {
            prop_assert_eq!(model.get(k), Some(v));
        }
        for (k, v) in &model {
            prop_assert_eq!(map.get(k), Some(v));
        }
    }

    #[test]
    fn prop_survivors_stay_reachable(
        keys in proptest::collection::hash_set(any::<u32>(), 1..200),
        seed in any::<u64>(),
    ) {
        let keys: Vec<u32> = keys.into_iter().collect();
        let mut map: HashMap<u32, u32> = HashMap::new();
        for &k in &keys {
            map.insert(k, k.wrapping_mul(31));
        }

        // Deterministically pick roughly half the keys to delete.
        let (deleted, kept): (Vec<u32>, Vec<u32>) = keys
            .iter()
            .copied()
            .partition(|&k| (u64::from(k) ^ seed).count_ones() % 2 == 0);

        for &k in &deleted {
            prop_assert_eq!(map.remove(&k), Some(k.wrapping_mul(31)));
        }

        prop_assert_eq!(map.len(), kept.len());
        for &k in &kept {
            prop_assert_eq!(map.get(&k), Some(&k.wrapping_mul(31)));
        }
        for &k in &deleted {
            prop_assert!(!map.contains_key(&k));
        }
    }

    #[test]
    fn prop_extract_if_visits_each_key_once(
        keys in proptest::collection::hash_set(any::<u32>(), 1..200),
        modulus in 2u32..8,
    ) {
        let keys: Vec<u32> = keys.into_iter().collect();
        let mut map: HashMap<u32, u32> = HashMap::new();
        for &k in &keys {
            map.insert(k, 0);
        }

        let mut visits: StdHashMap<u32, u32> = StdHashMap::new();
        let removed: Vec<(u32, u32)> = map
            .extract_if(|k, _| {
                *visits.entry(*k).or_insert(0) += 1;
                k % modulus == 0
            })
            .collect();

        prop_assert_eq!(visits.len(), keys.len());
        prop_assert!(visits.values().all(|&count| count == 1));

        let expected_removed = keys.iter().filter(|&&k| k % modulus == 0).count();
        prop_assert_eq!(removed.len(), expected_removed);
        prop_assert_eq!(map.len(), keys.len() - expected_removed);
        for &k in &keys {
            prop_assert_eq!(map.contains_key(&k), k % modulus != 0);
        }
    }

    #[test]
    fn prop_resize_churn_preserves_content(
        rounds in 1usize..6,
        per_round in 8usize..64,
    ) {
        // Drive the map across grow and shrink thresholds repeatedly; the
        // surviving key set must be exact after every round.
        let mut map: HashMap<usize, usize> = HashMap::with_capacity(8);
        let mut model: StdHashMap<usize, usize> = StdHashMap::new();

        for round in 0..rounds {
            for i in 0..per_round {
                let k = round * 1000 + i;
                map.insert(k, i);
                model.insert(k, i);
            }
            for i in (0..per_round).step_by(2) {
                let k = round * 1000 + i;
                prop_assert_eq!(map.remove(&k), model.remove(&k));
            }

            prop_assert_eq!(map.len(), model.len());
            for (k, v) in &model {
                prop_assert_eq!(map.get(k), Some(v));
            }
        }
    }
}
