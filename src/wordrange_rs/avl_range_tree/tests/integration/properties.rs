/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property-based tests for the AVL range tree using `proptest`.

#[cfg(not(miri))]
mod proptests {
    use avl_range_tree::AvlRangeTree;
    use proptest::prelude::*;

    use crate::helpers::{avl_height_bound, brute_force_count};

    /// Short keys over a small alphabet, so duplicates and shared prefixes
    /// are common.
    fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(b'a'..=b'e', 0..4)
    }

    proptest::proptest! {
        #[test]
        fn prop_range_count_matches_brute_force(
            keys in proptest::collection::vec(key_strategy(), 0..200),
            queries in proptest::collection::vec((key_strategy(), key_strategy()), 1..50),
        ) {
            let tree: AvlRangeTree = keys.iter().collect();

            for (lo, hi) in &queries {
                let expected = brute_force_count(&keys, lo, hi);
                prop_assert_eq!(tree.range_count(lo, hi), expected);
                prop_assert_eq!(tree.recount_range(lo, hi), expected);
            }
        }

        #[test]
        fn prop_tree_invariants_after_inserts(
            keys in proptest::collection::vec(key_strategy(), 1..300)
        ) {
            let mut tree = AvlRangeTree::new();
            for (i, key) in keys.iter().enumerate() {
                tree.insert(key);
                prop_assert_eq!(tree.len(), i + 1);
            }
            tree.check_tree_invariants();
            prop_assert!(f64::from(tree.height()) <= avl_height_bound(tree.len()));
        }

        #[test]
        fn prop_in_order_is_sorted_input(
            keys in proptest::collection::vec(key_strategy(), 0..200)
        ) {
            let tree: AvlRangeTree = keys.iter().collect();

            let mut expected = keys.clone();
            expected.sort();
            let actual: Vec<&[u8]> = tree.iter().collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn prop_rank_and_count_match_brute_force(
            keys in proptest::collection::vec(key_strategy(), 0..200),
            probe in key_strategy(),
        ) {
            let tree: AvlRangeTree = keys.iter().collect();

            let smaller = keys.iter().filter(|key| **key < probe).count();
            let equal = keys.iter().filter(|key| **key == probe).count();
            prop_assert_eq!(tree.rank(&probe), smaller);
            prop_assert_eq!(tree.count(&probe), equal);
        }

        #[test]
        fn prop_arbitrary_bytes_keep_invariants(
            keys in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..8), 1..150)
        ) {
            let tree: AvlRangeTree = keys.iter().collect();
            tree.check_tree_invariants();

            let min = keys.iter().min().cloned().unwrap_or_default();
            let max = keys.iter().max().cloned().unwrap_or_default();
            prop_assert_eq!(tree.range_count(&min, &max), keys.len());
        }

        #[test]
        fn prop_memory_usage_monotonic_with_inserts(
            keys in proptest::collection::vec(key_strategy(), 1..100)
        ) {
            let mut tree = AvlRangeTree::new();
            let mut last_mem = tree.mem_usage();

            for key in &keys {
                tree.insert(key);
                let current_mem = tree.mem_usage();
                prop_assert!(
                    current_mem >= last_mem,
                    "mem_usage decreased from {} to {} after insert",
                    last_mem,
                    current_mem
                );
                last_mem = current_mem;
            }
        }
    }
}
