/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for AvlRangeTree insertion and basic accessors.

use avl_range_tree::AvlRangeTree;

use super::helpers::{avl_height_bound, build_tree, increasing_keys, sorted_keys, walk_with_depth};

#[test]
fn test_new_tree_is_empty() {
    let tree = AvlRangeTree::new();

    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert!(tree.root().is_none());
    assert!(tree.root_index().is_none());
    assert_eq!(tree.num_rotations(), 0);
    tree.check_tree_invariants();
}

#[test]
fn test_default_matches_new() {
    let tree = AvlRangeTree::default();
    assert!(tree.is_empty());
    assert_eq!(tree.mem_usage(), AvlRangeTree::new().mem_usage());
}

#[test]
fn test_first_insert_creates_leaf_root() {
    let tree = build_tree(["x"]);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.height(), 1);

    let root = tree.root().expect("tree has a root");
    assert_eq!(root.key(), b"x");
    assert_eq!(root.height(), 1);
    assert_eq!(root.descendants(), 0);
    assert!(root.is_leaf());
    assert!(root.parent_index().is_none());
}

#[test]
fn test_insert_without_rotation() {
    let tree = build_tree(["b", "a", "c"]);

    let root = tree.root().expect("tree has a root");
    assert_eq!(root.key(), b"b");
    assert_eq!(root.descendants(), 2);
    assert_eq!(root.height(), 2);

    let left = tree.node(root.left_index().expect("left child"));
    let right = tree.node(root.right_index().expect("right child"));
    assert_eq!(left.key(), b"a");
    assert_eq!(right.key(), b"c");
    assert!(left.is_leaf() && right.is_leaf());
    assert_eq!(tree.num_rotations(), 0);
}

#[test]
fn test_duplicates_are_stored_separately() {
    let mut tree = AvlRangeTree::new();
    for expected_len in 1..=10 {
        tree.insert("same");
        assert_eq!(tree.len(), expected_len);
    }
    tree.check_tree_invariants();
    assert_eq!(tree.count("same"), 10);
    assert_eq!(tree.iter().len(), 10);
}

#[test]
fn test_empty_key_is_a_valid_key() {
    let tree = build_tree(["", "a", ""]);

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.count(""), 2);
    assert_eq!(tree.range_count("", ""), 2);
    assert_eq!(sorted_keys(&tree), ["", "", "a"]);
}

#[test]
fn test_keys_compare_as_unsigned_bytes() {
    let inserted: [&[u8]; 4] = [&[0xff], &[0x00], &[0x7f], &[0x80]];
    let tree = build_tree(inserted);

    let expected: [&[u8]; 4] = [&[0x00], &[0x7f], &[0x80], &[0xff]];
    let keys: Vec<&[u8]> = tree.iter().collect();
    assert_eq!(keys, expected);
    assert_eq!(tree.range_count([0x80_u8], [0xff_u8]), 2);
}

#[test]
fn test_prefix_sorts_before_extension() {
    let tree = build_tree(["ab", "a", "abc", "b"]);
    assert_eq!(sorted_keys(&tree), ["a", "ab", "abc", "b"]);
}

#[test]
fn test_increasing_inserts_stay_balanced() {
    let keys = increasing_keys(1000);
    let tree = build_tree(&keys);

    assert_eq!(tree.len(), 1000);
    assert!(
        f64::from(tree.height()) <= avl_height_bound(tree.len()),
        "height {} exceeds AVL bound for {} keys",
        tree.height(),
        tree.len()
    );
    assert_eq!(sorted_keys(&tree), keys);
}

#[test]
fn test_decreasing_inserts_stay_balanced() {
    let mut keys = increasing_keys(1000);
    keys.reverse();
    let tree = build_tree(&keys);

    assert!(f64::from(tree.height()) <= avl_height_bound(tree.len()));
    keys.reverse();
    assert_eq!(sorted_keys(&tree), keys);
}

#[test]
fn test_power_of_two_minus_one_increasing_is_perfect() {
    // 127 increasing inserts produce a perfect tree of height 7.
    let tree = build_tree(increasing_keys(127));
    assert_eq!(tree.height(), 7);

    let mut leaves_at_bottom = 0;
    walk_with_depth(&tree, &mut |_, node, depth| {
        if node.is_leaf() {
            assert_eq!(depth, 6);
            leaves_at_bottom += 1;
        }
    });
    assert_eq!(leaves_at_bottom, 64);
}

#[test]
fn test_descendants_and_heights_after_many_inserts() {
    let keys: Vec<String> = (0..300).map(|i| format!("k{}", (i * 37) % 101)).collect();
    let tree = build_tree(&keys);

    let root = tree.root().expect("tree has a root");
    assert_eq!(root.descendants() + 1, keys.len());
    assert_eq!(root.height(), tree.height());

    walk_with_depth(&tree, &mut |node_idx, node, _| {
        for child in [node.left_index(), node.right_index()].into_iter().flatten() {
            assert_eq!(tree.node(child).parent_index(), Some(node_idx));
        }
    });
}

#[test]
fn test_from_iterator_and_extend() {
    let mut tree: AvlRangeTree = ["m", "c", "x"].into_iter().collect();
    tree.extend(vec![String::from("a"), String::from("z")]);
    tree.check_tree_invariants();

    assert_eq!(tree.len(), 5);
    assert_eq!(sorted_keys(&tree), ["a", "c", "m", "x", "z"]);
}

#[test]
fn test_clone_is_independent() {
    let original = build_tree(["b", "a", "c"]);
    let mut cloned = original.clone();
    cloned.insert("d");

    assert_eq!(original.len(), 3);
    assert_eq!(cloned.len(), 4);
    assert_eq!(original.range_count("a", "z"), 3);
    assert_eq!(cloned.range_count("a", "z"), 4);
}

#[test]
fn test_mem_usage_grows_with_inserts() {
    let mut tree = AvlRangeTree::new();
    let mut last_mem = tree.mem_usage();
    for key in increasing_keys(64) {
        tree.insert(&key);
        let current_mem = tree.mem_usage();
        assert!(current_mem > last_mem);
        last_mem = current_mem;
    }
}
