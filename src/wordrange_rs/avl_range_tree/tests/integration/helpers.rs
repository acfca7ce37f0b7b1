/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Shared test helpers for the AVL range tree integration tests.

use avl_range_tree::{AvlNode, AvlRangeTree, NodeIndex};

/// Build a tree by inserting `keys` in order, checking every invariant
/// after each insert.
pub fn build_tree<K: AsRef<[u8]>>(keys: impl IntoIterator<Item = K>) -> AvlRangeTree {
    let mut tree = AvlRangeTree::new();
    for key in keys {
        tree.insert(key);
        tree.check_tree_invariants();
    }
    tree
}

/// `n` keys whose lexicographic order matches their numeric order:
/// `"00000"`, `"00001"`, ...
pub fn increasing_keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{i:05}")).collect()
}

/// The stored keys in ascending order, as strings.
pub fn sorted_keys(tree: &AvlRangeTree) -> Vec<String> {
    tree.iter()
        .map(|key| String::from_utf8_lossy(key).into_owned())
        .collect()
}

/// Count the keys in `[lo, hi]` by scanning every inserted key.
pub fn brute_force_count<K: AsRef<[u8]>>(keys: &[K], lo: &[u8], hi: &[u8]) -> usize {
    keys.iter()
        .filter(|key| lo <= key.as_ref() && key.as_ref() <= hi)
        .count()
}

/// Upper bound on the height of an AVL tree holding `n` keys.
pub fn avl_height_bound(n: usize) -> f64 {
    1.44 * (n as f64).log2() + 2.0
}

/// Walk the tree depth-first, calling `visitor(node_idx, node, depth)` for each node.
pub fn walk_with_depth(
    tree: &AvlRangeTree,
    visitor: &mut dyn FnMut(NodeIndex, &AvlNode, usize),
) {
    fn walk_inner(
        tree: &AvlRangeTree,
        node_idx: NodeIndex,
        depth: usize,
        visitor: &mut dyn FnMut(NodeIndex, &AvlNode, usize),
    ) {
        let node = tree.node(node_idx);
        visitor(node_idx, node, depth);
        if let Some(left) = node.left_index() {
            walk_inner(tree, left, depth + 1, visitor);
        }
        if let Some(right) = node.right_index() {
            walk_inner(tree, right, depth + 1, visitor);
        }
    }
    if let Some(root) = tree.root_index() {
        walk_inner(tree, root, 0, visitor);
    }
}
