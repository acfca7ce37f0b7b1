/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Invariant checks for the AVL range tree.
//!
//! [`AvlRangeTree::check_tree_invariants`] is always available so tests can
//! call it directly. With the `unittest` feature flag it also runs after
//! every insert, and every range count is recomputed the slow way.

use super::{AvlRangeTree, TreeStats};
use crate::arena::NodeIndex;

/// What the recursive check learns about a subtree.
struct SubtreeSummary<'a> {
    /// Number of nodes, the subtree root included.
    size: usize,
    height: u32,
    min_key: &'a [u8],
    max_key: &'a [u8],
}

impl AvlRangeTree {
    /// Verify all structural invariants of the tree.
    ///
    /// Checks, for every node:
    /// 1. **Order**: keys in the left subtree are `<=` the node's key, keys in
    ///    the right subtree are `>=` it.
    /// 2. **Balance**: child heights differ by at most one.
    /// 3. **Size**: the memoized descendant count matches a recount.
    /// 4. **Parent links**: each child points back at its parent, the root
    ///    has no parent.
    ///
    /// It also checks that every arena node is reachable from the root
    /// exactly once and that the memoized stats match the arena contents.
    ///
    /// # Panics
    ///
    /// Panics with a descriptive message on the first violation.
    pub fn check_tree_invariants(&self) {
        match self.root {
            None => assert_eq!(
                self.nodes.len(),
                0,
                "empty tree must not own any node, found {}",
                self.nodes.len(),
            ),
            Some(root_idx) => {
                assert_eq!(
                    self.nodes[root_idx].parent_index(),
                    None,
                    "root {root_idx:?} must not have a parent",
                );
                let summary = self.check_node_invariants(root_idx);
                assert_eq!(
                    summary.size,
                    self.nodes.len(),
                    "{} nodes reachable from the root, but the arena holds {}",
                    summary.size,
                    self.nodes.len(),
                );
            }
        }
        self.check_memoized_stats();
    }

    /// Recursively check invariants for the subtree rooted at `node_idx`.
    fn check_node_invariants(&self, node_idx: NodeIndex) -> SubtreeSummary<'_> {
        let node = self.node(node_idx);
        let mut summary = SubtreeSummary {
            size: 1,
            height: 0,
            min_key: node.key(),
            max_key: node.key(),
        };
        let mut left_height = 0;
        let mut right_height = 0;

        if let Some(left_idx) = node.left_index() {
            assert_eq!(
                self.node(left_idx).parent_index(),
                Some(node_idx),
                "left child {left_idx:?} of {node_idx:?} points at the wrong parent",
            );
            let left = self.check_node_invariants(left_idx);
            assert!(
                left.max_key <= node.key(),
                "left subtree max {:?} is greater than key {:?} at node {node_idx:?}",
                String::from_utf8_lossy(left.max_key),
                String::from_utf8_lossy(node.key()),
            );
            summary.size += left.size;
            summary.min_key = left.min_key;
            left_height = left.height;
        }

        if let Some(right_idx) = node.right_index() {
            assert_eq!(
                self.node(right_idx).parent_index(),
                Some(node_idx),
                "right child {right_idx:?} of {node_idx:?} points at the wrong parent",
            );
            let right = self.check_node_invariants(right_idx);
            assert!(
                right.min_key >= node.key(),
                "right subtree min {:?} is less than key {:?} at node {node_idx:?}",
                String::from_utf8_lossy(right.min_key),
                String::from_utf8_lossy(node.key()),
            );
            summary.size += right.size;
            summary.max_key = right.max_key;
            right_height = right.height;
        }

        summary.height = left_height.max(right_height) + 1;
        assert_eq!(
            node.height(),
            summary.height,
            "height mismatch at node {node_idx:?}: stored {}, expected {} \
             (left={left_height}, right={right_height})",
            node.height(),
            summary.height,
        );

        let imbalance = left_height.abs_diff(right_height);
        assert!(
            imbalance <= 1,
            "balance factor out of range at node {node_idx:?} \
             (left={left_height}, right={right_height})",
        );

        assert_eq!(
            node.descendants(),
            summary.size - 1,
            "descendant count mismatch at node {node_idx:?}: stored {}, counted {}",
            node.descendants(),
            summary.size - 1,
        );

        summary
    }

    /// Sum the key lengths of every node in the arena.
    fn compute_key_bytes(&self) -> usize {
        self.nodes.iter().map(|(_, node)| node.key().len()).sum()
    }

    /// Assert that `self.stats` reflects the arena contents.
    fn check_memoized_stats(&self) {
        let computed = self.compute_key_bytes();
        assert_eq!(
            self.stats.key_bytes, computed,
            "key_bytes: memoized={}, computed={computed}",
            self.stats.key_bytes,
        );
        let TreeStats { num_rotations, .. } = self.stats;
        assert!(
            num_rotations <= 2 * self.nodes.len(),
            "num_rotations ({num_rotations}) exceeds two per inserted key ({} keys)",
            self.nodes.len(),
        );
    }

    /// Count the keys in `[lo, hi]` by visiting every node of the tree.
    ///
    /// This is the O(n) reference [`Self::range_count`] is checked against.
    /// It must always return the same value.
    pub fn recount_range(&self, lo: impl AsRef<[u8]>, hi: impl AsRef<[u8]>) -> usize {
        self.recursive_range_count(self.root, lo.as_ref(), hi.as_ref())
    }

    fn recursive_range_count(
        &self,
        subtree: Option<NodeIndex>,
        lo: &[u8],
        hi: &[u8],
    ) -> usize {
        let Some(node_idx) = subtree else {
            return 0;
        };
        let node = self.node(node_idx);
        let here = usize::from(lo <= node.key() && node.key() <= hi);
        here + self.recursive_range_count(node.left_index(), lo, hi)
            + self.recursive_range_count(node.right_index(), lo, hi)
    }

    /// Verify a range count against [`Self::recount_range`].
    #[cfg(feature = "unittest")]
    pub(crate) fn check_range_count(&self, lo: &[u8], hi: &[u8], count: usize) {
        let expected = self.recount_range(lo, hi);
        assert_eq!(
            count,
            expected,
            "range_count({:?}, {:?}) returned {count}, a full walk counts {expected}",
            String::from_utf8_lossy(lo),
            String::from_utf8_lossy(hi),
        );
    }

    /// Verify that an insert added exactly one node holding `key`, and that
    /// it needed at most one single or double rotation.
    #[cfg(feature = "unittest")]
    pub(crate) fn check_insert_delta(&self, len_before: usize, before: TreeStats, key: &[u8]) {
        assert_eq!(
            self.len(),
            len_before + 1,
            "insert must grow the tree by one node: before={len_before}, after={}",
            self.len(),
        );
        assert_eq!(
            self.stats.key_bytes,
            before.key_bytes + key.len(),
            "key_bytes mismatch: before={}, key length={}, after={}",
            before.key_bytes,
            key.len(),
            self.stats.key_bytes,
        );
        let rotations = self.stats.num_rotations - before.num_rotations;
        assert!(
            rotations <= 2,
            "a single insert performed {rotations} rotations",
        );
    }
}
