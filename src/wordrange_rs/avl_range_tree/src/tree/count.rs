/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: range counts and ranks.
//!
//! Every query walks at most two root-to-leaf paths. Subtrees hanging off
//! those paths are either skipped or counted wholesale through their
//! memoized descendant counts.

use super::AvlRangeTree;
use crate::arena::{NodeArena, NodeIndex};

impl AvlRangeTree {
    /// Count the stored keys `k` with `lo <= k <= hi`, duplicates included.
    ///
    /// Both bounds are inclusive. If `lo > hi` no key can satisfy both
    /// comparisons and the count is 0.
    ///
    /// # Split Traversal
    ///
    /// 1. Walk down from the root to the *split node*, the first node whose
    ///    key lies inside `[lo, hi]`. Nodes below `lo` send the walk right,
    ///    nodes above `hi` send it left; either way the skipped side holds no
    ///    matching key.
    /// 2. Every key in the split node's left subtree is `<= hi`, so only the
    ///    `lo` bound matters there: see [`Self::count_at_least`].
    /// 3. Symmetrically, only `hi` matters in its right subtree: see
    ///    [`Self::count_at_most`].
    ///
    /// Runs in O(log n) regardless of how many keys match.
    pub fn range_count(&self, lo: impl AsRef<[u8]>, hi: impl AsRef<[u8]>) -> usize {
        let (lo, hi) = (lo.as_ref(), hi.as_ref());

        let mut cursor = self.root;
        let mut count = 0;
        while let Some(node_idx) = cursor {
            let node = &self.nodes[node_idx];
            if node.key() < lo {
                cursor = node.right_index();
            } else if node.key() > hi {
                cursor = node.left_index();
            } else {
                count = 1
                    + Self::count_at_least(&self.nodes, node.left_index(), lo)
                    + Self::count_at_most(&self.nodes, node.right_index(), hi);
                break;
            }
        }

        #[cfg(feature = "unittest")]
        self.check_range_count(lo, hi, count);

        count
    }

    /// Number of stored keys strictly less than `key`.
    ///
    /// This is the position `key` would take in the sorted sequence if it
    /// were inserted before any equal keys.
    pub fn rank(&self, key: impl AsRef<[u8]>) -> usize {
        self.len() - Self::count_at_least(&self.nodes, self.root, key.as_ref())
    }

    /// Number of stored copies of `key`.
    pub fn count(&self, key: impl AsRef<[u8]>) -> usize {
        let key = key.as_ref();
        self.range_count(key, key)
    }

    /// Count the keys `>= lo` in the subtree rooted at `subtree`.
    ///
    /// A node whose key is `>= lo` counts itself and its whole right subtree,
    /// then the walk continues left. A node below `lo` rules out itself and
    /// its left subtree, and the walk continues right.
    fn count_at_least(nodes: &NodeArena, subtree: Option<NodeIndex>, lo: &[u8]) -> usize {
        let mut cursor = subtree;
        let mut count = 0;
        while let Some(node_idx) = cursor {
            let node = &nodes[node_idx];
            if node.key() >= lo {
                count += 1 + nodes.subtree_size(node.right_index());
                cursor = node.left_index();
            } else {
                cursor = node.right_index();
            }
        }
        count
    }

    /// Count the keys `<= hi` in the subtree rooted at `subtree`.
    ///
    /// Mirror image of [`Self::count_at_least`].
    fn count_at_most(nodes: &NodeArena, subtree: Option<NodeIndex>, hi: &[u8]) -> usize {
        let mut cursor = subtree;
        let mut count = 0;
        while let Some(node_idx) = cursor {
            let node = &nodes[node_idx];
            if node.key() <= hi {
                count += 1 + nodes.subtree_size(node.left_index());
                cursor = node.right_index();
            } else {
                cursor = node.left_index();
            }
        }
        count
    }
}
