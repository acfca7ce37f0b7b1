/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: insertion, rotations, and rebalancing.
//!
//! Inserting a key descends to an empty slot, hangs a new leaf there, and
//! restores the AVL balance on the way back up with at most one single or
//! double rotation.

use super::{AvlRangeTree, TreeStats};
use crate::arena::{NodeArena, NodeIndex};
use crate::{AvlNode, Side};

impl AvlRangeTree {
    /// Insert `key` into the tree.
    ///
    /// Keys equal to an existing key are stored again and routed to the
    /// right of it, so the tree grows by exactly one node on every call.
    pub fn insert(&mut self, key: impl AsRef<[u8]>) {
        let key = key.as_ref();

        #[cfg(feature = "unittest")]
        let (len_before, stats_before) = (self.len(), self.stats);

        let root = Self::node_insert(&mut self.nodes, self.root, None, key, &mut self.stats);
        self.root = Some(root);
        self.stats.key_bytes += key.len();

        #[cfg(feature = "unittest")]
        {
            self.check_insert_delta(len_before, stats_before, key);
            self.check_tree_invariants();
        }
    }

    /// Recursive insert implementation.
    ///
    /// Returns the root of the subtree that now occupies `slot`, which the
    /// caller links into its own child slot (or the tree root).
    ///
    /// # Algorithm
    ///
    /// 1. **Empty slot**: allocate a leaf whose parent is `parent`.
    /// 2. **Occupied slot**: the new key will end up below this node, so its
    ///    descendant count grows by one before recursing into the child on
    ///    the key's side.
    /// 3. **On the way back**: relink the (possibly rotated) child, refresh
    ///    the height, and rebalance if this is the lowest unbalanced ancestor.
    fn node_insert(
        nodes: &mut NodeArena,
        slot: Option<NodeIndex>,
        parent: Option<NodeIndex>,
        key: &[u8],
        stats: &mut TreeStats,
    ) -> NodeIndex {
        let Some(node_idx) = slot else {
            return nodes.insert(AvlNode::leaf(key.into(), parent));
        };

        let node = &mut nodes[node_idx];
        node.descendants += 1;
        let side = Side::for_key(key, node.key());
        let child_idx = node.child(side);

        let new_child = Self::node_insert(nodes, child_idx, Some(node_idx), key, stats);
        nodes[node_idx].set_child(side, Some(new_child));
        nodes.update_height(node_idx);

        Self::rebalance(nodes, node_idx, key, stats)
    }

    /// Restore the balance of the node at `node_idx` after `key` was inserted
    /// below it.
    ///
    /// Returns the index of the node now at the top of this subtree.
    ///
    /// # Rotation Cases
    ///
    /// The heavy side is the side whose height exceeds the other by two. The
    /// key's side relative to the heavy child picks the case:
    ///
    /// - **Outer** (left-left, right-right): the key went to the heavy
    ///   child's outer side. A single rotation away from the heavy side fixes it.
    /// - **Inner** (left-right, right-left): the key went to the heavy child's
    ///   inner side. The heavy child is first rotated toward the heavy side,
    ///   which turns the case into an outer one.
    ///
    /// The key's side is computed with the same comparison the descent used,
    /// so the inner grandchild is guaranteed to exist in the inner case.
    fn rebalance(
        nodes: &mut NodeArena,
        node_idx: NodeIndex,
        key: &[u8],
        stats: &mut TreeStats,
    ) -> NodeIndex {
        let balance = nodes.balance_factor(node_idx);
        let heavy = if balance > 1 {
            Side::Left
        } else if balance < -1 {
            Side::Right
        } else {
            return node_idx;
        };

        let child_idx = nodes[node_idx]
            .child(heavy)
            .expect("the heavy side of an unbalanced node has a child");

        if Side::for_key(key, nodes[child_idx].key()) != heavy {
            let new_child = Self::rotate(nodes, child_idx, heavy);
            nodes[node_idx].set_child(heavy, Some(new_child));
            stats.num_rotations += 1;
        }

        stats.num_rotations += 1;
        Self::rotate(nodes, node_idx, heavy.opposite())
    }

    /// Rotate the subtree rooted at `node_idx` so that the node moves down to
    /// its `direction` side and its child on the opposite side takes its place.
    ///
    /// `rotate(node, Side::Left)` is a left rotation: the right child becomes
    /// the subtree root and `node` becomes its left child.
    ///
    /// Parent links of the node, the pivot, and the relinked inner grandchild
    /// are rewritten here. The caller must store the returned pivot in the
    /// old parent's child slot (or as the tree root).
    ///
    /// Sizes and heights are recomputed in O(1):
    /// - `node` keeps its `direction` child and gains the pivot's inner child.
    /// - The pivot now roots the same population `node` used to root.
    /// - `node`'s height is refreshed before the pivot's, which depends on it.
    fn rotate(nodes: &mut NodeArena, node_idx: NodeIndex, direction: Side) -> NodeIndex {
        let rising = direction.opposite();
        let pivot_idx = nodes[node_idx]
            .child(rising)
            .expect("rotation requires a child on the rising side");
        let inner_idx = nodes[pivot_idx].child(direction);

        let old_parent = nodes[node_idx].parent;
        let old_descendants = nodes[node_idx].descendants;
        let node_descendants =
            nodes.subtree_size(nodes[node_idx].child(direction)) + nodes.subtree_size(inner_idx);

        // Relink children.
        nodes[node_idx].set_child(rising, inner_idx);
        nodes[pivot_idx].set_child(direction, Some(node_idx));

        // Relink parents.
        nodes[pivot_idx].parent = old_parent;
        nodes[node_idx].parent = Some(pivot_idx);
        if let Some(inner_idx) = inner_idx {
            nodes[inner_idx].parent = Some(node_idx);
        }

        nodes[node_idx].descendants = node_descendants;
        nodes[pivot_idx].descendants = old_descendants;

        nodes.update_height(node_idx);
        nodes.update_height(pivot_idx);

        pivot_idx
    }
}
