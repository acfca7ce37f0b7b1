/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for AVL tree nodes.
//!
//! Nodes live in a single growable vector and refer to each other through
//! [`NodeIndex`] handles. A rotation rewrites a handful of handles instead of
//! moving boxed subtrees around, and the non-owning parent link is just
//! another handle.

use std::ops::{Index, IndexMut};

use crate::AvlNode;

/// Index into the node arena.
///
/// Handles are stable for the lifetime of the tree: nodes are never removed,
/// so a slot is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// The position of the node inside the arena.
    pub const fn position(self) -> u32 {
        self.0
    }
}

/// Append-only arena of [`AvlNode`]s.
#[derive(Debug, Default, Clone)]
pub(crate) struct NodeArena {
    nodes: Vec<AvlNode>,
}

impl NodeArena {
    /// Create a new empty arena.
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Get the number of nodes stored in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a node into the arena, returning its index.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `u32::MAX` nodes.
    pub fn insert(&mut self, node: AvlNode) -> NodeIndex {
        let position = u32::try_from(self.nodes.len()).expect("node arena is full");
        self.nodes.push(node);
        NodeIndex(position)
    }

    /// Iterate over all nodes in the arena, in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &AvlNode)> {
        (0u32..)
            .zip(self.nodes.iter())
            .map(|(position, node)| (NodeIndex(position), node))
    }

    /// Number of nodes in the subtree rooted at `idx`, itself included.
    ///
    /// An absent subtree has size 0.
    pub fn subtree_size(&self, idx: Option<NodeIndex>) -> usize {
        idx.map_or(0, |idx| self[idx].descendants() + 1)
    }

    /// Height of the subtree rooted at `idx`. An absent subtree has height 0.
    pub fn height(&self, idx: Option<NodeIndex>) -> u32 {
        idx.map_or(0, |idx| self[idx].height())
    }

    /// `height(left) - height(right)` for the node at `idx`.
    pub fn balance_factor(&self, idx: NodeIndex) -> i64 {
        let node = &self[idx];
        i64::from(self.height(node.left_index())) - i64::from(self.height(node.right_index()))
    }

    /// Recompute the height of the node at `idx` from its children.
    pub fn update_height(&mut self, idx: NodeIndex) {
        let node = &self[idx];
        let height = 1 + self
            .height(node.left_index())
            .max(self.height(node.right_index()));
        self[idx].height = height;
    }

    /// Get the memory used by the arena's backing vector, in bytes.
    ///
    /// Key bytes are heap-allocated separately and are not included.
    pub fn mem_usage(&self) -> usize {
        self.nodes.capacity() * std::mem::size_of::<AvlNode>()
    }
}

impl Index<NodeIndex> for NodeArena {
    type Output = AvlNode;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        &self.nodes[idx.0 as usize]
    }
}

impl IndexMut<NodeIndex> for NodeArena {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[idx.0 as usize]
    }
}
