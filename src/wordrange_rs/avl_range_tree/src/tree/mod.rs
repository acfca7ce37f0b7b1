/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AVL range tree implementation.
//!
//! The implementation is split into sub-modules by concern:
//! - [`insert`]: Write path (insert, rotations, rebalancing)
//! - [`count`]: Read path (range counts and ranks)
//! - [`invariants`]: Structural checks used by tests and the `unittest` feature

mod count;
mod insert;
mod invariants;

use crate::arena::{NodeArena, NodeIndex};
use crate::{AvlNode, InOrderIter, PreOrderDfsIterator};

/// Aggregate statistics for an [`AvlRangeTree`].
///
/// Updated incrementally on insertion and verified against a full walk of
/// the arena by the invariant checks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TreeStats {
    /// Total number of key bytes stored across all nodes.
    pub key_bytes: usize,
    /// Number of single rotations performed since the tree was created.
    /// A double rotation counts as two.
    pub num_rotations: usize,
}

/// An order-statistics AVL tree over byte-string keys.
///
/// Keys are compared lexicographically as unsigned bytes. Duplicates are
/// stored, never merged: inserting a key that is already present adds one
/// more node.
///
/// Every node memoizes its subtree height and the number of nodes below it,
/// which lets [`range_count`](Self::range_count) absorb whole subtrees that
/// are known to lie inside the query bounds instead of visiting each key.
///
/// # Arena Storage
///
/// All nodes are stored in a [`NodeArena`]. Children and parents are
/// referenced by [`NodeIndex`] instead of `Box<AvlNode>`, so a rotation only
/// rewrites handles and the parent back-link cannot dangle.
#[derive(Debug, Default, Clone)]
pub struct AvlRangeTree {
    /// The root node index, `None` while the tree is empty.
    root: Option<NodeIndex>,
    /// Arena holding all tree nodes.
    nodes: NodeArena,
    /// Aggregate statistics for the tree.
    stats: TreeStats,
}

impl AvlRangeTree {
    /// Create a new empty tree.
    pub const fn new() -> Self {
        Self {
            root: None,
            nodes: NodeArena::new(),
            stats: TreeStats {
                key_bytes: 0,
                num_rotations: 0,
            },
        }
    }

    /// Resolve a [`NodeIndex`] to a shared reference to the node.
    ///
    /// # Panics
    ///
    /// Panics if `idx` was not handed out by this tree.
    pub fn node(&self, idx: NodeIndex) -> &AvlNode {
        &self.nodes[idx]
    }

    /// Get a reference to the root node, if any.
    pub fn root(&self) -> Option<&AvlNode> {
        self.root.map(|idx| &self.nodes[idx])
    }

    /// Get the root node index.
    pub const fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    /// Number of keys stored in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.nodes.subtree_size(self.root)
    }

    /// Returns `true` when no key has been inserted yet.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree. An empty tree has height 0, a single key height 1.
    pub fn height(&self) -> u32 {
        self.nodes.height(self.root)
    }

    /// Number of single rotations performed so far.
    pub const fn num_rotations(&self) -> usize {
        self.stats.num_rotations
    }

    /// Returns an iterator over the stored keys in ascending order.
    pub fn iter(&self) -> InOrderIter<'_> {
        InOrderIter::new(self)
    }

    /// Returns an iterator over all nodes in pre-order (node, left, right).
    pub fn pre_order(&self) -> PreOrderDfsIterator<'_> {
        PreOrderDfsIterator::new(self)
    }

    /// Calculate the total memory usage of the tree, in bytes.
    pub fn mem_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.nodes.mem_usage() + self.stats.key_bytes
    }
}

impl<K: AsRef<[u8]>> Extend<K> for AvlRangeTree {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K: AsRef<[u8]>> FromIterator<K> for AvlRangeTree {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}
