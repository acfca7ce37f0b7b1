/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AvlNode - A single stored key in the AVL range tree.

use crate::arena::NodeIndex;

/// Which child slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The side the descent takes when routing `key` past a node holding
    /// `node_key`. Ties go right.
    pub fn for_key(key: &[u8], node_key: &[u8]) -> Self {
        if key < node_key {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// The other side.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A node of an [`AvlRangeTree`](crate::AvlRangeTree).
///
/// Besides the key, every node memoizes the height of its subtree and the
/// number of nodes below it. Children are owning handles into the tree's
/// arena, the parent is a non-owning back-link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvlNode {
    pub(crate) key: Box<[u8]>,
    /// `1 + max(height(left), height(right))`. A leaf has height 1.
    pub(crate) height: u32,
    /// Number of nodes in this subtree, excluding this node.
    pub(crate) descendants: usize,
    pub(crate) left: Option<NodeIndex>,
    pub(crate) right: Option<NodeIndex>,
    pub(crate) parent: Option<NodeIndex>,
}

impl AvlNode {
    /// Create a leaf holding `key`, hanging from `parent`.
    pub(crate) fn leaf(key: Box<[u8]>, parent: Option<NodeIndex>) -> Self {
        Self {
            key,
            height: 1,
            descendants: 0,
            left: None,
            right: None,
            parent,
        }
    }

    /// The stored key.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Height of the subtree rooted at this node.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of nodes strictly below this node.
    pub const fn descendants(&self) -> usize {
        self.descendants
    }

    pub const fn left_index(&self) -> Option<NodeIndex> {
        self.left
    }

    pub const fn right_index(&self) -> Option<NodeIndex> {
        self.right
    }

    /// The structural parent, `None` for the root.
    pub const fn parent_index(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// The child handle on `side`.
    pub const fn child(&self, side: Side) -> Option<NodeIndex> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) const fn set_child(&mut self, side: Side, child: Option<NodeIndex>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Returns true if this node has no children.
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
