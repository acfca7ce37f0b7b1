/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Iterators for traversing the AVL range tree.
//!
//! - [`InOrderIter`] yields keys in ascending order. It needs no stack: it
//!   climbs back up through the nodes' parent links.
//! - [`PreOrderDfsIterator`] yields nodes parent-first, using an explicit
//!   stack of node indices.

use std::iter::FusedIterator;

use crate::arena::NodeIndex;
use crate::{AvlNode, AvlRangeTree};

/// An iterator over the keys of an [`AvlRangeTree`] in ascending order.
///
/// Equal keys are yielded once per stored copy.
#[derive(Debug, Clone)]
pub struct InOrderIter<'a> {
    tree: &'a AvlRangeTree,
    /// The next node to yield.
    next: Option<NodeIndex>,
    /// Number of keys not yet yielded.
    remaining: usize,
}

impl<'a> InOrderIter<'a> {
    /// Create a new iterator positioned on the smallest key of `tree`.
    pub fn new(tree: &'a AvlRangeTree) -> Self {
        Self {
            tree,
            next: tree.root_index().map(|root| Self::leftmost(tree, root)),
            remaining: tree.len(),
        }
    }

    /// The leftmost node of the subtree rooted at `node_idx`.
    fn leftmost(tree: &AvlRangeTree, mut node_idx: NodeIndex) -> NodeIndex {
        while let Some(left) = tree.node(node_idx).left_index() {
            node_idx = left;
        }
        node_idx
    }

    /// The in-order successor of `node_idx`.
    ///
    /// If the node has a right subtree, the successor is its leftmost node.
    /// Otherwise climb until we arrive at a parent from its left side.
    fn successor(tree: &AvlRangeTree, node_idx: NodeIndex) -> Option<NodeIndex> {
        if let Some(right) = tree.node(node_idx).right_index() {
            return Some(Self::leftmost(tree, right));
        }

        let mut child = node_idx;
        let mut parent = tree.node(child).parent_index();
        while let Some(parent_idx) = parent {
            if tree.node(parent_idx).left_index() == Some(child) {
                return Some(parent_idx);
            }
            child = parent_idx;
            parent = tree.node(parent_idx).parent_index();
        }
        None
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let node_idx = self.next?;
        self.next = Self::successor(self.tree, node_idx);
        self.remaining -= 1;
        Some(self.tree.node(node_idx).key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for InOrderIter<'_> {}

impl FusedIterator for InOrderIter<'_> {}

impl<'a> IntoIterator for &'a AvlRangeTree {
    type Item = &'a [u8];
    type IntoIter = InOrderIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        InOrderIter::new(self)
    }
}

/// An iterator that performs a depth-first pre-order traversal of the tree.
///
/// Nodes are visited parent first, then the left subtree, then the right
/// subtree. [`crate::debug::pre_order_keys`] prints keys in this order.
#[derive(Debug)]
pub struct PreOrderDfsIterator<'a> {
    /// Reference to the tree (used to resolve node indices).
    tree: &'a AvlRangeTree,
    /// Stack of node indices to visit. Nodes are pushed right-first so left is
    /// processed first (LIFO order).
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrderDfsIterator<'a> {
    /// Create a new iterator starting from the root of the given tree.
    pub fn new(tree: &'a AvlRangeTree) -> Self {
        let mut stack = Vec::with_capacity(tree.height() as usize + 1);
        stack.extend(tree.root_index());
        Self { tree, stack }
    }
}

impl<'a> Iterator for PreOrderDfsIterator<'a> {
    type Item = &'a AvlNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node_idx = self.stack.pop()?;
        let node = self.tree.node(node_idx);

        // Push children onto stack (right first so left is processed first)
        self.stack.extend(node.right_index());
        self.stack.extend(node.left_index());

        Some(node)
    }
}
