/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AvlRangeTree - An order-statistics AVL tree over byte-string keys.
//!
//! Every node carries its subtree height and the number of nodes below it.
//! Heights keep the tree balanced through AVL rotations; descendant counts
//! let range queries count whole subtrees at once.
//!
//! # Overview
//!
//! - O(log n) insertion. Duplicate keys are stored, never merged.
//! - O(log n) counting of the keys inside an inclusive range `[lo, hi]`,
//!   independent of how many keys match.
//! - O(log n) rank queries.
//! - In-order and pre-order iteration.
//!
//! Keys are compared lexicographically as unsigned bytes, which matches
//! `str` ordering for UTF-8 text.
//!
//! # Example
//!
//! ```
//! use avl_range_tree::AvlRangeTree;
//!
//! let mut tree = AvlRangeTree::new();
//! for word in ["pear", "apple", "fig", "apple", "kiwi"] {
//!     tree.insert(word);
//! }
//!
//! assert_eq!(tree.len(), 5);
//! assert_eq!(tree.range_count("apple", "fig"), 3);
//! assert_eq!(tree.range_count("b", "k"), 1);
//! assert_eq!(tree.range_count("z", "a"), 0);
//!
//! let sorted: Vec<_> = tree.iter().map(String::from_utf8_lossy).collect();
//! assert_eq!(sorted, ["apple", "apple", "fig", "kiwi", "pear"]);
//! ```

mod arena;
pub mod debug;
mod iter;
mod node;
mod tree;

pub use arena::NodeIndex;
pub use iter::{InOrderIter, PreOrderDfsIterator};
pub use node::{AvlNode, Side};
pub use tree::AvlRangeTree;
