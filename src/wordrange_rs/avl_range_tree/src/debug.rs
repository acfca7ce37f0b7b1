/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Debug and introspection utilities for the AVL range tree.
//!
//! Keys are rendered as lossy UTF-8, so non-UTF-8 bytes show up as `U+FFFD`.

use std::fmt::Write as _;

use crate::arena::NodeIndex;
use crate::{AvlRangeTree, Side};

/// All keys in pre-order (node, left subtree, right subtree), separated by a
/// single space. An empty tree yields an empty string.
pub fn pre_order_keys(tree: &AvlRangeTree) -> String {
    let mut out = String::new();
    for node in tree.pre_order() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&String::from_utf8_lossy(node.key()));
    }
    out
}

/// Dump the tree structure, one node per line.
///
/// Each line shows which side of its parent the node hangs from (`L`/`R`,
/// nothing for the root), the key, and the memoized descendant count and
/// height. Children are indented two spaces below their parent.
///
/// ```text
/// [b] descendants=2 height=2
///   L [a] descendants=0 height=1
///   R [c] descendants=0 height=1
/// ```
pub fn dump_tree(tree: &AvlRangeTree) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root_index() {
        dump_node(&mut out, tree, root, None, 0);
    }
    out
}

fn dump_node(
    out: &mut String,
    tree: &AvlRangeTree,
    node_idx: NodeIndex,
    side: Option<Side>,
    depth: usize,
) {
    let node = tree.node(node_idx);
    let label = match side {
        None => "",
        Some(Side::Left) => "L ",
        Some(Side::Right) => "R ",
    };
    // Writing to a `String` cannot fail.
    let _ = writeln!(
        out,
        "{:indent$}{label}[{}] descendants={} height={}",
        "",
        String::from_utf8_lossy(node.key()),
        node.descendants(),
        node.height(),
        indent = depth * 2,
    );

    for side in [Side::Left, Side::Right] {
        if let Some(child) = node.child(side) {
            dump_node(out, tree, child, Some(side), depth + 1);
        }
    }
}
