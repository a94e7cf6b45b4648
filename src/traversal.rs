// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tree walks shared by the BST and AVL indexes.
//!
//! All of these use an explicit stack. A BST fed sorted input degenerates into
//! a chain as long as the vocabulary, and recursing down that chain would blow
//! the thread stack long before the heap runs out.

use crate::node::TreeNode;
use crate::types::{NodeInfo, Side};
use std::collections::HashMap;

// =============================================================================
// IN-ORDER ITERATION
// =============================================================================

/// Lazy in-order walk yielding `(key, frequency)` in ascending key order.
///
/// Borrowing the tree makes it finite and restartable: ask the index for a
/// new one and it starts from the smallest key again.
pub struct InOrder<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: TreeNode> InOrder<'a, N> {
    pub fn new(root: Option<&'a N>) -> Self {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a N>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, N: TreeNode> Iterator for InOrder<'a, N> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some((node.key(), node.frequency()))
    }
}

// =============================================================================
// STRUCTURAL QUERIES
// =============================================================================

/// Height of the tree (0 when empty, 1 for a single node).
pub fn height<N: TreeNode>(root: Option<&N>) -> u32 {
    let mut max = 0;
    let mut stack: Vec<(&N, u32)> = root.map(|r| (r, 1)).into_iter().collect();
    while let Some((node, level)) = stack.pop() {
        max = max.max(level);
        if let Some(left) = node.left() {
            stack.push((left, level + 1));
        }
        if let Some(right) = node.right() {
            stack.push((right, level + 1));
        }
    }
    max
}

/// Number of nodes in the tree.
pub fn count<N: TreeNode>(root: Option<&N>) -> usize {
    InOrder::new(root).count()
}

/// Sum of all frequencies, i.e. how many tokens were inserted.
pub fn total_frequency<N: TreeNode>(root: Option<&N>) -> u64 {
    InOrder::new(root).map(|(_, frequency)| frequency).sum()
}

// =============================================================================
// LEVELED ENUMERATION
// =============================================================================

/// Every node with its depth, subtree height, and parent, in preorder
/// (node, left subtree, right subtree).
///
/// Subtree heights are filled in a second pass over the preorder list in
/// reverse: descendants always come after their ancestor in preorder, so by the
/// time a node is reached its height is final.
pub fn enumerate<N: TreeNode>(root: Option<&N>) -> Vec<NodeInfo<'_>> {
    let mut nodes: Vec<NodeInfo<'_>> = Vec::new();
    let mut parent_index: Vec<Option<usize>> = Vec::new();
    let mut stack: Vec<(&N, u32, Option<usize>, Option<Side>)> = Vec::new();

    if let Some(root) = root {
        stack.push((root, 0, None, None));
    }

    while let Some((node, depth, parent, side)) = stack.pop() {
        let index = nodes.len();
        let parent_key = parent.map(|p| nodes[p].key);
        nodes.push(NodeInfo {
            key: node.key(),
            frequency: node.frequency(),
            depth,
            height: 1,
            parent: parent_key,
            side,
        });
        parent_index.push(parent);

        // Right first so the left subtree is popped (and listed) first.
        if let Some(right) = node.right() {
            stack.push((right, depth + 1, Some(index), Some(Side::Right)));
        }
        if let Some(left) = node.left() {
            stack.push((left, depth + 1, Some(index), Some(Side::Left)));
        }
    }

    for i in (0..nodes.len()).rev() {
        if let Some(p) = parent_index[i] {
            let candidate = nodes[i].height + 1;
            if candidate > nodes[p].height {
                nodes[p].height = candidate;
            }
        }
    }

    nodes
}

/// Child key -> parent key, built in a single walk. The root has no entry.
pub fn parent_map<N: TreeNode>(root: Option<&N>) -> HashMap<&str, &str> {
    let mut parents = HashMap::new();
    let mut stack: Vec<&N> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        for child in [node.left(), node.right()].into_iter().flatten() {
            parents.insert(child.key(), node.key());
            stack.push(child);
        }
    }
    parents
}
