// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Self-balancing AVL tree.
//!
//! Insertion is the BST insertion done recursively, followed on the way back
//! up by a height refresh and, where `|balance| > 1`, one of four repairs:
//!
//! ```text
//!   LL: balance > 1,  word < left.key   -> rotate_right(node)            (+1)
//!   RR: balance < -1, word > right.key  -> rotate_left(node)             (+1)
//!   LR: balance > 1,  word > left.key   -> rotate_left(left), then right (+2)
//!   RL: balance < -1, word < right.key  -> rotate_right(right), then left(+2)
//! ```
//!
//! A duplicate word bumps the frequency and returns its node untouched. No node
//! was added, so nothing below the ancestors changed shape.
//!
//! Recursion depth is bounded by the height, which stays under
//! `1.44 * log2(n + 2)`, so the recursion is safe here where it would not be
//! for the plain BST.
//!
//! # Counting
//!
//! 1 comparison per node visited on the way down, exactly as the BST counts
//! its descent. Picking the repair case is not counted. 1 assignment per new
//! node or frequency bump, 2 per single rotation (the two child links it
//! rewrites). Height refreshes are bookkeeping and are not counted.

use super::{Outcome, SortedEntries, TreeIndex, WordIndex};
use crate::error::{validate_word, Result};
use crate::node::{AvlNode, Link, TreeNode};
use crate::stats::StatsCollector;
use crate::traversal::InOrder;
use crate::types::IndexKind;
use crate::verify::{check_avl, InvariantError};
use std::cmp::Ordering;

/// Word-frequency index backed by an AVL tree.
#[derive(Debug, Clone, Default)]
pub struct AvlIndex {
    root: Link<AvlNode>,
    len: usize,
    stats: StatsCollector,
}

impl AvlIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordIndex for AvlIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::Avl
    }

    fn insert(&mut self, word: &str) -> Result<Outcome> {
        validate_word(word)?;
        let (root, outcome) = insert_at(self.root.take(), word, &mut self.stats);
        self.root = Some(root);
        if outcome == Outcome::Inserted {
            self.len += 1;
        }
        Ok(outcome)
    }

    fn frequency_of(&self, word: &str) -> u64 {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match word.cmp(node.key.as_str()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return node.frequency,
            };
        }
        0
    }

    fn entries(&self) -> SortedEntries<'_> {
        SortedEntries::Avl(InOrder::new(self.root.as_deref()))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> u32 {
        crate::node::height(&self.root)
    }

    fn check_invariants(&self) -> std::result::Result<(), InvariantError> {
        check_avl(self.root.as_deref())
    }

    fn counters(&self) -> &StatsCollector {
        &self.stats
    }

    fn counters_mut(&mut self) -> &mut StatsCollector {
        &mut self.stats
    }
}

impl TreeIndex for AvlIndex {
    type Node = AvlNode;

    fn root(&self) -> Option<&AvlNode> {
        self.root.as_deref()
    }
}

// =============================================================================
// INSERTION
// =============================================================================

/// Insert `word` below `link` and return the (possibly new) subtree root.
fn insert_at(
    link: Link<AvlNode>,
    word: &str,
    stats: &mut StatsCollector,
) -> (Box<AvlNode>, Outcome) {
    let mut node = match link {
        None => {
            stats.assign(1);
            return (Box::new(AvlNode::new(word)), Outcome::Inserted);
        }
        Some(node) => node,
    };

    stats.compare();
    let outcome = match word.cmp(node.key.as_str()) {
        Ordering::Less => {
            let (left, outcome) = insert_at(node.left.take(), word, stats);
            node.left = Some(left);
            outcome
        }
        Ordering::Greater => {
            let (right, outcome) = insert_at(node.right.take(), word, stats);
            node.right = Some(right);
            outcome
        }
        Ordering::Equal => {
            node.frequency += 1;
            stats.assign(1);
            return (node, Outcome::Incremented);
        }
    };

    node.update_height();
    (rebalance(node, word, stats), outcome)
}

/// Restore `|balance| <= 1` at `node` after `word` was inserted below it.
fn rebalance(mut node: Box<AvlNode>, word: &str, stats: &mut StatsCollector) -> Box<AvlNode> {
    let balance = node.balance_factor();

    if balance > 1 {
        let Some(left) = node.left.take() else {
            return node;
        };
        if word < left.key.as_str() {
            node.left = Some(left);
            stats.rotate(1);
            tracing::trace!(case = "LL", pivot = %node.key, "AVL rotation");
            return rotate_right(node, stats);
        }
        stats.rotate(2);
        tracing::trace!(case = "LR", pivot = %node.key, "AVL rotation");
        node.left = Some(rotate_left(left, stats));
        return rotate_right(node, stats);
    }

    if balance < -1 {
        let Some(right) = node.right.take() else {
            return node;
        };
        if word > right.key.as_str() {
            node.right = Some(right);
            stats.rotate(1);
            tracing::trace!(case = "RR", pivot = %node.key, "AVL rotation");
            return rotate_left(node, stats);
        }
        stats.rotate(2);
        tracing::trace!(case = "RL", pivot = %node.key, "AVL rotation");
        node.right = Some(rotate_right(right, stats));
        return rotate_left(node, stats);
    }

    node
}

/// ```text
///        y              x
///       / \            / \
///      x   C   ==>    A   y
///     / \                / \
///    A   B              B   C
/// ```
/// Heights are refreshed bottom-up: `y` first, then `x`.
fn rotate_right(mut y: Box<AvlNode>, stats: &mut StatsCollector) -> Box<AvlNode> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    stats.assign(2);
    x
}

/// Mirror of `rotate_right`.
fn rotate_left(mut x: Box<AvlNode>, stats: &mut StatsCollector) -> Box<AvlNode> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    stats.assign(2);
    y
}
