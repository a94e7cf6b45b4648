// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unbalanced binary search tree.
//!
//! This is the baseline the AVL tree is measured against. Feed it sorted input
//! and it degrades into a chain of height n; that is expected, not a bug.
//!
//! Insertion walks down with a cursor over the child slots instead of
//! recursing, and `Drop` unlinks nodes onto a heap stack. A chain of a few
//! hundred thousand words would otherwise overflow the thread stack on either.
//!
//! Since nodes are never removed or moved, the tree's height is simply the
//! deepest level any insertion reached, tracked as it happens.

use super::{Outcome, SortedEntries, TreeIndex, WordIndex};
use crate::error::{validate_word, Result};
use crate::node::{BstNode, Link};
use crate::stats::StatsCollector;
use crate::traversal::InOrder;
use crate::types::IndexKind;
use crate::verify::{check_bst, InvariantError};
use std::cmp::Ordering;

/// Word-frequency index backed by an unbalanced BST.
#[derive(Debug, Default)]
pub struct BstIndex {
    root: Link<BstNode>,
    len: usize,
    height: u32,
    stats: StatsCollector,
}

impl BstIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, word: &str) -> Option<&BstNode> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match word.cmp(node.key.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }
}

impl WordIndex for BstIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::Bst
    }

    fn insert(&mut self, word: &str) -> Result<Outcome> {
        validate_word(word)?;

        let mut slot = &mut self.root;
        let mut depth = 1u32;
        while let Some(node) = slot {
            self.stats.compare();
            slot = match word.cmp(node.key.as_str()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    node.frequency += 1;
                    self.stats.assign(1);
                    return Ok(Outcome::Incremented);
                }
            };
            depth += 1;
        }

        *slot = Some(Box::new(BstNode::new(word)));
        self.stats.assign(1);
        self.len += 1;
        self.height = self.height.max(depth);
        Ok(Outcome::Inserted)
    }

    fn frequency_of(&self, word: &str) -> u64 {
        self.find(word).map_or(0, |node| node.frequency)
    }

    fn entries(&self) -> SortedEntries<'_> {
        SortedEntries::Bst(InOrder::new(self.root.as_deref()))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn check_invariants(&self) -> std::result::Result<(), InvariantError> {
        check_bst(self.root.as_deref())
    }

    fn counters(&self) -> &StatsCollector {
        &self.stats
    }

    fn counters_mut(&mut self) -> &mut StatsCollector {
        &mut self.stats
    }
}

impl TreeIndex for BstIndex {
    type Node = BstNode;

    fn root(&self) -> Option<&BstNode> {
        self.root.as_deref()
    }
}

impl Drop for BstIndex {
    fn drop(&mut self) {
        let mut stack: Vec<Box<BstNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
