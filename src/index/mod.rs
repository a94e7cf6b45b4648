// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three word-frequency indexes and the contract they share.
//!
//! | Variant            | Lookup          | Insert                  | Height            |
//! |--------------------|-----------------|-------------------------|-------------------|
//! | `SortedArrayIndex` | binary search   | shift into sorted slot  | 0 (flat)          |
//! | `BstIndex`         | descend         | attach leaf             | up to n (sorted)  |
//! | `AvlIndex`         | descend         | attach leaf + rotations | <= 1.44 log2(n+2) |
//!
//! All three answer the same questions (`frequency_of`, `entries`) with the
//! same answers for the same input. What differs is how much work they did to
//! get there, which is what `Stats` records.
//!
//! # Build pipeline
//!
//! `build` zeroes the counters, starts the clock, inserts every token in input
//! order, stops the clock and returns a snapshot. It does not clear the
//! contents: calling it twice keeps inserting into the same structure, with
//! the second `Stats` covering only the second batch.

mod avl;
mod bst;
mod sorted_array;

pub use avl::AvlIndex;
pub use bst::BstIndex;
pub use sorted_array::SortedArrayIndex;

use crate::error::Result;
use crate::node::{AvlNode, BstNode, TreeNode};
use crate::stats::StatsCollector;
use crate::steps::Steps;
use crate::traversal::{self, InOrder};
use crate::types::{IndexKind, NodeInfo, Stats, WordEntry};
use crate::verify::{contracts, InvariantError};
use std::collections::HashMap;

/// What a single insertion did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The word was new; an entry/node was created.
    Inserted,
    /// The word was already present; its frequency went up by one.
    Incremented,
}

/// Capability set shared by every index variant.
pub trait WordIndex {
    /// Which variant this is.
    fn kind(&self) -> IndexKind;

    /// Count one occurrence of `word`.
    ///
    /// Rejects the empty string with `IndexError::InvalidInput` before
    /// touching the structure or the counters.
    fn insert(&mut self, word: &str) -> Result<Outcome>;

    /// How many times `word` was inserted (0 if never). Does not count.
    fn frequency_of(&self, word: &str) -> u64;

    /// Ascending `(word, frequency)` view. Lazy; call again to restart.
    fn entries(&self) -> SortedEntries<'_>;

    /// Number of distinct words.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Structural height: 0 when empty, 1 for a single tree node. The sorted
    /// array has no levels and always reports 0.
    fn height(&self) -> u32;

    /// Validate ordering (and balance, for AVL) of the current structure.
    fn check_invariants(&self) -> std::result::Result<(), InvariantError>;

    /// Read access to the live counters.
    fn counters(&self) -> &StatsCollector;

    #[doc(hidden)]
    fn counters_mut(&mut self) -> &mut StatsCollector;

    /// Snapshot of the counters right now.
    fn stats(&self) -> Stats {
        self.counters().snapshot(self.height())
    }

    /// Zero the counters without touching the contents.
    fn reset_stats(&mut self) {
        self.counters_mut().reset();
    }

    /// Total number of tokens counted (sum of all frequencies).
    fn total_tokens(&self) -> u64 {
        self.entries().map(|(_, frequency)| frequency).sum()
    }

    /// Owned copy of the sorted view.
    fn to_entries(&self) -> Vec<WordEntry> {
        self.entries().map(WordEntry::from).collect()
    }

    /// `"word -> n"` lines in ascending order, as results panels list them.
    fn frequency_lines(&self) -> Vec<String> {
        self.entries()
            .map(|(key, frequency)| format!("{} -> {}", key, frequency))
            .collect()
    }

    /// Reset the counters, insert every token in order, and report.
    ///
    /// Stops at the first rejected token; the error carries its position and
    /// everything before it stays inserted.
    fn build<I, S>(&mut self, tokens: I) -> Result<Stats>
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let kind = self.kind();
        self.reset_stats();
        tracing::debug!(kind = %kind, distinct_before = self.len(), "Index build starting");

        self.counters_mut().start();
        let mut inserted = 0usize;
        for (position, token) in tokens.into_iter().enumerate() {
            if let Err(err) = self.insert(token.as_ref()) {
                self.counters_mut().stop();
                tracing::warn!(kind = %kind, position, "Rejected token during build");
                return Err(err.at_position(position));
            }
            inserted += 1;
        }
        self.counters_mut().stop();

        contracts::check_index(&*self);

        let stats = self.stats();
        tracing::info!(
            kind = %kind,
            tokens = inserted,
            distinct = self.len(),
            comparisons = stats.comparisons,
            assignments = stats.assignments,
            rotations = stats.rotations,
            height = stats.height,
            elapsed_us = stats.elapsed.as_micros() as u64,
            "Index build complete"
        );
        Ok(stats)
    }

    /// Insert tokens one at a time, yielding a `Step` after each.
    ///
    /// Counters are reset up front. Dropping the iterator early is how a
    /// caller cancels; everything inserted so far stays.
    fn steps<I, S>(&mut self, tokens: I) -> Steps<'_, Self, I::IntoIter>
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Steps::new(self, tokens.into_iter())
    }
}

/// Tree-shaped indexes expose their nodes for rendering.
pub trait TreeIndex: WordIndex {
    type Node: TreeNode;

    fn root(&self) -> Option<&Self::Node>;

    fn root_key(&self) -> Option<&str> {
        self.root().map(TreeNode::key)
    }

    /// Every node with depth, subtree height, parent key and side, preorder.
    fn nodes(&self) -> Vec<NodeInfo<'_>> {
        traversal::enumerate(self.root())
    }

    /// Child key -> parent key.
    fn parent_map(&self) -> HashMap<&str, &str> {
        traversal::parent_map(self.root())
    }
}

// =============================================================================
// SORTED VIEW
// =============================================================================

/// The ascending `(word, frequency)` view of any index variant.
pub enum SortedEntries<'a> {
    Array(std::slice::Iter<'a, WordEntry>),
    Bst(InOrder<'a, BstNode>),
    Avl(InOrder<'a, AvlNode>),
}

impl<'a> Iterator for SortedEntries<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SortedEntries::Array(iter) => iter
                .next()
                .map(|entry| (entry.key.as_str(), entry.frequency)),
            SortedEntries::Bst(iter) => iter.next(),
            SortedEntries::Avl(iter) => iter.next(),
        }
    }
}
