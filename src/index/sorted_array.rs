// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sorted dynamic array with binary search.
//!
//! Entries stay sorted by key at all times, so iteration order is already
//! the ascending view. A miss in the binary search leaves `lo` at the slot the
//! new word belongs in, so no second probing pass is needed.
//!
//! # Counting
//!
//! - each probe: 1 comparison, 1 assignment (midpoint), and 1 assignment for
//!   narrowing `lo`/`hi` when the probe misses
//! - hit: 1 assignment (frequency)
//! - miss: 2 assignments (entry construction, positional insert)
//! - first word into an empty array: a plain append, 1 assignment

use super::{Outcome, SortedEntries, WordIndex};
use crate::error::{validate_word, Result};
use crate::stats::StatsCollector;
use crate::types::{IndexKind, WordEntry};
use crate::verify::{check_sorted, InvariantError};
use std::cmp::Ordering;

/// Word-frequency index backed by a sorted `Vec<WordEntry>`.
#[derive(Debug, Clone, Default)]
pub struct SortedArrayIndex {
    entries: Vec<WordEntry>,
    stats: StatsCollector,
}

impl SortedArrayIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SortedArrayIndex {
            entries: Vec::with_capacity(capacity),
            stats: StatsCollector::new(),
        }
    }

    /// The entries, ascending by key.
    pub fn as_slice(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Counted binary search: `Ok(slot)` on a hit, `Err(insertion_point)` on a miss.
    fn search(&mut self, word: &str) -> std::result::Result<usize, usize> {
        let mut lo = 0usize;
        let mut hi = self.entries.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            self.stats.assign(1);
            self.stats.compare();
            match self.entries[mid].key.as_str().cmp(word) {
                Ordering::Equal => return Ok(mid),
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
            }
            self.stats.assign(1);
        }
        Err(lo)
    }

    /// Uncounted lookup for read-only queries.
    fn position(&self, word: &str) -> Option<usize> {
        self.entries
            .binary_search_by(|entry| entry.key.as_str().cmp(word))
            .ok()
    }
}

impl WordIndex for SortedArrayIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::SortedArray
    }

    fn insert(&mut self, word: &str) -> Result<Outcome> {
        validate_word(word)?;
        if self.entries.is_empty() {
            self.entries.push(WordEntry::new(word));
            self.stats.assign(1);
            return Ok(Outcome::Inserted);
        }
        match self.search(word) {
            Ok(slot) => {
                self.entries[slot].frequency += 1;
                self.stats.assign(1);
                Ok(Outcome::Incremented)
            }
            Err(slot) => {
                self.entries.insert(slot, WordEntry::new(word));
                self.stats.assign(2);
                Ok(Outcome::Inserted)
            }
        }
    }

    fn frequency_of(&self, word: &str) -> u64 {
        self.position(word)
            .map_or(0, |slot| self.entries[slot].frequency)
    }

    fn entries(&self) -> SortedEntries<'_> {
        SortedEntries::Array(self.entries.iter())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn height(&self) -> u32 {
        0
    }

    fn check_invariants(&self) -> std::result::Result<(), InvariantError> {
        check_sorted(self.entries.iter().map(|e| (e.key.as_str(), e.frequency)))
    }

    fn counters(&self) -> &StatsCollector {
        &self.stats
    }

    fn counters_mut(&mut self) -> &mut StatsCollector {
        &mut self.stats
    }
}
