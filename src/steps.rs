// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental replay of a build, one token at a time.
//!
//! Each `Step` is the state after one more insertion: the token, what it did,
//! and the counters accumulated so far. Rendering a growing tree is a matter of
//! calling `nodes()` between steps. The index is borrowed mutably for the
//! iterator's lifetime; dropping the iterator stops the replay and leaves
//! everything inserted so far in place.

use crate::error::Result;
use crate::index::{Outcome, WordIndex};
use crate::types::Stats;
use crate::verify::contracts;
use serde::Serialize;

/// State after one insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Zero-based position of the token in the input.
    pub position: usize,
    pub word: String,
    pub outcome: Outcome,
    /// Cumulative counters up to and including this token.
    pub stats: Stats,
}

/// Iterator returned by `WordIndex::steps`.
///
/// Yields `Err` once for a rejected token and then ends.
pub struct Steps<'a, W: WordIndex, T> {
    index: &'a mut W,
    tokens: T,
    position: usize,
    finished: bool,
    last: Stats,
}

impl<'a, W, T> Steps<'a, W, T>
where
    W: WordIndex,
    T: Iterator,
    T::Item: AsRef<str>,
{
    pub(crate) fn new(index: &'a mut W, tokens: T) -> Self {
        index.reset_stats();
        tracing::debug!(kind = %index.kind(), "Stepwise build starting");
        let last = index.stats();
        Steps {
            index,
            tokens,
            position: 0,
            finished: false,
            last,
        }
    }

    /// The index being built, as of the last yielded step.
    pub fn index(&self) -> &W {
        self.index
    }

    fn advance(&mut self, word: &str) -> Result<Outcome> {
        self.index.counters_mut().start();
        let outcome = self.index.insert(word);
        self.index.counters_mut().stop();
        outcome
    }
}

impl<'a, W, T> Iterator for Steps<'a, W, T>
where
    W: WordIndex,
    T: Iterator,
    T::Item: AsRef<str>,
{
    type Item = Result<Step>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let Some(token) = self.tokens.next() else {
            self.finished = true;
            contracts::check_index(&*self.index);
            return None;
        };

        let position = self.position;
        self.position += 1;
        let word = token.as_ref();

        match self.advance(word) {
            Ok(outcome) => {
                let stats = self.index.stats();
                contracts::check_monotonic("comparisons", self.last.comparisons, stats.comparisons);
                contracts::check_monotonic("assignments", self.last.assignments, stats.assignments);
                contracts::check_monotonic("rotations", self.last.rotations, stats.rotations);
                self.last = stats;
                Some(Ok(Step {
                    position,
                    word: word.to_owned(),
                    outcome,
                    stats,
                }))
            }
            Err(err) => {
                self.finished = true;
                tracing::warn!(kind = %self.index.kind(), position, "Rejected token during stepwise build");
                Some(Err(err.at_position(position)))
            }
        }
    }
}

impl<'a, W, T> std::iter::FusedIterator for Steps<'a, W, T>
where
    W: WordIndex,
    T: Iterator,
    T::Item: AsRef<str>,
{
}
