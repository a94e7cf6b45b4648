// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Side-by-side builds over one token stream.
//!
//! Every selected variant gets a fresh index and the same tokens. The builds
//! share nothing (each index owns its counters), so with the `parallel`
//! feature they run on rayon's pool; without it they run one after another.
//! Either way the runs come back in the order the kinds were listed.
//!
//! ```ignore
//! let report = compare(&tokens, &CompareConfig::default())?;
//! assert!(report.views_agree());
//! println!("{report}");
//! ```

use crate::error::{IndexError, Result};
use crate::index::{AvlIndex, BstIndex, SortedArrayIndex, WordIndex};
use crate::types::{IndexKind, Stats, WordEntry};
use crate::verify::check_sorted;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which variants to build and whether to validate them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Variants to build, in report order. Repeats are ignored.
    pub kinds: Vec<IndexKind>,
    /// Run the structural validators on every finished index, in release
    /// builds too.
    pub verify: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        CompareConfig {
            kinds: IndexKind::ALL.to_vec(),
            verify: true,
        }
    }
}

impl CompareConfig {
    /// Only the given kinds, verified.
    pub fn only(kinds: &[IndexKind]) -> Self {
        CompareConfig {
            kinds: kinds.to_vec(),
            ..Self::default()
        }
    }

    fn selected(&self) -> Vec<IndexKind> {
        let mut kinds = Vec::with_capacity(self.kinds.len());
        for &kind in &self.kinds {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }
}

/// Result of building one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub kind: IndexKind,
    pub stats: Stats,
    /// Distinct words stored.
    pub distinct: usize,
    /// Ascending sorted view.
    pub entries: Vec<WordEntry>,
}

/// All runs of one comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub runs: Vec<Run>,
}

impl Comparison {
    pub fn run(&self, kind: IndexKind) -> Option<&Run> {
        self.runs.iter().find(|run| run.kind == kind)
    }

    /// Whether every run produced the same sorted view.
    pub fn views_agree(&self) -> bool {
        match self.runs.split_first() {
            Some((first, rest)) => rest.iter().all(|run| run.entries == first.entries),
            None => true,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<14}{:>13}{:>13}{:>11}{:>12}{:>8}{:>10}",
            "Structure", "Comparisons", "Assignments", "Rotations", "Time (ms)", "Height", "Balanced"
        )?;
        for run in &self.runs {
            writeln!(
                f,
                "{:<14}{:>13}{:>13}{:>11}{:>12.2}{:>8}{:>10}",
                run.kind.label(),
                run.stats.comparisons,
                run.stats.assignments,
                run.stats.rotations,
                run.stats.elapsed_ms(),
                run.stats.height,
                if run.stats.rebalanced() { "yes" } else { "no" }
            )?;
        }
        Ok(())
    }
}

/// Build every selected variant over `tokens` and collect the results.
///
/// Fails if no kind is selected, if a token is rejected (with its position),
/// or, when `config.verify` is set, if a finished index breaks its ordering or
/// balance invariant.
pub fn compare<S>(tokens: &[S], config: &CompareConfig) -> Result<Comparison>
where
    S: AsRef<str> + Sync,
{
    let kinds = config.selected();
    if kinds.is_empty() {
        return Err(IndexError::InvalidInput {
            position: None,
            reason: "no index kinds selected",
        });
    }

    let runs = build_runs(&kinds, tokens, config.verify)?;
    let comparison = Comparison { runs };

    if comparison.views_agree() {
        tracing::info!(
            tokens = tokens.len(),
            kinds = kinds.len(),
            distinct = comparison.runs.first().map_or(0, |run| run.distinct),
            "Comparison complete"
        );
    } else {
        tracing::warn!(tokens = tokens.len(), "Sorted views differ between index kinds");
    }
    Ok(comparison)
}

#[cfg(feature = "parallel")]
fn build_runs<S>(kinds: &[IndexKind], tokens: &[S], verify: bool) -> Result<Vec<Run>>
where
    S: AsRef<str> + Sync,
{
    kinds
        .par_iter()
        .map(|&kind| build_one(kind, tokens, verify))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn build_runs<S>(kinds: &[IndexKind], tokens: &[S], verify: bool) -> Result<Vec<Run>>
where
    S: AsRef<str> + Sync,
{
    kinds
        .iter()
        .map(|&kind| build_one(kind, tokens, verify))
        .collect()
}

fn build_one<S: AsRef<str>>(kind: IndexKind, tokens: &[S], verify: bool) -> Result<Run> {
    match kind {
        IndexKind::SortedArray => finish(SortedArrayIndex::with_capacity(tokens.len()), tokens, verify),
        IndexKind::Bst => finish(BstIndex::new(), tokens, verify),
        IndexKind::Avl => finish(AvlIndex::new(), tokens, verify),
    }
}

fn finish<W: WordIndex, S: AsRef<str>>(mut index: W, tokens: &[S], verify: bool) -> Result<Run> {
    let stats = index.build(tokens)?;
    if verify {
        index.check_invariants()?;
        check_sorted(index.entries())?;
    }
    Ok(Run {
        kind: index.kind(),
        stats,
        distinct: index.len(),
        entries: index.to_entries(),
    })
}
