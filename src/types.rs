// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows out of an index.
//!
//! Three consumers sit outside this crate: a results panel that lists words by
//! frequency, a comparison table that lines up `Stats` from each variant, and a
//! tree renderer that needs every node with its depth and parent. Each gets one
//! type from here.
//!
//! # Invariants
//!
//! - **WordEntry**: `frequency >= 1`. An entry exists only once its key was seen.
//! - **Stats**: counters never decrease during a build; `rotations == 0` for the
//!   sorted array and the BST.
//! - **NodeInfo**: `depth == 0` iff `parent.is_none()` iff `side.is_none()`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// =============================================================================
// WORD ENTRIES
// =============================================================================

/// A word and how many times it occurred in the input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    pub key: String,
    pub frequency: u64,
}

impl WordEntry {
    /// First sighting of a word.
    pub fn new(key: impl Into<String>) -> Self {
        WordEntry {
            key: key.into(),
            frequency: 1,
        }
    }

    pub fn with_frequency(key: impl Into<String>, frequency: u64) -> Self {
        WordEntry {
            key: key.into(),
            frequency,
        }
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.key, self.frequency)
    }
}

impl<'a> From<(&'a str, u64)> for WordEntry {
    fn from((key, frequency): (&'a str, u64)) -> Self {
        WordEntry::with_frequency(key, frequency)
    }
}

// =============================================================================
// INDEX KINDS
// =============================================================================

/// The three interchangeable index variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    /// Sorted dynamic array searched by binary search.
    #[serde(rename = "array")]
    SortedArray,
    /// Unbalanced binary search tree.
    Bst,
    /// Self-balancing AVL tree.
    Avl,
}

impl IndexKind {
    /// All variants, in the order comparison tables list them.
    pub const ALL: [IndexKind; 3] = [IndexKind::SortedArray, IndexKind::Bst, IndexKind::Avl];

    /// Short machine-friendly name (`array`, `bst`, `avl`).
    pub fn name(self) -> &'static str {
        match self {
            IndexKind::SortedArray => "array",
            IndexKind::Bst => "bst",
            IndexKind::Avl => "avl",
        }
    }

    /// Human-facing label for report headers.
    pub fn label(self) -> &'static str {
        match self {
            IndexKind::SortedArray => "Sorted array",
            IndexKind::Bst => "BST",
            IndexKind::Avl => "AVL",
        }
    }

    /// Whether this variant is a tree (and so has a leveled node enumeration).
    pub fn is_tree(self) -> bool {
        !matches!(self, IndexKind::SortedArray)
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown index kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown index kind '{0}' (expected array, bst or avl)")]
pub struct ParseKindError(pub String);

impl FromStr for IndexKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" | "sorted-array" | "vector" => Ok(IndexKind::SortedArray),
            "bst" => Ok(IndexKind::Bst),
            "avl" => Ok(IndexKind::Avl),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

// =============================================================================
// BUILD STATISTICS
// =============================================================================

/// Snapshot of the counters for one build.
///
/// Produced by `StatsCollector::snapshot`; immutable once handed out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Key comparisons performed.
    pub comparisons: u64,
    /// Slot, index and link writes performed.
    pub assignments: u64,
    /// Rotations performed (single = 1, double = 2).
    pub rotations: u64,
    /// Wall time spent inserting.
    pub elapsed: Duration,
    /// Structural height after the last insertion.
    pub height: u32,
}

impl Stats {
    /// Elapsed time in fractional milliseconds, the unit reports use.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Whether any rebalancing happened during the build.
    pub fn rebalanced(&self) -> bool {
        self.rotations > 0
    }

    /// Same counters, ignoring wall time. Handy for determinism checks.
    pub fn counters(&self) -> (u64, u64, u64, u32) {
        (self.comparisons, self.assignments, self.rotations, self.height)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comparisons: {}", self.comparisons)?;
        writeln!(f, "Assignments: {}", self.assignments)?;
        writeln!(f, "Rotations:   {}", self.rotations)?;
        writeln!(f, "Time:        {:.2} ms", self.elapsed_ms())?;
        writeln!(f, "Height:      {}", self.height)?;
        write!(
            f,
            "Balanced:    {}",
            if self.rebalanced() { "yes (rotations)" } else { "no" }
        )
    }
}

// =============================================================================
// LEVELED NODE ENUMERATION
// =============================================================================

/// Which child slot of its parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// One node of a tree, as seen by a renderer.
///
/// Borrows keys from the tree it was taken from, so the tree cannot be
/// mutated while an enumeration is alive. `parent` is informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeInfo<'a> {
    pub key: &'a str,
    pub frequency: u64,
    /// Distance from the root (root = 0).
    pub depth: u32,
    /// Height of the subtree rooted here (leaf = 1).
    pub height: u32,
    pub parent: Option<&'a str>,
    pub side: Option<Side>,
}

impl NodeInfo<'_> {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Deepest depth in an enumeration, `None` for an empty tree.
pub fn max_depth(nodes: &[NodeInfo<'_>]) -> Option<u32> {
    nodes.iter().map(|n| n.depth).max()
}
