//! Instrumented word-frequency indexes.
//!
//! Three structures count how often each word occurs in a token stream and
//! report, alongside the counts, how much work they did: key comparisons,
//! slot/link assignments, rotations, wall time and final height.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│  index/              │────▶│ compare.rs  │
//! │ (WordEntry, │     │  WordIndex           │     │ (compare,   │
//! │  Stats,     │     │   ├ SortedArrayIndex │     │  Comparison)│
//! │  NodeInfo)  │     │   ├ BstIndex         │     └─────────────┘
//! └─────────────┘     │   └ AvlIndex         │     ┌─────────────┐
//!        │            └──────────────────────┘────▶│  steps.rs   │
//!        │               │        │                │  (Steps)    │
//!        ▼               ▼        ▼                └─────────────┘
//! ┌─────────────┐  ┌──────────┐ ┌──────────────┐
//! │  stats.rs   │  │ node.rs  │ │ traversal.rs │
//! │ (counters)  │  │ (Box'd   │ │ (InOrder,    │
//! │             │  │  nodes)  │ │  enumerate)  │
//! └─────────────┘  └──────────┘ └──────────────┘
//!        │               │              │
//!        ▼               ▼              ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      verify/                        │
//! │  (check_sorted, check_bst, check_avl, contracts)    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use wordtree::{AvlIndex, TreeIndex, WordIndex};
//!
//! let mut avl = AvlIndex::new();
//! let stats = avl.build(["c", "b", "a", "b"]).unwrap();
//!
//! assert_eq!(avl.frequency_of("b"), 2);
//! assert_eq!(avl.root_key(), Some("b"));
//! assert_eq!(stats.rotations, 1);
//! assert_eq!(avl.frequency_lines(), vec!["a -> 1", "b -> 2", "c -> 1"]);
//! ```
//!
//! Building all three over the same tokens:
//!
//! ```
//! use wordtree::{compare, CompareConfig, IndexKind};
//!
//! let tokens = ["to", "be", "or", "not", "to", "be"];
//! let report = compare(&tokens, &CompareConfig::default()).unwrap();
//! assert!(report.views_agree());
//! assert_eq!(report.run(IndexKind::Avl).unwrap().distinct, 4);
//! ```
//!
//! # Features
//!
//! - `parallel` (default): `compare` builds the selected variants on rayon's
//!   thread pool.

// Module declarations
pub mod compare;
mod error;
mod index;
pub mod node;
mod stats;
pub mod steps;
pub mod testing;
pub mod traversal;
mod types;
pub mod verify;

// Re-exports for public API
pub use compare::{compare, CompareConfig, Comparison, Run};
pub use error::{IndexError, Result};
pub use index::{AvlIndex, BstIndex, Outcome, SortedArrayIndex, SortedEntries, TreeIndex, WordIndex};
pub use stats::StatsCollector;
pub use steps::{Step, Steps};
pub use types::{max_depth, IndexKind, NodeInfo, ParseKindError, Side, Stats, WordEntry};
pub use verify::InvariantError;
