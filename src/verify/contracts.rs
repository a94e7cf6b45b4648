// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts.
//!
//! Debug-mode assertions over the validators in `verify`. They are
//! **zero-cost in release builds** (the body sits behind
//! `cfg!(debug_assertions)`, so not even the walk runs) and fail early during
//! development.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! `build` calls `check_index` after its last insertion. Removing it means a
//! broken rotation can slip through every scenario test that only looks at
//! the sorted view.
//!
//! # Usage
//!
//! ```ignore
//! use wordtree::verify::contracts::check_index;
//!
//! // In debug builds, this panics if an invariant is violated
//! check_index(&avl);
//!
//! // In release builds, this is a no-op
//! ```

use crate::index::WordIndex;
use crate::verify::InvariantError;

/// Panic (debug builds only) when `index` fails its structural checks.
#[inline]
pub fn check_index<W: WordIndex + ?Sized>(index: &W) {
    if cfg!(debug_assertions) {
        if let Err(err) = index.check_invariants() {
            contract_violation(index.kind().label(), &err);
        }
    }
}

/// Panic (debug builds only) when a counter went backwards.
#[inline]
pub fn check_monotonic(name: &str, before: u64, after: u64) {
    debug_assert!(
        after >= before,
        "Contract violation: counter '{}' decreased from {} to {}",
        name,
        before,
        after
    );
}

#[cold]
fn contract_violation(what: &str, err: &InvariantError) -> ! {
    panic!("Contract violation in {}: {}", what, err);
}
