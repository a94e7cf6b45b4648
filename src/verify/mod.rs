// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: validating checks and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Validators** (`check_sorted`, `check_bst`, `check_avl`) walk a structure
//!    and return the first violated invariant as an `InvariantError`. Tests and
//!    `compare` with `verify = true` use these.
//!
//! 2. **Runtime contracts** that panic in debug builds when invariants are
//!    violated. Zero-cost in release, but catch bugs while tests run. Every
//!    `build` ends with one.
//!
//! Both walk with explicit stacks, so a degenerate BST is no problem.

mod checks;
pub mod contracts;

pub use checks::*;
