// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by index operations.
//!
//! Only two things can go wrong. A caller hands `insert` a token that the
//! tokenizer should never have produced, or a validator finds a structure that
//! breaks its ordering/balance invariants. The first is a precondition
//! violation at the boundary; the second means a bug in this crate.

use crate::verify::InvariantError;
use thiserror::Error;

/// Error type for all fallible index operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// A token was rejected before any mutation happened.
    ///
    /// `position` is the token's offset within the sequence given to `build`,
    /// or `None` when the token came through a direct `insert` call.
    #[error("invalid input{}: {reason}", .position.map(|p| format!(" at token {p}")).unwrap_or_default())]
    InvalidInput {
        position: Option<usize>,
        reason: &'static str,
    },

    /// A structural invariant does not hold.
    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantError),
}

impl IndexError {
    pub(crate) fn empty_word() -> Self {
        IndexError::InvalidInput {
            position: None,
            reason: "empty word",
        }
    }

    /// Attach the token position within a build to an input error.
    pub(crate) fn at_position(self, position: usize) -> Self {
        match self {
            IndexError::InvalidInput { reason, .. } => IndexError::InvalidInput {
                position: Some(position),
                reason,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, IndexError>;

/// Reject tokens that never should have left the tokenizer.
#[inline]
pub(crate) fn validate_word(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(IndexError::empty_word());
    }
    Ok(())
}
