// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural validators.
//!
//! | Check          | What must hold                                                   |
//! |----------------|------------------------------------------------------------------|
//! | `check_sorted` | keys strictly ascending, every frequency >= 1                     |
//! | `check_bst`    | in-order walk passes `check_sorted` (left < node < right)        |
//! | `check_avl`    | `check_bst`, cached heights exact, `|balance| <= 1` everywhere    |
//!
//! Strict ascent in the in-order walk is equivalent to the BST ordering
//! invariant, and it also rules out duplicate keys.

use crate::node::{AvlNode, TreeNode};
use crate::traversal::{enumerate, InOrder};
use std::collections::HashMap;
use thiserror::Error;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// Key at `position` is smaller than the key before it.
    #[error("keys not ascending at position {position}: '{previous}' > '{key}'")]
    Unsorted {
        position: usize,
        previous: String,
        key: String,
    },
    /// The same key appears twice.
    #[error("duplicate key '{key}'")]
    Duplicate { key: String },
    /// An entry exists with a zero count.
    #[error("key '{key}' has frequency 0")]
    ZeroFrequency { key: String },
    /// AVL node whose subtrees differ in height by more than one.
    #[error("node '{key}' out of balance ({balance})")]
    Unbalanced { key: String, balance: i64 },
    /// AVL node whose cached height is wrong.
    #[error("node '{key}' caches height {stored} but has height {actual}")]
    StaleHeight {
        key: String,
        stored: u32,
        actual: u32,
    },
}

/// Check a sorted `(key, frequency)` view.
pub fn check_sorted<'a, I>(entries: I) -> Result<(), InvariantError>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let mut previous: Option<&str> = None;
    for (position, (key, frequency)) in entries.into_iter().enumerate() {
        if frequency == 0 {
            return Err(InvariantError::ZeroFrequency {
                key: key.to_string(),
            });
        }
        if let Some(prev) = previous {
            if prev == key {
                return Err(InvariantError::Duplicate {
                    key: key.to_string(),
                });
            }
            if prev > key {
                return Err(InvariantError::Unsorted {
                    position,
                    previous: prev.to_string(),
                    key: key.to_string(),
                });
            }
        }
        previous = Some(key);
    }
    Ok(())
}

/// Check the binary-search-tree ordering of any tree.
pub fn check_bst<N: TreeNode>(root: Option<&N>) -> Result<(), InvariantError> {
    check_sorted(InOrder::new(root))
}

/// Check ordering, cached heights and balance of an AVL tree.
pub fn check_avl(root: Option<&AvlNode>) -> Result<(), InvariantError> {
    check_bst(root)?;

    // Keys are unique past this point, so they identify nodes.
    let actual: HashMap<&str, u32> = enumerate(root)
        .into_iter()
        .map(|info| (info.key, info.height))
        .collect();
    let height_of = |child: Option<&AvlNode>| child.map_or(0, |c| actual[c.key.as_str()]);

    let mut stack: Vec<&AvlNode> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        let real = actual[node.key.as_str()];
        if node.height != real {
            return Err(InvariantError::StaleHeight {
                key: node.key.clone(),
                stored: node.height,
                actual: real,
            });
        }
        let balance = i64::from(height_of(node.left())) - i64::from(height_of(node.right()));
        if balance.abs() > 1 {
            return Err(InvariantError::Unbalanced {
                key: node.key.clone(),
                balance,
            });
        }
        stack.extend(node.left());
        stack.extend(node.right());
    }
    Ok(())
}
