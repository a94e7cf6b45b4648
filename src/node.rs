// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tree nodes.
//!
//! Children are owned by their parent through `Box`; there is no parent pointer.
//! Anything that needs a parent (the renderer, the parent map) recomputes it
//! during a traversal.
//!
//! Height convention: an absent subtree has height 0, a leaf has height 1.

use std::fmt;

/// An owned, possibly empty subtree.
pub type Link<N> = Option<Box<N>>;

/// Read-only view shared by both tree variants, so traversals are written once.
pub trait TreeNode: Sized {
    fn key(&self) -> &str;
    fn frequency(&self) -> u64;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
}

// =============================================================================
// BST NODE
// =============================================================================

/// Node of the unbalanced tree. Carries no height; it is computed on demand.
///
/// Nothing here derives a recursive trait: a sorted build makes a chain as deep
/// as the vocabulary. `Debug` names the children instead of descending.
pub struct BstNode {
    pub key: String,
    pub frequency: u64,
    pub left: Link<BstNode>,
    pub right: Link<BstNode>,
}

impl BstNode {
    pub fn new(key: impl Into<String>) -> Self {
        BstNode {
            key: key.into(),
            frequency: 1,
            left: None,
            right: None,
        }
    }
}

impl fmt::Debug for BstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BstNode")
            .field("key", &self.key)
            .field("frequency", &self.frequency)
            .field("left", &self.left.as_ref().map(|n| n.key.as_str()))
            .field("right", &self.right.as_ref().map(|n| n.key.as_str()))
            .finish()
    }
}

impl TreeNode for BstNode {
    fn key(&self) -> &str {
        &self.key
    }

    fn frequency(&self) -> u64 {
        self.frequency
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

// =============================================================================
// AVL NODE
// =============================================================================

/// Node of the balanced tree, with its subtree height cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvlNode {
    pub key: String,
    pub frequency: u64,
    pub height: u32,
    pub left: Link<AvlNode>,
    pub right: Link<AvlNode>,
}

impl AvlNode {
    /// A fresh leaf: frequency 1, height 1.
    pub fn new(key: impl Into<String>) -> Self {
        AvlNode {
            key: key.into(),
            frequency: 1,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Recompute the cached height from the children.
    #[inline]
    pub fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`.
    #[inline]
    pub fn balance_factor(&self) -> i64 {
        i64::from(height(&self.left)) - i64::from(height(&self.right))
    }
}

/// Cached height of an AVL subtree (0 when absent).
#[inline]
pub fn height(link: &Link<AvlNode>) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

impl TreeNode for AvlNode {
    fn key(&self) -> &str {
        &self.key
    }

    fn frequency(&self) -> u64 {
        self.frequency
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}
