//! Structural invariants: ordering, balance, height bound.

use super::common::assert_sorted_view;
use super::{distinct_words_strategy, tokens_strategy};
use proptest::prelude::*;
use wordtree::verify::{check_avl, check_bst};
use wordtree::{AvlIndex, BstIndex, SortedArrayIndex, TreeIndex, WordIndex};

proptest! {
    /// Every kind yields a strictly ascending view of unique keys.
    #[test]
    fn prop_views_are_strictly_ascending(tokens in tokens_strategy(300)) {
        let mut array = SortedArrayIndex::new();
        let mut bst = BstIndex::new();
        let mut avl = AvlIndex::new();
        array.build(&tokens).unwrap();
        bst.build(&tokens).unwrap();
        avl.build(&tokens).unwrap();
        assert_sorted_view(&array);
        assert_sorted_view(&bst);
        assert_sorted_view(&avl);
        prop_assert!(check_bst(bst.root()).is_ok());
    }

    /// The AVL tree is balanced after every single insertion, not just at the end.
    #[test]
    fn prop_avl_balanced_after_every_insert(words in distinct_words_strategy(400)) {
        let mut avl = AvlIndex::new();
        for word in &words {
            avl.insert(word).unwrap();
            prop_assert_eq!(check_avl(avl.root()), Ok(()), "after inserting {}", word);
        }
    }

    /// AVL height stays under 1.44 * log2(n + 2).
    #[test]
    fn prop_avl_height_bound(words in distinct_words_strategy(2_000)) {
        let mut avl = AvlIndex::new();
        let stats = avl.build(&words).unwrap();
        let n = avl.len() as f64;
        let bound = 1.44 * (n + 2.0).log2();
        prop_assert!(
            f64::from(stats.height) <= bound,
            "height {} exceeds bound {:.2} for n = {}", stats.height, bound, n
        );
    }

    /// BST height is at least the AVL height for the same keys.
    #[test]
    fn prop_bst_never_shallower_than_avl(words in distinct_words_strategy(300)) {
        let mut bst = BstIndex::new();
        let mut avl = AvlIndex::new();
        bst.build(&words).unwrap();
        avl.build(&words).unwrap();
        prop_assert!(bst.height() >= avl.height());
    }

    /// Counters are deterministic and rotations stay zero outside the AVL tree.
    #[test]
    fn prop_counters_reproducible(tokens in tokens_strategy(200)) {
        let mut first = AvlIndex::new();
        let mut second = AvlIndex::new();
        let a = first.build(&tokens).unwrap();
        let b = second.build(&tokens).unwrap();
        prop_assert_eq!(a.counters(), b.counters());

        let mut bst = BstIndex::new();
        prop_assert_eq!(bst.build(&tokens).unwrap().rotations, 0);
    }
}

/// Large distinct-word run at the top of the documented range, checked once
/// at the end and along the way every 500 insertions.
#[test]
fn avl_balanced_for_ten_thousand_words() {
    let words = super::common::scrambled_words(10_000, 2024);
    let mut avl = AvlIndex::new();
    for (i, word) in words.iter().enumerate() {
        avl.insert(word).unwrap();
        if i % 500 == 0 {
            assert_eq!(check_avl(avl.root()), Ok(()));
        }
    }
    assert_eq!(check_avl(avl.root()), Ok(()));
    let bound = 1.44 * (10_002f64).log2();
    assert!(f64::from(avl.height()) <= bound);
}
