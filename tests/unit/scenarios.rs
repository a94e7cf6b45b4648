//! Fixed-input scenarios with known shapes and counter values.

use super::common::{build_all, passage_entries, repeated, sequential_words, PASSAGE};
use wordtree::{AvlIndex, BstIndex, IndexError, Outcome, SortedArrayIndex, TreeIndex, WordIndex};

// ============================================================================
// DEGENERATE INPUT
// ============================================================================

#[test]
fn sorted_input_chains_the_bst_but_not_the_avl() {
    let tokens = ["a", "b", "c", "d", "e"];

    let mut bst = BstIndex::new();
    let bst_stats = bst.build(tokens).unwrap();
    assert_eq!(bst_stats.height, 5);
    assert_eq!(bst_stats.rotations, 0);

    let mut avl = AvlIndex::new();
    let avl_stats = avl.build(tokens).unwrap();
    assert_eq!(avl_stats.height, 3);
    assert_eq!(avl_stats.rotations, 2);
}

#[test]
fn first_avl_rotation_happens_on_third_sorted_word() {
    let mut avl = AvlIndex::new();
    let rotations: Vec<u64> = avl
        .steps(["a", "b", "c", "d", "e"])
        .map(|step| step.unwrap().stats.rotations)
        .collect();
    assert_eq!(rotations, vec![0, 0, 1, 1, 2]);
}

#[test]
fn bst_chain_is_right_leaning() {
    let mut bst = BstIndex::new();
    bst.build(["a", "b", "c", "d", "e"]).unwrap();
    let chain: Vec<(&str, Option<&str>)> = bst.nodes().iter().map(|n| (n.key, n.parent)).collect();
    assert_eq!(
        chain,
        vec![
            ("a", None),
            ("b", Some("a")),
            ("c", Some("b")),
            ("d", Some("c")),
            ("e", Some("d")),
        ]
    );
}

// ============================================================================
// ROTATIONS
// ============================================================================

#[test]
fn ll_rotation_promotes_middle_key() {
    let mut avl = AvlIndex::new();
    let stats = avl.build(["c", "b", "a"]).unwrap();
    assert_eq!(stats.rotations, 1);
    assert_eq!(stats.height, 2);
    assert_eq!(avl.root_key(), Some("b"));

    let root = avl.root().unwrap();
    assert_eq!(root.left.as_ref().map(|n| n.key.as_str()), Some("a"));
    assert_eq!(root.right.as_ref().map(|n| n.key.as_str()), Some("c"));
}

#[test]
fn every_rotation_case_ends_balanced_on_the_middle_key() {
    for (tokens, rotations) in [
        (["c", "b", "a"], 1),
        (["a", "b", "c"], 1),
        (["c", "a", "b"], 2),
        (["a", "c", "b"], 2),
    ] {
        let mut avl = AvlIndex::new();
        let stats = avl.build(tokens).unwrap();
        assert_eq!(stats.rotations, rotations, "input {:?}", tokens);
        assert_eq!(avl.root_key(), Some("b"), "input {:?}", tokens);
        assert_eq!(avl.height(), 2);
    }
}

#[test]
fn unbalanced_kinds_never_rotate() {
    let tokens = sequential_words(200);
    let (array, bst, _) = build_all(&tokens);
    assert_eq!(array.stats().rotations, 0);
    assert_eq!(bst.stats().rotations, 0);
}

// ============================================================================
// FREQUENCIES
// ============================================================================

#[test]
fn passage_counts_agree_across_kinds() {
    let (array, bst, avl) = build_all(PASSAGE);
    assert_eq!(array.to_entries(), passage_entries());
    assert_eq!(bst.to_entries(), passage_entries());
    assert_eq!(avl.to_entries(), passage_entries());
}

#[test]
fn repeated_key_has_one_entry() {
    let tokens = repeated(&["k", "x", "k", "y"], 25);
    let (array, bst, avl) = build_all(&tokens);
    for (len, freq) in [
        (array.len(), array.frequency_of("k")),
        (bst.len(), bst.frequency_of("k")),
        (avl.len(), avl.frequency_of("k")),
    ] {
        assert_eq!(len, 3);
        assert_eq!(freq, 50);
    }
}

#[test]
fn keys_are_case_sensitive_and_byte_ordered() {
    let mut avl = AvlIndex::new();
    avl.build(["b", "B", "a", "A"]).unwrap();
    let keys: Vec<&str> = avl.entries().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["A", "B", "a", "b"]);
}

#[test]
fn insert_reports_outcome() {
    let mut bst = BstIndex::new();
    assert_eq!(bst.insert("w").unwrap(), Outcome::Inserted);
    assert_eq!(bst.insert("w").unwrap(), Outcome::Incremented);
    assert_eq!(bst.frequency_of("w"), 2);
}

// ============================================================================
// EMPTY AND INVALID INPUT
// ============================================================================

#[test]
fn empty_build_reports_zeroes() {
    let empty: Vec<String> = Vec::new();
    let (array, bst, avl) = build_all(&empty);
    for stats in [array.stats(), bst.stats(), avl.stats()] {
        assert_eq!(stats.counters(), (0, 0, 0, 0));
    }
    assert!(array.is_empty() && bst.is_empty() && avl.is_empty());
    assert!(bst.nodes().is_empty());
    assert_eq!(avl.root_key(), None);
}

#[test]
fn empty_word_is_rejected_by_every_kind() {
    let mut array = SortedArrayIndex::new();
    let mut bst = BstIndex::new();
    let mut avl = AvlIndex::new();
    for result in [array.insert(""), bst.insert(""), avl.insert("")] {
        assert!(matches!(
            result,
            Err(IndexError::InvalidInput { position: None, .. })
        ));
    }
    assert!(array.is_empty() && bst.is_empty() && avl.is_empty());
}

#[test]
fn build_error_names_the_offending_token() {
    let mut bst = BstIndex::new();
    let err = bst.build(["one", "two", "three", ""]).unwrap_err();
    assert_eq!(err.to_string(), "invalid input at token 3: empty word");
    assert_eq!(bst.len(), 3);
}
