//! Leveled node enumeration, parent map and incremental replay.

use super::common::{assert_nodes_consistent, scrambled_words, sequential_words};
use wordtree::{max_depth, AvlIndex, BstIndex, Side, TreeIndex, WordIndex};

#[test]
fn enumeration_is_preorder_with_sides() {
    let mut avl = AvlIndex::new();
    avl.build(["d", "b", "f", "a", "c", "e", "g"]).unwrap();
    let listed: Vec<(&str, u32, Option<Side>)> =
        avl.nodes().iter().map(|n| (n.key, n.depth, n.side)).collect();
    assert_eq!(
        listed,
        vec![
            ("d", 0, None),
            ("b", 1, Some(Side::Left)),
            ("a", 2, Some(Side::Left)),
            ("c", 2, Some(Side::Right)),
            ("f", 1, Some(Side::Right)),
            ("e", 2, Some(Side::Left)),
            ("g", 2, Some(Side::Right)),
        ]
    );
}

#[test]
fn enumeration_is_consistent_for_both_trees() {
    let tokens = scrambled_words(300, 42);
    let mut bst = BstIndex::new();
    let mut avl = AvlIndex::new();
    bst.build(&tokens).unwrap();
    avl.build(&tokens).unwrap();
    assert_nodes_consistent(&bst);
    assert_nodes_consistent(&avl);
}

#[test]
fn max_depth_is_height_minus_one() {
    let tokens = sequential_words(40);
    let mut bst = BstIndex::new();
    let mut avl = AvlIndex::new();
    bst.build(&tokens).unwrap();
    avl.build(&tokens).unwrap();
    assert_eq!(max_depth(&bst.nodes()), Some(39));
    assert_eq!(max_depth(&avl.nodes()), Some(avl.height() - 1));
    assert_eq!(max_depth(&[]), None);
}

#[test]
fn parent_map_matches_enumeration() {
    let tokens = scrambled_words(64, 5);
    let mut avl = AvlIndex::new();
    avl.build(&tokens).unwrap();
    let parents = avl.parent_map();
    let nodes = avl.nodes();
    assert_eq!(parents.len(), nodes.len() - 1);
    for node in &nodes {
        assert_eq!(parents.get(node.key).copied(), node.parent);
    }
}

#[test]
fn enumeration_does_not_touch_counters() {
    let mut avl = AvlIndex::new();
    avl.build(["m", "a", "z"]).unwrap();
    let before = avl.stats().counters();
    let _ = avl.nodes();
    let _ = avl.parent_map();
    let _ = avl.entries().count();
    assert_eq!(avl.stats().counters(), before);
}

#[test]
fn replay_lets_a_renderer_watch_the_tree_grow() {
    let mut avl = AvlIndex::new();
    let mut steps = avl.steps(["c", "b", "a", "d"]);
    let mut roots = Vec::new();
    while let Some(step) = steps.next() {
        step.unwrap();
        roots.push(steps.index().root_key().map(str::to_owned));
    }
    assert_eq!(
        roots,
        vec![
            Some("c".to_owned()),
            Some("c".to_owned()),
            Some("b".to_owned()),
            Some("b".to_owned()),
        ]
    );
}

#[test]
fn replay_final_stats_match_build() {
    let tokens = scrambled_words(128, 9);
    let mut built = AvlIndex::new();
    let expected = built.build(&tokens).unwrap();

    let mut stepped = AvlIndex::new();
    let last = stepped
        .steps(&tokens)
        .last()
        .expect("at least one step")
        .unwrap();
    assert_eq!(last.position, 127);
    assert_eq!(last.stats.counters(), expected.counters());
}
