//! Stats formatting, comparison reports and serialized shapes.

use super::common::{build_kind, zipf_like_tokens, PASSAGE};
use wordtree::{compare, AvlIndex, CompareConfig, IndexKind, Stats, TreeIndex, WordIndex};

#[test]
fn stats_display_lists_every_counter() {
    let mut avl = AvlIndex::new();
    let stats = avl.build(["c", "b", "a"]).unwrap();
    let text = stats.to_string();
    assert!(text.contains("Comparisons: 3"));
    assert!(text.contains("Assignments: 5"));
    assert!(text.contains("Rotations:   1"));
    assert!(text.contains("Height:      2"));
    assert!(text.contains("Balanced:    yes"));
}

#[test]
fn comparison_agrees_on_zipf_text() {
    let tokens = zipf_like_tokens(500, 5_000, 3);
    let report = compare(&tokens, &CompareConfig::default()).unwrap();
    assert!(report.views_agree());
    let distinct: Vec<usize> = report.runs.iter().map(|run| run.distinct).collect();
    assert!(distinct.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn comparison_matches_individual_builds() {
    let report = compare(PASSAGE, &CompareConfig::default()).unwrap();
    for kind in IndexKind::ALL {
        let (stats, entries) = build_kind(kind, PASSAGE);
        let run = report.run(kind).unwrap();
        assert_eq!(run.stats.counters(), stats.counters(), "{}", kind);
        assert_eq!(run.entries, entries);
    }
}

#[test]
fn config_round_trips_through_json() {
    let config = CompareConfig::only(&[IndexKind::Bst, IndexKind::Avl]);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"kinds":["bst","avl"],"verify":true}"#);
    let parsed: CompareConfig = serde_json::from_str(r#"{"kinds":["array"]}"#).unwrap();
    assert_eq!(parsed.kinds, vec![IndexKind::SortedArray]);
    assert!(parsed.verify);
}

#[test]
fn stats_serialize_with_plain_fields() {
    let stats = Stats {
        comparisons: 3,
        assignments: 4,
        rotations: 1,
        height: 2,
        ..Stats::default()
    };
    let value = serde_json::to_value(stats).unwrap();
    assert_eq!(value["comparisons"], 3);
    assert_eq!(value["rotations"], 1);
    assert_eq!(value["height"], 2);
}

#[test]
fn node_info_serializes_for_renderers() {
    let mut avl = AvlIndex::new();
    avl.build(["b", "a"]).unwrap();
    let value = serde_json::to_value(avl.nodes()).unwrap();
    assert_eq!(value[0]["key"], "b");
    assert_eq!(value[0]["parent"], serde_json::Value::Null);
    assert_eq!(value[1]["parent"], "b");
    assert_eq!(value[1]["depth"], 1);
}

#[test]
fn kind_names_parse() {
    assert_eq!("vector".parse::<IndexKind>(), Ok(IndexKind::SortedArray));
    assert_eq!("BST".parse::<IndexKind>(), Ok(IndexKind::Bst));
    assert!("heap".parse::<IndexKind>().is_err());
    assert_eq!(AvlIndex::new().kind().to_string(), "avl");
}
