//! Round-trip and property tests.
//!
//!   GraphStore -> to_notation() -> parse() -> same nodes, same relations
//!
//! Generated inputs use a small identifier alphabet so vectors share
//! nodes and duplicate relations actually occur.

use std::collections::BTreeSet;

use hypergraph_rs::export::{to_json, to_notation, to_text};
use hypergraph_rs::{parse, parse_with, GraphStore, ParseError, ParseOptions};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

type Shape = (BTreeSet<String>, BTreeSet<(String, String)>, BTreeSet<(String, String)>);

/// Names, forward edges and reverse edges, independent of ordering.
fn shape(graph: &GraphStore) -> Shape {
    let nodes = graph.iter().map(|n| n.name().to_string()).collect();
    let mut forward = BTreeSet::new();
    let mut reverse = BTreeSet::new();
    for node in graph {
        for target in graph.forward_names(node) {
            forward.insert((node.name().to_string(), target.to_string()));
        }
        for source in graph.reverse_names(node) {
            reverse.insert((source.to_string(), node.name().to_string()));
        }
    }
    (nodes, forward, reverse)
}

fn render(vectors: &[Vec<String>]) -> String {
    let inner: Vec<String> = vectors.iter().map(|v| format!("{{{}}}", v.join(","))).collect();
    format!("{{{}}}", inner.join(","))
}

fn vectors() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-f][0-9]?", 1..5), 0..6)
}

// ============================================================================
// 1. Fixed round trips
// ============================================================================

#[test]
fn test_roundtrip_fixed() {
    for input in ["", "{}", "{{a}}", "{{a,b,c}}", "{{a,b},{b,a}}", "{{x,y},{z},{y,x,z}}"] {
        let graph = parse(input).unwrap();
        let again = parse(&to_notation(&graph)).unwrap();
        assert_eq!(shape(&again), shape(&graph), "round trip of {input:?}");
    }
}

#[test]
fn test_canonical_notation_is_stable() {
    let graph = parse("{{c,a},{b},{a,b,c}}").unwrap();
    let canonical = to_notation(&graph);
    assert_eq!(canonical, "{{c,a},{a,b},{b,c}}");
    assert_eq!(to_notation(&parse(&canonical).unwrap()), canonical);
}

#[test]
fn test_text_and_json_agree() {
    let graph = parse("{{a,b},{a,c}}").unwrap();
    let json = to_json(&graph);
    let text = to_text(&graph);

    let listed: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert_eq!(listed, vec!["a", "b", "c"]);
    for name in listed {
        assert!(text.contains(&format!("{name}:\n")));
    }
}

// ============================================================================
// 2. Properties
// ============================================================================

proptest! {
    #[test]
    fn lexer_and_parser_never_panic(input in "\\PC{0,40}") {
        let _ = parse(&input);
    }

    #[test]
    fn roundtrip_preserves_shape(vs in vectors()) {
        let input = render(&vs);
        if let Ok(graph) = parse(&input) {
            let again = parse(&to_notation(&graph)).unwrap();
            prop_assert_eq!(shape(&again), shape(&graph));
        }
    }

    #[test]
    fn roundtrip_without_reverse(vs in vectors()) {
        let options = ParseOptions::new().track_reverse(false);
        let input = render(&vs);
        if let Ok(graph) = parse_with(&input, &options) {
            let again = parse_with(&to_notation(&graph), &options).unwrap();
            prop_assert_eq!(shape(&again), shape(&graph));
        }
    }

    #[test]
    fn only_duplicates_fail_on_wellformed_input(vs in vectors()) {
        match parse(&render(&vs)) {
            Ok(graph) => {
                let expected: BTreeSet<&str> = vs.iter().flatten().map(String::as_str).collect();
                prop_assert_eq!(graph.len(), expected.len());
            }
            Err(err) => {
                let is_duplicate = matches!(err, ParseError::DuplicateRelationship { .. });
                prop_assert!(is_duplicate);
            }
        }
    }

    #[test]
    fn parse_is_deterministic(vs in vectors()) {
        let input = render(&vs);
        prop_assert_eq!(parse(&input), parse(&input));
    }
}
