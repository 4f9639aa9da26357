//! Export — present a parsed graph to the outside world.
//!
//! Three forms:
//!
//! ```text
//! GraphStore → render_text()  → indented listing for display
//!            → to_notation()  → canonical `{{a,b},{c}}` text, re-parseable
//!            → to_json()      → [{"name", "forward", "reverse"}, ...]
//! ```

use std::io::Write;

use hashbrown::HashSet;
use serde::Serialize;

use crate::model::{Node, NodeId};
use crate::store::GraphStore;

/// Write the display listing: each identifier in insertion order, then
/// the nodes it relates to, then (when tracked) the nodes relating to it.
///
/// ```text
/// a:
///     related to:
///         b
/// b:
///     reverse relation to:
///         a
/// ```
pub fn render_text(store: &GraphStore, writer: &mut dyn Write) -> std::io::Result<()> {
    for node in store {
        writeln!(writer, "{}:", node.name())?;

        if !node.forward().is_empty() {
            writeln!(writer, "    related to:")?;
            for name in store.forward_names(node) {
                writeln!(writer, "        {name}")?;
            }
        }

        if !node.reverse().is_empty() {
            writeln!(writer, "    reverse relation to:")?;
            for name in store.reverse_names(node) {
                writeln!(writer, "        {name}")?;
            }
        }
    }
    Ok(())
}

/// [`render_text`] into a `String`.
pub fn to_text(store: &GraphStore) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail, and names are ASCII.
    let _ = render_text(store, &mut buf);
    String::from_utf8(buf).unwrap_or_default()
}

/// Canonical notation: one two-element vector per forward edge (by source
/// order, then edge order), plus a one-element vector per isolated node.
///
/// Parsing the result gives back the same nodes and relations.
pub fn to_notation(store: &GraphStore) -> String {
    // Without reverse tracking, incoming relations are only visible from
    // their sources.
    let targets: HashSet<NodeId> = if store.tracks_reverse() {
        HashSet::new()
    } else {
        store.edges().map(|(_, dst)| dst.id()).collect()
    };
    let is_isolated = |node: &Node| {
        if store.tracks_reverse() {
            node.is_isolated()
        } else {
            node.forward().is_empty() && !targets.contains(&node.id())
        }
    };

    let mut vectors = Vec::new();
    for node in store {
        if is_isolated(node) {
            vectors.push(format!("{{{}}}", node.name()));
        }
        for target in store.forward_names(node) {
            vectors.push(format!("{{{},{}}}", node.name(), target));
        }
    }
    format!("{{{}}}", vectors.join(","))
}

/// Serializable view of one node, neighbours by name.
#[derive(Debug, Serialize)]
struct NodeView<'a> {
    name: &'a str,
    forward: Vec<&'a str>,
    reverse: Vec<&'a str>,
}

/// JSON array of `{name, forward, reverse}` in insertion order.
pub fn to_json(store: &GraphStore) -> serde_json::Value {
    let views: Vec<NodeView<'_>> = store
        .iter()
        .map(|node| NodeView {
            name: node.name(),
            forward: store.forward_names(node).collect(),
            reverse: store.reverse_names(node).collect(),
        })
        .collect();
    // NodeView only holds strings and string lists.
    serde_json::to_value(views).unwrap_or(serde_json::Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, parse_with, ParseOptions};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_text() {
        let g = parse("{{a,b},{a,c}}").unwrap();
        assert_eq!(
            to_text(&g),
            "a:\n    related to:\n        b\n        c\n\
             b:\n    reverse relation to:\n        a\n\
             c:\n    reverse relation to:\n        a\n"
        );
    }

    #[test]
    fn test_render_text_isolated_and_empty() {
        let g = parse("{{x}}").unwrap();
        assert_eq!(to_text(&g), "x:\n");
        assert_eq!(to_text(&parse("").unwrap()), "");
    }

    #[test]
    fn test_render_text_without_reverse() {
        let g = parse_with("{{a,b}}", &ParseOptions::new().track_reverse(false)).unwrap();
        assert_eq!(to_text(&g), "a:\n    related to:\n        b\nb:\n");
    }

    #[test]
    fn test_to_notation() {
        let g = parse("{{a,b,c},{d},{a,c}}").unwrap();
        assert_eq!(to_notation(&g), "{{a,b},{a,c},{b,c},{d}}");
        assert_eq!(to_notation(&parse("").unwrap()), "{}");
    }

    #[test]
    fn test_to_notation_without_reverse() {
        let g = parse_with("{{a,b},{c}}", &ParseOptions::new().track_reverse(false)).unwrap();
        assert_eq!(to_notation(&g), "{{a,b},{c}}");
    }

    #[test]
    fn test_to_notation_without_reverse_keeps_targets_out_of_singletons() {
        let options = ParseOptions::new().track_reverse(false);
        let g = parse_with("{{a,b,c},{d},{e,c}}", &options).unwrap();
        let canonical = to_notation(&g);
        assert_eq!(canonical, "{{a,b},{b,c},{d},{e,c}}");

        let again = parse_with(&canonical, &options).unwrap();
        assert_eq!(to_notation(&again), canonical);
    }

    #[test]
    fn test_to_text_non_empty_for_nonempty_graph() {
        let g = parse("{{x1,Y2}}").unwrap();
        let text = to_text(&g);
        assert!(text.starts_with("x1:\n"));
        assert!(text.contains("        Y2\n"));
    }

    #[test]
    fn test_to_json() {
        let g = parse("{{a,b}}").unwrap();
        assert_eq!(
            to_json(&g),
            serde_json::json!([
                {"name": "a", "forward": ["b"], "reverse": []},
                {"name": "b", "forward": [], "reverse": ["a"]}
            ])
        );
    }
}
