//! End-to-end conversion tests: JSON file in, graph and document out

use rbviz::core::convert::build_graph;
use rbviz::core::graph::VertexKind;
use rbviz::core::models::{load_tree, parse_tree_json, Color};
use rbviz::core::pipeline::render_tree;
use rbviz::core::render::RenderFormat;
use rbviz::core::validate::{is_valid, validate};
use rbviz::core::viewer::DEFAULT_VIEWER_URL;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn single_black_node_example() {
    let tree = parse_tree_json(r#"{"data":5,"color":"b","left":null,"right":null}"#)
        .expect("valid document");
    let graph = build_graph(tree.as_ref());

    assert_eq!(graph.vertices().len(), 3);
    assert_eq!(graph.edges().len(), 2);

    let root = &graph.vertices()[0];
    assert_eq!(root.spec.kind, VertexKind::Node);
    assert_eq!(root.spec.label, "5");
    assert_eq!(root.spec.fill, Color::Black);
    assert_eq!(graph.count(VertexKind::Leaf), 2);
}

#[test]
fn null_document_renders_single_leaf() {
    let tree = parse_tree_json("null").expect("null is a valid document");
    let rendered = render_tree(tree.as_ref(), RenderFormat::Dot, DEFAULT_VIEWER_URL);

    assert_eq!(rendered.graph.vertices().len(), 1);
    assert!(rendered.graph.edges().is_empty());
    assert!(rendered.document.contains("shape=box"));
}

#[test]
fn fixture_counts_match_tree_shape() {
    let tree = load_tree(&fixture("valid_tree.json"))
        .expect("fixture loads")
        .expect("fixture is not empty");
    let graph = build_graph(Some(&tree));

    assert_eq!(tree.size(), 5);
    assert_eq!(graph.count(VertexKind::Node), 5);
    assert_eq!(graph.count(VertexKind::Leaf), tree.null_children());
    assert_eq!(graph.edges().len(), 2 * tree.size());

    let red: Vec<_> = graph
        .vertices()
        .iter()
        .filter(|v| v.spec.fill == Color::Red)
        .map(|v| v.spec.label.as_str())
        .collect();
    assert_eq!(red, ["20"]);
}

#[test]
fn invalid_tree_still_renders() {
    let tree = load_tree(&fixture("invalid_tree.json")).expect("fixture loads");

    assert_eq!(validate(tree.as_ref()).len(), 2);

    let rendered = render_tree(tree.as_ref(), RenderFormat::Dot, DEFAULT_VIEWER_URL);
    assert_eq!(rendered.graph.count(VertexKind::Node), 2);
    assert_eq!(rendered.document.matches("fillcolor=red").count(), 2);
}

#[test]
fn valid_fixture_passes_checks() {
    let tree = load_tree(&fixture("valid_tree.json")).expect("fixture loads");
    assert!(is_valid(tree.as_ref()));
}

#[test]
fn url_carries_encoded_document() {
    let tree = load_tree(&fixture("valid_tree.json")).expect("fixture loads");
    let rendered = render_tree(tree.as_ref(), RenderFormat::Dot, DEFAULT_VIEWER_URL);

    assert!(rendered.url.starts_with(DEFAULT_VIEWER_URL));
    let fragment = &rendered.url[DEFAULT_VIEWER_URL.len()..];
    assert!(fragment.starts_with("graph%20G%20%7B"));
    assert!(!fragment.contains(' '));
    assert!(!fragment.contains('"'));
}
