//! Graphviz DOT generator for tree graphs
//!
//! Produces an undirected `graph { ... }` document: data nodes as filled
//! circles with white text, empty leaves as tiny black boxes.

use crate::core::graph::{Graph, Vertex, VertexKind};
use std::fmt::Write;

/// Generator for Graphviz DOT syntax
pub struct DotGenerator;

impl DotGenerator {
    /// Generate a DOT document for `graph`
    ///
    /// Vertices are listed first in insertion order, then edges in insertion order.
    #[must_use]
    pub fn generate(graph: &Graph) -> String {
        let mut output = String::from("graph G {\n");

        for vertex in graph.vertices() {
            let _ = writeln!(output, "    {} [{}];", vertex.id, Self::attributes(vertex));
        }

        if !graph.edges().is_empty() {
            output.push('\n');
        }

        for edge in graph.edges() {
            let _ = writeln!(output, "    {} -- {};", edge.from, edge.to);
        }

        output.push_str("}\n");
        output
    }

    fn attributes(vertex: &Vertex) -> String {
        let spec = &vertex.spec;
        let label = Self::escape_label(&spec.label);
        match spec.kind {
            VertexKind::Node => format!(
                "label=\"{label}\", shape=circle, style=filled, fillcolor={}, fontcolor=white",
                spec.fill
            ),
            VertexKind::Leaf => format!(
                "label=\"{label}\", shape=box, style=filled, fillcolor={}, width=0.1, height=0.1",
                spec.fill
            ),
        }
    }

    /// Escape a label for use inside a double-quoted DOT string
    fn escape_label(label: &str) -> String {
        let mut escaped = String::with_capacity(label.len());
        for c in label.chars() {
            match c {
                '"' => escaped.push_str("\\\""),
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}
