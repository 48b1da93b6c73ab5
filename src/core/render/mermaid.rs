//! Mermaid diagram generator for tree graphs
//!
//! Generates Mermaid flowchart syntax that can be embedded in Markdown files
//! and rendered by GitHub, GitLab, and other Markdown viewers.

use crate::core::graph::{Graph, VertexKind};
use crate::core::models::Color;
use std::fmt::Write;

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a top-down Mermaid flowchart for `graph`
    ///
    /// Data nodes are circles styled by class (`red`/`black`), empty leaves are
    /// small squares in the `leaf` class. Edges are plain lines.
    #[must_use]
    pub fn generate(graph: &Graph) -> String {
        let mut output = String::from("flowchart TD\n");

        for vertex in graph.vertices() {
            let id = vertex.id;
            match vertex.spec.kind {
                VertexKind::Node => {
                    let label = Self::escape_label(&vertex.spec.label);
                    let class = Self::class_for(vertex.spec.fill);
                    let _ = writeln!(output, "    {id}((\"{label}\")):::{class}");
                }
                VertexKind::Leaf => {
                    let _ = writeln!(output, "    {id}[\" \"]:::leaf");
                }
            }
        }

        output.push('\n');

        for edge in graph.edges() {
            let _ = writeln!(output, "    {} --- {}", edge.from, edge.to);
        }

        output.push('\n');
        output.push_str("    classDef red fill:#c0392b,stroke:#000,color:#fff\n");
        output.push_str("    classDef black fill:#000,stroke:#000,color:#fff\n");
        output.push_str("    classDef leaf fill:#000,stroke:#000,font-size:2px\n");
        output
    }

    const fn class_for(color: Color) -> &'static str {
        match color {
            Color::Red => "red",
            Color::Black => "black",
        }
    }

    /// Mermaid has no backslash escapes inside quoted labels; use its entity codes
    fn escape_label(label: &str) -> String {
        label.replace('"', "#quot;")
    }
}
