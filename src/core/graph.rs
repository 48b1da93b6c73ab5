//! Rendering-only graph built from a tree
//!
//! Vertices and edges are kept in insertion order so serialized output is
//! stable across runs.

use crate::core::models::Color;
use std::fmt;

/// Identifier of a vertex, unique within one graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Position of the vertex in insertion order
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// What a vertex stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    /// A data-bearing tree node, drawn as a filled circle with white text
    Node,
    /// An empty child, drawn as a small black box with no label
    Leaf,
}

/// Everything needed to draw a vertex, minus its identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexSpec {
    /// Display label
    pub label: String,
    /// Fill color
    pub fill: Color,
    /// Node or leaf placeholder
    pub kind: VertexKind,
}

impl VertexSpec {
    /// A data-bearing node
    #[must_use]
    pub fn node(label: impl Into<String>, fill: Color) -> Self {
        Self {
            label: label.into(),
            fill,
            kind: VertexKind::Node,
        }
    }

    /// A leaf placeholder: empty label, always black
    #[must_use]
    pub const fn leaf() -> Self {
        Self {
            label: String::new(),
            fill: Color::Black,
            kind: VertexKind::Leaf,
        }
    }
}

/// A vertex registered in a [`Graph`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    /// Unique identifier
    pub id: VertexId,
    /// Drawing attributes
    pub spec: VertexSpec,
}

/// Parent-to-child connection; rendered undirected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Parent vertex
    pub from: VertexId,
    /// Child vertex
    pub to: VertexId,
}

/// Graph-building collaborator used by the converter
pub trait GraphSink {
    /// Register a vertex and return its identifier
    fn add_vertex(&mut self, spec: VertexSpec) -> VertexId;
    /// Connect two previously registered vertices
    fn add_edge(&mut self, from: VertexId, to: VertexId);
}

/// In-memory graph: ordered vertices and edges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Vertices in insertion order
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Edges in insertion order
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a vertex by id
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Number of vertices of the given kind
    #[must_use]
    pub fn count(&self, kind: VertexKind) -> usize {
        self.vertices.iter().filter(|v| v.spec.kind == kind).count()
    }
}

impl GraphSink for Graph {
    fn add_vertex(&mut self, spec: VertexSpec) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex { id, spec });
        id
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId) {
        self.edges.push(Edge { from, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_and_unique() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(VertexSpec::node("a", Color::Red));
        let b = graph.add_vertex(VertexSpec::leaf());
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "n0");
        assert_eq!(b.to_string(), "n1");
        assert_eq!(graph.vertex(b).unwrap().spec.kind, VertexKind::Leaf);
    }

    #[test]
    fn test_edges_keep_insertion_order() {
        let mut graph = Graph::new();
        let root = graph.add_vertex(VertexSpec::node("r", Color::Black));
        let left = graph.add_vertex(VertexSpec::leaf());
        let right = graph.add_vertex(VertexSpec::leaf());
        graph.add_edge(root, left);
        graph.add_edge(root, right);
        assert_eq!(
            graph.edges(),
            &[
                Edge { from: root, to: left },
                Edge { from: root, to: right }
            ]
        );
        assert_eq!(graph.count(VertexKind::Leaf), 2);
        assert_eq!(graph.count(VertexKind::Node), 1);
    }

    #[test]
    fn test_leaf_spec_is_black_and_unlabelled() {
        let leaf = VertexSpec::leaf();
        assert!(leaf.label.is_empty());
        assert_eq!(leaf.fill, Color::Black);
    }
}
