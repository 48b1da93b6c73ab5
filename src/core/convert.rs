//! Tree-to-graph conversion
//!
//! Every internal node becomes a colored vertex and every empty child a leaf
//! placeholder. Each node gets exactly two edges, left first.

use crate::core::graph::{Graph, GraphSink, VertexId, VertexSpec};
use crate::core::models::TreeNode;

/// Pending work for the explicit-stack walk in [`tree_to_graph`]
enum Step<'a> {
    /// Emit the vertex for a subtree root and schedule its children
    Visit(Option<&'a TreeNode>, Option<VertexId>),
    /// Connect a parent to a child whose subtree is complete
    Link(VertexId, VertexId),
}

/// Convert `tree` into vertices and edges on `sink`, returning the subtree's root vertex
///
/// Vertices come out in pre-order. A parent's edge to a child is added once
/// the child's whole subtree has been emitted, left child before right.
/// The walk keeps its own stack, so tree depth is not bounded by the call stack.
pub fn tree_to_graph<S: GraphSink + ?Sized>(tree: Option<&TreeNode>, sink: &mut S) -> VertexId {
    let mut root = None;
    let mut steps = vec![Step::Visit(tree, None)];

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(None, parent) => {
                let leaf = sink.add_vertex(VertexSpec::leaf());
                root.get_or_insert(leaf);
                if let Some(parent) = parent {
                    sink.add_edge(parent, leaf);
                }
            }
            Step::Visit(Some(node), parent) => {
                let id = sink.add_vertex(VertexSpec::node(node.label(), node.color));
                root.get_or_insert(id);
                if let Some(parent) = parent {
                    steps.push(Step::Link(parent, id));
                }
                steps.push(Step::Visit(node.right.as_deref(), Some(id)));
                steps.push(Step::Visit(node.left.as_deref(), Some(id)));
            }
            Step::Link(from, to) => sink.add_edge(from, to),
        }
    }

    // the first step always emits a vertex
    root.unwrap_or_else(|| unreachable!("tree walk emitted no vertex"))
}

/// Build a fresh [`Graph`] for `tree`
#[must_use]
pub fn build_graph(tree: Option<&TreeNode>) -> Graph {
    let mut graph = Graph::new();
    tree_to_graph(tree, &mut graph);
    graph
}
