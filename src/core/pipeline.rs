//! End-to-end rendering of a loaded tree: graph, document and viewer URL

use crate::core::convert::build_graph;
use crate::core::graph::Graph;
use crate::core::models::TreeNode;
use crate::core::render::{DotGenerator, RenderFormat};
use crate::core::viewer::build_viewer_url;

/// Everything produced from one tree in a single pass
#[derive(Debug, Clone)]
pub struct Rendered {
    /// The converted graph
    pub graph: Graph,
    /// Graph serialized in the requested format
    pub document: String,
    /// Viewer URL; always carries the DOT serialization since the viewer is Graphviz-based
    pub url: String,
}

/// Convert `tree`, serialize it as `format`, and build the viewer URL on `base_url`
#[must_use]
pub fn render_tree(tree: Option<&TreeNode>, format: RenderFormat, base_url: &str) -> Rendered {
    let graph = build_graph(tree);
    let dot = DotGenerator::generate(&graph);
    let url = build_viewer_url(base_url, &dot);
    let document = match format {
        RenderFormat::Dot => dot,
        other => other.render(&graph),
    };
    Rendered {
        graph,
        document,
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Color;
    use crate::core::viewer::DEFAULT_VIEWER_URL;

    #[test]
    fn test_dot_document_matches_url_payload() {
        let tree = TreeNode::new(5, Color::Black);
        let rendered = render_tree(Some(&tree), RenderFormat::Dot, DEFAULT_VIEWER_URL);
        assert_eq!(rendered.graph.vertices().len(), 3);
        assert_eq!(
            rendered.url,
            build_viewer_url(DEFAULT_VIEWER_URL, &rendered.document)
        );
    }

    #[test]
    fn test_mermaid_document_keeps_dot_url() {
        let tree = TreeNode::new(5, Color::Black);
        let rendered = render_tree(Some(&tree), RenderFormat::Mermaid, DEFAULT_VIEWER_URL);
        assert!(rendered.document.starts_with("flowchart TD"));
        assert!(rendered.url.contains("graph%20G"));
    }
}
