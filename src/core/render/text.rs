//! Plain-text tree printer for terminals
//!
//! Draws each node as a `(label c)` box, where `c` is `r` or `b`. Levels sit
//! on alternating rows with `+---+` connectors between them:
//!
//! ```text
//!      (10 b)
//!   +-----+-----+
//! (5 r)      (20 r)
//! ```
//!
//! Empty leaves take no space. A subtree is as wide as its box plus both child
//! subtrees, and the box sits between them.

use crate::core::graph::{Graph, VertexId, VertexKind};
use crate::core::models::Color;

/// Generator for console tree drawings
pub struct TextGenerator;

/// Placement of one node box
struct Placed {
    depth: usize,
    start: usize,
    text: Vec<char>,
}

impl Placed {
    const fn center(&self) -> usize {
        self.start + self.text.len() / 2
    }
}

impl TextGenerator {
    /// Draw the tree rooted at the first vertex of `graph`
    ///
    /// Children are taken from each vertex's outgoing edges in insertion
    /// order (left, then right). An empty tree draws nothing.
    #[must_use]
    pub fn generate(graph: &Graph) -> String {
        let Some(root) = graph.vertices().first().filter(|v| v.spec.kind == VertexKind::Node)
        else {
            return String::new();
        };

        let slots = Self::child_slots(graph);
        let order = Self::preorder(root.id, &slots);

        let boxes: Vec<Vec<char>> = graph
            .vertices()
            .iter()
            .map(|v| Self::node_box(&v.spec.label, v.spec.fill))
            .collect();

        // subtree widths, children before parents
        let mut width = vec![0; graph.vertices().len()];
        for &(id, _) in order.iter().rev() {
            let [left, right] = slots[id.index()];
            width[id.index()] = boxes[id.index()].len()
                + left.map_or(0, |c| width[c.index()])
                + right.map_or(0, |c| width[c.index()]);
        }

        // left edge of each subtree, parents before children
        let mut offset = vec![0; graph.vertices().len()];
        let mut placed: Vec<Option<Placed>> = graph.vertices().iter().map(|_| None).collect();
        for &(id, depth) in &order {
            let [left, right] = slots[id.index()];
            let start = offset[id.index()] + left.map_or(0, |c| width[c.index()]);
            if let Some(left) = left {
                offset[left.index()] = offset[id.index()];
            }
            if let Some(right) = right {
                offset[right.index()] = start + boxes[id.index()].len();
            }
            placed[id.index()] = Some(Placed {
                depth,
                start,
                text: boxes[id.index()].clone(),
            });
        }

        let mut canvas = Canvas::default();
        for &(id, _) in &order {
            let Some(node) = &placed[id.index()] else {
                continue;
            };
            canvas.write(2 * node.depth, node.start, &node.text);

            for child in slots[id.index()].into_iter().flatten() {
                if let Some(child) = &placed[child.index()] {
                    canvas.connect(2 * node.depth + 1, node.center(), child.center());
                }
            }
        }
        canvas.finish()
    }

    /// Left and right node children of every vertex; leaf children are `None`
    fn child_slots(graph: &Graph) -> Vec<[Option<VertexId>; 2]> {
        let mut slots = vec![[None; 2]; graph.vertices().len()];
        let mut filled = vec![0_usize; graph.vertices().len()];
        for edge in graph.edges() {
            let from = edge.from.index();
            let Some(slot) = slots.get_mut(from).and_then(|s| s.get_mut(filled[from])) else {
                continue;
            };
            filled[from] += 1;
            let is_node = graph
                .vertex(edge.to)
                .is_some_and(|v| v.spec.kind == VertexKind::Node);
            if is_node {
                *slot = Some(edge.to);
            }
        }
        slots
    }

    /// Node vertices reachable from `root` in pre-order, with their depth
    fn preorder(root: VertexId, slots: &[[Option<VertexId>; 2]]) -> Vec<(VertexId, usize)> {
        let mut order = Vec::new();
        let mut stack = vec![(root, 0)];
        while let Some((id, depth)) = stack.pop() {
            order.push((id, depth));
            let [left, right] = slots[id.index()];
            stack.extend(right.map(|c| (c, depth + 1)));
            stack.extend(left.map(|c| (c, depth + 1)));
        }
        order
    }

    /// `(label c)` with line breaks flattened so every box stays on one row
    fn node_box(label: &str, fill: Color) -> Vec<char> {
        let color = match fill {
            Color::Red => 'r',
            Color::Black => 'b',
        };
        let label: String = label
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        format!("({label} {color})").chars().collect()
    }
}

/// Rows of characters that grow to the right as content is written
#[derive(Default)]
struct Canvas {
    rows: Vec<Vec<char>>,
}

impl Canvas {
    fn put(&mut self, row: usize, col: usize, ch: char) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let line = &mut self.rows[row];
        if line.len() <= col {
            line.resize(col + 1, ' ');
        }
        line[col] = ch;
    }

    fn write(&mut self, row: usize, col: usize, text: &[char]) {
        for (i, &ch) in text.iter().enumerate() {
            self.put(row, col + i, ch);
        }
    }

    /// Dash run between two columns with `+` at both ends
    fn connect(&mut self, row: usize, a: usize, b: usize) {
        let (from, to) = (a.min(b), a.max(b));
        for col in from..=to {
            let existing = self.rows.get(row).and_then(|r| r.get(col)).copied();
            if existing != Some('+') {
                self.put(row, col, '-');
            }
        }
        self.put(row, from, '+');
        self.put(row, to, '+');
    }

    fn finish(self) -> String {
        let mut output = String::new();
        for row in self.rows {
            output.extend(row);
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::convert::build_graph;
    use crate::core::models::TreeNode;

    fn draw(tree: Option<&TreeNode>) -> String {
        TextGenerator::generate(&build_graph(tree))
    }

    #[test]
    fn test_empty_tree_draws_nothing() {
        assert_eq!(draw(None), "");
    }

    #[test]
    fn test_single_node() {
        assert_eq!(draw(Some(&TreeNode::new(7, Color::Black))), "(7 b)\n");
    }

    #[test]
    fn test_two_children() {
        let tree = TreeNode::new(10, Color::Black)
            .with_left(TreeNode::new(5, Color::Red))
            .with_right(TreeNode::new(20, Color::Red));
        assert_eq!(
            draw(Some(&tree)),
            "     (10 b)\n  +-----+-----+\n(5 r)      (20 r)\n"
        );
    }

    #[test]
    fn test_right_child_only() {
        let tree = TreeNode::new(1, Color::Black).with_right(TreeNode::new(2, Color::Red));
        assert_eq!(draw(Some(&tree)), "(1 b)\n  +----+\n     (2 r)\n");
    }

    #[test]
    fn test_left_child_only() {
        let tree = TreeNode::new(2, Color::Black).with_left(TreeNode::new(1, Color::Red));
        assert_eq!(draw(Some(&tree)), "     (2 b)\n  +----+\n(1 r)\n");
    }

    #[test]
    fn test_grandchildren_sit_under_their_parent() {
        let tree = TreeNode::new(4, Color::Black)
            .with_left(TreeNode::new(2, Color::Red).with_left(TreeNode::new(1, Color::Black)))
            .with_right(TreeNode::new(6, Color::Black));
        let drawing = draw(Some(&tree));
        let rows: Vec<&str> = drawing.lines().collect();

        assert_eq!(rows.len(), 5);
        assert!(rows[2].starts_with("     (2 r)"));
        assert!(rows[2].ends_with("(6 b)"));
        assert_eq!(rows[4], "(1 b)");
    }

    #[test]
    fn test_multiline_labels_are_flattened() {
        let drawing = draw(Some(&TreeNode::new("a\nb", Color::Red)));
        assert_eq!(drawing, "(a b r)\n");
    }
}
