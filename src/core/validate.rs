//! Red-black invariant checks
//!
//! Rendering never depends on these; they back the `check` command and the
//! optional warning printed before rendering an invalid tree.

use crate::core::models::TreeNode;
use std::fmt;

/// A broken red-black (or search-tree) rule
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// The root is red
    RedRoot {
        /// Root label
        label: String,
    },
    /// A red node has a red child
    RedRed {
        /// Parent label
        parent: String,
        /// Child label
        child: String,
    },
    /// Paths from a node to its empty leaves pass through different numbers of black nodes
    BlackHeight {
        /// Label of the node whose subtrees disagree
        label: String,
        /// Black count through the left subtree
        left: usize,
        /// Black count through the right subtree
        right: usize,
    },
    /// Numeric labels are out of search-tree order
    Order {
        /// Label of the misplaced node
        label: String,
        /// Label of the ancestor it was compared against
        bound: String,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedRoot { label } => write!(f, "root '{label}' must be black"),
            Self::RedRed { parent, child } => {
                write!(f, "red node '{parent}' has red child '{child}'")
            }
            Self::BlackHeight { label, left, right } => write!(
                f,
                "node '{label}' has unequal black heights (left {left}, right {right})"
            ),
            Self::Order { label, bound } => {
                write!(f, "node '{label}' is on the wrong side of '{bound}'")
            }
        }
    }
}

/// Check every red-black rule and return all violations found
///
/// Search-tree order is only checked when every label is numeric.
/// An empty tree is valid.
#[must_use]
pub fn validate(tree: Option<&TreeNode>) -> Vec<Violation> {
    let Some(root) = tree else {
        return Vec::new();
    };

    let mut violations = Vec::new();
    if root.is_red() {
        violations.push(Violation::RedRoot {
            label: root.label(),
        });
    }
    check_colors(root, &mut violations);
    black_height(root, &mut violations);
    if all_numeric(root) {
        check_order(root, &mut violations);
    }
    violations
}

/// Convenience wrapper over [`validate`]
#[must_use]
pub fn is_valid(tree: Option<&TreeNode>) -> bool {
    validate(tree).is_empty()
}

fn check_colors(root: &TreeNode, out: &mut Vec<Violation>) {
    let mut stack = vec![(root, None::<&TreeNode>)];
    while let Some((node, parent)) = stack.pop() {
        if let Some(parent) = parent.filter(|p| p.is_red() && node.is_red()) {
            out.push(Violation::RedRed {
                parent: parent.label(),
                child: node.label(),
            });
        }
        stack.extend(node.right.as_deref().map(|c| (c, Some(node))));
        stack.extend(node.left.as_deref().map(|c| (c, Some(node))));
    }
}

/// Black count from `root` down to an empty leaf (the leaf counts as black).
/// On disagreement, records a violation and continues with the larger side.
/// Subtrees are finished left, right, then parent.
fn black_height(root: &TreeNode, out: &mut Vec<Violation>) -> usize {
    enum Step<'a> {
        Enter(Option<&'a TreeNode>),
        Exit(&'a TreeNode),
    }

    let mut heights = Vec::new();
    let mut steps = vec![Step::Enter(Some(root))];
    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(None) => heights.push(1),
            Step::Enter(Some(node)) => {
                steps.push(Step::Exit(node));
                steps.push(Step::Enter(node.right.as_deref()));
                steps.push(Step::Enter(node.left.as_deref()));
            }
            Step::Exit(node) => {
                let right = heights.pop().unwrap_or(1);
                let left = heights.pop().unwrap_or(1);
                if left != right {
                    out.push(Violation::BlackHeight {
                        label: node.label(),
                        left,
                        right,
                    });
                }
                heights.push(left.max(right) + usize::from(!node.is_red()));
            }
        }
    }
    heights.pop().unwrap_or(1)
}

fn all_numeric(root: &TreeNode) -> bool {
    root.preorder()
        .into_iter()
        .all(|node| node.numeric_label().is_some())
}

/// Tightest ancestor bound as (value, label)
type Bound = Option<(f64, String)>;

fn check_order(root: &TreeNode, out: &mut Vec<Violation>) {
    let mut stack: Vec<(&TreeNode, Bound, Bound)> = vec![(root, None, None)];
    while let Some((node, low, high)) = stack.pop() {
        let Some(value) = node.numeric_label() else {
            continue;
        };
        let label = node.label();

        let out_of_bounds = low
            .as_ref()
            .filter(|(bound, _)| value < *bound)
            .or_else(|| high.as_ref().filter(|(bound, _)| value > *bound));
        if let Some((_, bound)) = out_of_bounds {
            out.push(Violation::Order {
                label: label.clone(),
                bound: bound.clone(),
            });
        }

        if let Some(right) = node.right.as_deref() {
            stack.push((right, Some((value, label.clone())), high));
        }
        if let Some(left) = node.left.as_deref() {
            stack.push((left, low, Some((value, label))));
        }
    }
}
