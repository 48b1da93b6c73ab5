//! Binary tree nodes as read from the JSON input
//!
//! A document is either `null` (empty tree) or an object of the shape
//! `{"data": <label>, "color": "r"|"b", "left": <node|null>, "right": <node|null>}`.
//! Coloring is taken at face value; nothing here checks red-black rules.

use crate::core::error::{Result, VizError};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Node color. Only the exact string `"r"` is red; every other value is black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum Color {
    /// Red node
    Red,
    /// Black node (also the fallback for unrecognised colors)
    #[default]
    Black,
}

impl From<Value> for Color {
    fn from(value: Value) -> Self {
        match value.as_str() {
            Some("r") => Self::Red,
            _ => Self::Black,
        }
    }
}

impl Color {
    /// Graphviz/CSS color name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One internal node of the tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TreeNode {
    /// Display label (string or number in the source JSON)
    #[serde(default)]
    pub data: Value,
    /// Node color
    #[serde(default)]
    pub color: Color,
    /// Left child, `None` for an empty leaf
    #[serde(default)]
    pub left: Option<Box<TreeNode>>,
    /// Right child, `None` for an empty leaf
    #[serde(default)]
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Create a childless node
    #[must_use]
    pub fn new(data: impl Into<Value>, color: Color) -> Self {
        Self {
            data: data.into(),
            color,
            left: None,
            right: None,
        }
    }

    /// Builder-style setter for the left child
    #[must_use]
    pub fn with_left(mut self, child: Self) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Builder-style setter for the right child
    #[must_use]
    pub fn with_right(mut self, child: Self) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    /// Label text as it appears in the rendered graph
    ///
    /// Strings are used verbatim, numbers and booleans keep their JSON text,
    /// a missing label renders empty.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.data {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    /// Numeric value of the label, if it has one
    #[must_use]
    pub fn numeric_label(&self) -> Option<f64> {
        match &self.data {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Whether this node is red
    #[must_use]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    /// Children in traversal order (left, then right)
    #[must_use]
    pub fn children(&self) -> [Option<&Self>; 2] {
        [self.left.as_deref(), self.right.as_deref()]
    }

    /// All internal nodes of this subtree in pre-order (node, left subtree, right subtree)
    ///
    /// Uses an explicit stack, so degenerate chains of any depth are fine.
    #[must_use]
    pub fn preorder(&self) -> Vec<&Self> {
        let mut order = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        order
    }

    /// Number of internal nodes in this subtree
    #[must_use]
    pub fn size(&self) -> usize {
        self.preorder().len()
    }

    /// Number of empty child slots in this subtree
    #[must_use]
    pub fn null_children(&self) -> usize {
        self.preorder()
            .into_iter()
            .flat_map(Self::children)
            .filter(Option::is_none)
            .count()
    }

    /// Height in internal nodes (a lone node has height 1)
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children().into_iter().flatten().map(|c| (c, depth + 1)));
        }
        height
    }
}

impl Drop for TreeNode {
    // the derived drop recurses once per level; unlink children onto a heap stack instead
    fn drop(&mut self) {
        let mut pending: Vec<Box<Self>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Deserialize a document without serde_json's nesting limit
///
/// Every tree level costs two JSON nesting levels (the node object and the
/// `left`/`right` value), so the default limit of 128 would cap trees at ~64
/// levels. `serde_stacker` grows the stack on demand instead.
fn from_json_text(text: &str) -> serde_json::Result<Option<TreeNode>> {
    let mut json = serde_json::Deserializer::from_str(text);
    json.disable_recursion_limit();
    let tree = Option::<TreeNode>::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(tree)
}

/// Parse a tree document from JSON text. `null` yields `Ok(None)`.
///
/// # Errors
/// Returns [`VizError::Json`] if the text is not a tree document
pub fn parse_tree_json(text: &str) -> Result<Option<TreeNode>> {
    from_json_text(text).map_err(|source| VizError::Json {
        path: PathBuf::from("<inline>"),
        source,
    })
}

/// Read and parse a tree document from a file
///
/// # Errors
/// Returns [`VizError::Io`] if the file cannot be read and [`VizError::Json`]
/// if its contents are not a tree document
pub fn load_tree(path: &Path) -> Result<Option<TreeNode>> {
    let text = fs::read_to_string(path).map_err(|source| VizError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json_text(&text).map_err(|source| VizError::Json {
        path: path.to_path_buf(),
        source,
    })
}
