//! Data models for `rbviz`

pub mod tree;

pub use tree::{load_tree, parse_tree_json, Color, TreeNode};
