//! CLI command handlers for `rbviz`.
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod config;
pub mod render;
