//! Shared library for `rbviz`
//! Contains the tree model, graph conversion, rendering and viewer plumbing used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
