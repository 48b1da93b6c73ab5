//! Core module: tree model, graph conversion, rendering and viewer plumbing

pub mod config;
pub mod convert;
pub mod error;
pub mod graph;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod validate;
pub mod viewer;

/// Returns the current version of the `rbviz` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
