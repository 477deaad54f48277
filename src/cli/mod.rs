//! CLI layer
//!
//! Command-line interface using clap.

pub mod commands;
pub mod context;
pub mod output;

pub use context::ReviewContext;
pub use output::Output;
