//! CLI module - terminal-facing output
//!
//! Argument parsing lives in the binary; this module renders reports.

pub mod output;

pub use output::render;
