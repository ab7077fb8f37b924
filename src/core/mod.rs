//! Core module - shared infrastructure for shelf-scrape
//!
//! This module contains foundational types, configuration, logging setup,
//! and error handling used throughout the crate.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{Config, ExtractConfig, HttpConfig, OutputFormat};
pub use error::{Result, ShelfError};
pub use types::*;
