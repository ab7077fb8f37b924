//! shelf-scrape - Export your book-tracking shelves as plain text lists
//!
//! Opens a browser-like HTTP session against a book-tracking site, visits the
//! "read" and "to-read" shelves, and collects the book titles from each page.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, logging setup, and error handling
//! - **Session**: Cookie-retaining HTTP client with a desktop User-Agent
//! - **Scrape**: HTML parsing and title collection per shelf
//! - **Run**: Coordinates one session and both shelves into a report
//! - **CLI**: Report rendering
//!
//! # Usage
//!
//! ```rust,no_run
//! use shelf_scrape::{run, Config};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = Config::load();
//!     let report = run(&config).await.unwrap();
//!     println!("{:?}", report.read.titles);
//! }
//! ```

pub mod cli;
pub mod core;
pub mod run;
pub mod scrape;
pub mod session;

// Re-export commonly used items
pub use core::{Config, Result, ShelfError};
pub use run::{run, RunReport};
pub use session::Session;
