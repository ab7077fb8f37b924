//! Scrape module - turning shelf pages into title lists
//!
//! - **document**: parsed HTML with CSS selection and attribute reads
//! - **collector**: keeps the non-empty title attributes of matched links
//! - **shelf**: fetches a shelf page through the session and collects it

pub mod collector;
pub mod document;
pub mod shelf;

pub use collector::{collect_titles, TitleQuery};
pub use document::PageDocument;
pub use shelf::scrape_shelf;
