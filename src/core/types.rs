//! Shared types used across shelf-scrape modules
//!
//! Contains the shelf identifiers, fetch outcomes, and per-shelf results.

use reqwest::StatusCode;
use serde::Serialize;
use std::fmt;

/// A named list of books on the tracking site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shelf {
    /// Books already read
    Read,
    /// Books queued up to read
    ToRead,
}

impl Shelf {
    /// Human-readable label used in log messages and output headings
    pub fn label(&self) -> &'static str {
        match self {
            Shelf::Read => "Read",
            Shelf::ToRead => "To-Read",
        }
    }
}

impl fmt::Display for Shelf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a single GET issued through a [`crate::session::Session`]
///
/// A non-200 response still carries its body; callers decide whether the
/// warning matters to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The server answered 200
    FetchedOk { body: String },
    /// The server answered with any other status
    FetchedWithWarning { body: String, status: StatusCode },
}

impl FetchOutcome {
    /// Classify a response by its status
    pub fn new(status: StatusCode, body: String) -> Self {
        if status == StatusCode::OK {
            Self::FetchedOk { body }
        } else {
            Self::FetchedWithWarning { body, status }
        }
    }

    /// Status code of the response
    pub fn status(&self) -> StatusCode {
        match self {
            Self::FetchedOk { .. } => StatusCode::OK,
            Self::FetchedWithWarning { status, .. } => *status,
        }
    }

    /// Response body, whatever the status
    pub fn body(&self) -> &str {
        match self {
            Self::FetchedOk { body } | Self::FetchedWithWarning { body, .. } => body,
        }
    }
}

/// Titles scraped from one shelf
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShelfScrape {
    /// Which shelf was scraped
    pub shelf: Shelf,
    /// HTTP status of the shelf page
    pub status: u16,
    /// Titles in document order, duplicates kept
    pub titles: Vec<String>,
}

impl ShelfScrape {
    /// True when the shelf page did not come back with a 200
    pub fn is_degraded(&self) -> bool {
        self.status != StatusCode::OK.as_u16()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
