//! Queryable HTML tree
//!
//! Thin wrapper over `scraper` exposing only what title extraction needs:
//! parse a page, select by CSS, read an attribute.

use scraper::{Html, Selector};

use crate::core::{Result, ShelfError};

/// Parsed HTML of one fetched page
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Parse a response body; malformed markup is recovered, never rejected
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// Read `attribute` from every element matching `selector`, in document order
    ///
    /// Elements without the attribute yield `None`, so the result always has
    /// one entry per matched element.
    pub fn select_attr(&self, selector: &Selector, attribute: &str) -> Vec<Option<String>> {
        self.html
            .select(selector)
            .map(|element| element.value().attr(attribute).map(str::to_string))
            .collect()
    }

}

/// Compile a CSS selector
pub fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ShelfError::selector(css, e))
}
