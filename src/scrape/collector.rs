//! Title collection from a parsed shelf page

use scraper::Selector;
use tracing::{info, warn};

use crate::core::{ExtractConfig, Result};
use crate::scrape::document::{parse_selector, PageDocument};

/// Compiled selector plus the attribute to read from each match
#[derive(Debug, Clone)]
pub struct TitleQuery {
    selector: Selector,
    attribute: String,
}

impl TitleQuery {
    pub fn new(selector: &str, attribute: impl Into<String>) -> Result<Self> {
        Ok(Self {
            selector: parse_selector(selector)?,
            attribute: attribute.into(),
        })
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }
}

impl TryFrom<&ExtractConfig> for TitleQuery {
    type Error = crate::core::ShelfError;

    fn try_from(config: &ExtractConfig) -> Result<Self> {
        Self::new(&config.selector, config.attribute.clone())
    }
}

/// Collect the non-empty attribute values of every matched element
///
/// Elements whose attribute is missing or empty are logged and skipped; the
/// result never holds placeholders and keeps document order and duplicates.
pub fn collect_titles(document: &PageDocument, query: &TitleQuery) -> Vec<String> {
    let mut titles = Vec::new();

    for value in document.select_attr(query.selector(), query.attribute()) {
        match value {
            Some(title) if !title.is_empty() => {
                info!("{}", title);
                titles.push(title);
            }
            _ => warn!("Found a book link, but it had no title attribute to scrape."),
        }
    }

    info!("Scraping complete. Found: {} books.", titles.len());
    titles
}
