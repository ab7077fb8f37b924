//! Shelf scraping: fetch one shelf page and collect its titles

use tracing::{error, info, info_span};

use crate::core::{FetchOutcome, Result, Shelf, ShelfScrape};
use crate::scrape::collector::{collect_titles, TitleQuery};
use crate::scrape::document::PageDocument;
use crate::session::Session;

/// Fetch `url` through `session` and collect the titles on it
///
/// A non-200 page is logged and scraped anyway; whatever it contains under
/// the selector (usually nothing) becomes the result.
pub async fn scrape_shelf(
    session: &Session,
    shelf: Shelf,
    url: &str,
    query: &TitleQuery,
) -> Result<ShelfScrape> {
    let outcome = session.fetch(url).await?;

    match &outcome {
        FetchOutcome::FetchedOk { .. } => info!(
            url,
            "Success! Correctly followed link to '{}' books shelf",
            shelf.label()
        ),
        FetchOutcome::FetchedWithWarning { status, .. } => {
            error!(url, shelf = shelf.label(), "Failed with error: {}", status.as_u16())
        }
    }

    let titles = {
        let span = info_span!("shelf", shelf = shelf.label());
        let _entered = span.enter();

        let document = PageDocument::parse(outcome.body());
        collect_titles(&document, query)
    };

    Ok(ShelfScrape {
        shelf,
        status: outcome.status().as_u16(),
        titles,
    })
}
