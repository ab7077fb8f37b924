//! Run coordination: one session, both shelves, one report

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use tracing::info;

use crate::core::{Config, Result, Shelf, ShelfScrape};
use crate::scrape::{scrape_shelf, TitleQuery};
use crate::session::Session;

/// Everything a single run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Date this run was invoked, formatted by [`run_date_label`]
    pub run_date: String,
    pub read: ShelfScrape,
    pub to_read: ShelfScrape,
}

/// Format the invocation time as `"October 16, 2026."`
///
/// This is the time of the current run, not a previously recorded run: no
/// run history is kept anywhere.
pub fn run_date_label<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%B %-d, %Y.").to_string()
}

/// Open a session and scrape the "read" then the "to-read" shelf
pub async fn run(config: &Config) -> Result<RunReport> {
    let run_date = run_date_label(&chrono::Local::now());
    info!("Run date: {}", run_date);

    let query = TitleQuery::try_from(&config.extract)?;
    let session = Session::open(&config.site.base_url, &config.http).await?;

    let read = scrape_shelf(&session, Shelf::Read, &config.site.read_shelf_url, &query).await?;
    let to_read = scrape_shelf(
        &session,
        Shelf::ToRead,
        &config.site.to_read_shelf_url,
        &query,
    )
    .await?;

    Ok(RunReport {
        run_date,
        read,
        to_read,
    })
}
