//! Rendering a run report for the terminal

use crate::core::{OutputFormat, Result, ShelfScrape};
use crate::run::RunReport;

/// Render `report` in the requested format
pub fn render(report: &RunReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(report)),
        OutputFormat::Lines => Ok(render_lines(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
    }
}

fn render_plain(report: &RunReport) -> String {
    let mut out = format!("{}\n", report.run_date);
    for scrape in [&report.read, &report.to_read] {
        out.push_str(&format!("\nFinal Result: {}\n", quoted_list(&scrape.titles)));
    }
    out
}

/// `["A", "B"]`, with titles printed as-is rather than escaped
fn quoted_list(titles: &[String]) -> String {
    let quoted: Vec<String> = titles.iter().map(|t| format!("\"{}\"", t)).collect();
    format!("[{}]", quoted.join(", "))
}

fn render_lines(report: &RunReport) -> String {
    let mut out = format!("Run date: {}\n", report.run_date);
    for scrape in [&report.read, &report.to_read] {
        out.push('\n');
        out.push_str(&heading(scrape));
        for title in &scrape.titles {
            out.push_str(title);
            out.push('\n');
        }
    }
    out
}

fn heading(scrape: &ShelfScrape) -> String {
    if scrape.is_degraded() {
        format!("{} ({}, HTTP {}):\n", scrape.shelf, scrape.len(), scrape.status)
    } else {
        format!("{} ({}):\n", scrape.shelf, scrape.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Shelf;

    fn report() -> RunReport {
        RunReport {
            run_date: "October 16, 2026.".to_string(),
            read: ShelfScrape {
                shelf: Shelf::Read,
                status: 200,
                titles: vec!["Dune".to_string(), "Emma".to_string()],
            },
            to_read: ShelfScrape {
                shelf: Shelf::ToRead,
                status: 404,
                titles: vec![],
            },
        }
    }

    #[test]
    fn test_render_plain() {
        let out = render(&report(), OutputFormat::Plain).unwrap();
        assert_eq!(
            out,
            "October 16, 2026.\n\nFinal Result: [\"Dune\", \"Emma\"]\n\nFinal Result: []\n"
        );
    }

    #[test]
    fn test_render_plain_keeps_combining_marks() {
        let mut report = report();
        report.read.titles = vec![
            "Les Mise\u{301}rables".to_string(),
            "Cien años de soledad".to_string(),
        ];

        let out = render(&report, OutputFormat::Plain).unwrap();
        assert!(out.contains(
            "Final Result: [\"Les Mise\u{301}rables\", \"Cien años de soledad\"]\n"
        ));
        assert!(!out.contains("\\u{"));
    }

    #[test]
    fn test_render_lines_flags_failed_shelf() {
        let out = render(&report(), OutputFormat::Lines).unwrap();
        assert_eq!(
            out,
            "Run date: October 16, 2026.\n\nRead (2):\nDune\nEmma\n\nTo-Read (0, HTTP 404):\n"
        );
    }

    #[test]
    fn test_render_json() {
        let out = render(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["run_date"], "October 16, 2026.");
        assert_eq!(value["read"]["shelf"], "read");
        assert_eq!(value["read"]["titles"][1], "Emma");
        assert_eq!(value["to_read"]["status"], 404);
    }
}
