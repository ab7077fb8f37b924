//! shelf-scrape - Export your book-tracking shelves
//!
//! Main entry point for the CLI application.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shelf_scrape::core::{logging, OutputFormat};
use shelf_scrape::{cli, Config};

/// shelf-scrape - Export the titles on your "read" and "to-read" shelves
#[derive(Parser, Debug)]
#[command(name = "shelf-scrape")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Site landing page used to open the session
    #[arg(long)]
    base_url: Option<String>,

    /// URL of the "read" shelf
    #[arg(long)]
    read_url: Option<String>,

    /// URL of the "to-read" shelf
    #[arg(long)]
    to_read_url: Option<String>,

    /// User-Agent sent with every request
    #[arg(long)]
    user_agent: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum)]
    format: Option<OutputFormat>,

    /// Log file (truncated on every run)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log to stderr instead of a file
    #[arg(long, conflicts_with = "log_file")]
    stderr_log: bool,

    /// Log level filter when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,

    /// Print the default config file and exit
    #[arg(long)]
    print_config: bool,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", Config::default_config_toml());
        return Ok(());
    }

    if args.init_config {
        let path = Config::default().save()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    // Build configuration
    let mut config = match &args.config {
        Some(path) => Config::load_with_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::load(),
    };

    // Apply CLI overrides
    if let Some(url) = args.base_url {
        config.site.base_url = url;
    }
    if let Some(url) = args.read_url {
        config.site.read_shelf_url = url;
    }
    if let Some(url) = args.to_read_url {
        config.site.to_read_shelf_url = url;
    }
    if let Some(agent) = args.user_agent {
        config.http.user_agent = agent;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if args.stderr_log {
        config.logging.file = None;
    } else if let Some(file) = args.log_file {
        config.logging.file = Some(file);
    }

    logging::init(&config.logging)?;

    let report = shelf_scrape::run(&config).await?;
    print!("{}", cli::render(&report, config.output.format)?);

    Ok(())
}
