//! Configuration management for shelf-scrape
//!
//! Supports environment variables, config files, and runtime overrides.
//! Priority: CLI args > env vars > config file > defaults.
//!
//! Config file location: ~/.config/shelf-scrape/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, ShelfError};

/// Desktop Chrome identification; the site rejects the reqwest default with a 403.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Table cell with classes `field` and `title`, containing the book link
pub const DEFAULT_TITLE_SELECTOR: &str = "td.field.title a";

/// Attribute on the book link holding the full title
pub const DEFAULT_TITLE_ATTRIBUTE: &str = "title";

/// Log file written (and truncated) on every run
pub const DEFAULT_LOG_FILE: &str = "get_titles.log";

/// Main configuration for shelf-scrape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site and shelf URLs
    #[serde(default)]
    pub site: SiteConfig,
    /// HTTP client identity
    #[serde(default)]
    pub http: HttpConfig,
    /// Which elements and attribute hold the titles
    #[serde(default)]
    pub extract: ExtractConfig,
    /// Log sink configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Output rendering
    #[serde(default)]
    pub output: OutputConfig,
}

/// The three URLs visited on every run
///
/// None of these are validated; a malformed URL surfaces as an HTTP error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Landing page used to open the session
    pub base_url: String,
    /// The "read" shelf
    pub read_shelf_url: String,
    /// The "to-read" shelf
    pub to_read_shelf_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.goodreads.com".to_string(),
            read_shelf_url: String::new(),
            to_read_shelf_url: String::new(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent sent with every request
    pub user_agent: String,
    /// Request timeout in seconds; unset leaves the client default in place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

/// Title extraction query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// CSS selector matching one element per book
    pub selector: String,
    /// Attribute read from each matched element
    pub attribute: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_TITLE_SELECTOR.to_string(),
            attribute: DEFAULT_TITLE_ATTRIBUTE.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level filter used when RUST_LOG is not set
    pub level: String,
    /// Log file, truncated at start; `None` logs to stderr
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

/// How the run report is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Run date followed by one `Final Result: [...]` line per shelf
    #[default]
    Plain,
    /// One title per line under a heading per shelf
    Lines,
    /// Pretty-printed JSON
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shelf-scrape")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        let mut config = Self::load_from_path(&Self::config_file()).unwrap_or_default();
        config.apply_env();
        config
    }

    /// Load configuration from a specific file, then apply env overrides
    pub fn load_with_file(path: &Path) -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut config = Self::load_from_path(path)?;
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from file only
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ShelfError::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ShelfError::config(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ShelfError::config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to the default config file
    pub fn save(&self) -> Result<PathBuf> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| ShelfError::config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ShelfError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| ShelfError::config(format!("Failed to write config: {}", e)))?;

        Ok(config_path)
    }

    /// Apply `SHELF_*` environment overrides
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup; empty values are ignored
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("SHELF_BASE_URL") {
            self.site.base_url = v;
        }
        if let Some(v) = get("SHELF_READ_URL") {
            self.site.read_shelf_url = v;
        }
        if let Some(v) = get("SHELF_TO_READ_URL") {
            self.site.to_read_shelf_url = v;
        }
        if let Some(v) = get("SHELF_USER_AGENT") {
            self.http.user_agent = v;
        }
        if let Some(v) = get("SHELF_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = get("SHELF_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(v));
        }
    }

    /// Generate a default config file content for display
    pub fn default_config_toml() -> String {
        toml::to_string_pretty(&Config::default())
            .unwrap_or_else(|_| String::from("# Error generating config"))
    }
}
