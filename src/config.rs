//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the run starts.
//! Every value has a default matching the standard site layout, so a bare
//! invocation from the site root needs no configuration at all.
//!
//! ## Site Layout
//!
//! ```text
//! <SITE_ROOT>/
//! ├── data/
//! │   ├── database.json   # full content database (input)
//! │   └── articles.json   # public feed (output)
//! └── sitemap.xml         # lastmod of the marker page is refreshed
//! ```
//!
//! ## Optional Variables
//!
//! - `SITE_ROOT` - Directory relative paths resolve against (default: `.`)
//! - `DATABASE_PATH` - Content database (default: `data/database.json`)
//! - `PUBLIC_ARTICLES_PATH` - Public feed (default: `data/articles.json`)
//! - `SITEMAP_PATH` - Sitemap (default: `sitemap.xml`)
//! - `BASE_URL` - Site base URL (default: `https://www.baowanreview.com`)
//! - `SITEMAP_PAGE` - Page whose sitemap lastmod is refreshed, leading `/` ignored (default: `insights.html`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use url::Url;

use crate::utils::site_url::{page_url, parse_base_url};

pub const DEFAULT_DATABASE_PATH: &str = "data/database.json";
pub const DEFAULT_PUBLIC_ARTICLES_PATH: &str = "data/articles.json";
pub const DEFAULT_SITEMAP_PATH: &str = "sitemap.xml";
pub const DEFAULT_BASE_URL: &str = "https://www.baowanreview.com";
pub const DEFAULT_SITEMAP_PAGE: &str = "insights.html";

/// Publishing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory that relative paths below are resolved against.
    pub site_root: PathBuf,
    pub database_path: PathBuf,
    pub public_articles_path: PathBuf,
    pub sitemap_path: PathBuf,
    pub base_url: String,
    /// Page whose `<lastmod>` is refreshed on every run.
    pub sitemap_page: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            public_articles_path: PathBuf::from(DEFAULT_PUBLIC_ARTICLES_PATH),
            sitemap_path: PathBuf::from(DEFAULT_SITEMAP_PATH),
            base_url: DEFAULT_BASE_URL.to_string(),
            sitemap_page: DEFAULT_SITEMAP_PAGE.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Default configuration for a site rooted at `root`.
    pub fn for_site(root: impl Into<PathBuf>) -> Self {
        Self {
            site_root: root.into(),
            ..Self::default()
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// Unset variables fall back to the defaults of [`Config::default`].
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            site_root: env_path("SITE_ROOT").unwrap_or(defaults.site_root),
            database_path: env_path("DATABASE_PATH").unwrap_or(defaults.database_path),
            public_articles_path: env_path("PUBLIC_ARTICLES_PATH")
                .unwrap_or(defaults.public_articles_path),
            sitemap_path: env_path("SITEMAP_PATH").unwrap_or(defaults.sitemap_path),
            base_url: env::var("BASE_URL").unwrap_or(defaults.base_url),
            sitemap_page: env::var("SITEMAP_PAGE").unwrap_or(defaults.sitemap_page),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `base_url` is not an absolute HTTP(S) URL
    /// - `sitemap_page` is empty or contains whitespace
    /// - any of the file paths is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        parse_base_url(&self.base_url)
            .with_context(|| format!("BASE_URL is invalid: '{}'", self.base_url))?;

        let page = self.sitemap_page.trim_start_matches('/');
        if page.is_empty() || page.chars().any(char::is_whitespace) {
            anyhow::bail!(
                "SITEMAP_PAGE must be a non-empty page path without spaces, got '{}'",
                self.sitemap_page
            );
        }

        for (name, path) in [
            ("DATABASE_PATH", &self.database_path),
            ("PUBLIC_ARTICLES_PATH", &self.public_articles_path),
            ("SITEMAP_PATH", &self.sitemap_path),
        ] {
            if path.as_os_str().is_empty() {
                anyhow::bail!("{name} must not be empty");
            }
        }

        Ok(())
    }

    /// Resolved location of the content database.
    pub fn database_file(&self) -> PathBuf {
        self.resolve(&self.database_path)
    }

    /// Resolved location of the public article feed.
    pub fn public_articles_file(&self) -> PathBuf {
        self.resolve(&self.public_articles_path)
    }

    /// Resolved location of the sitemap.
    pub fn sitemap_file(&self) -> PathBuf {
        self.resolve(&self.sitemap_path)
    }

    /// Expected `<loc>` of the sitemap marker entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or page is invalid.
    pub fn sitemap_locator(&self) -> Result<Url> {
        let base = parse_base_url(&self.base_url)?;
        Ok(page_url(&base, &self.sitemap_page)?)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Site root: {}", self.site_root.display());
        tracing::info!("  Database: {}", self.database_file().display());
        tracing::info!("  Public feed: {}", self.public_articles_file().display());
        tracing::info!("  Sitemap: {}", self.sitemap_file().display());
        match self.sitemap_locator() {
            Ok(locator) => tracing::info!("  Sitemap marker: {}", locator),
            Err(_) => tracing::info!("  Sitemap marker: {}", self.sitemap_page),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.site_root.join(path)
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key).map(PathBuf::from)
}

/// Loads and validates configuration from environment variables.
///
/// `site_root`, when given, replaces `SITE_ROOT` before validation. Both
/// binaries pass their `--root` flag here.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env(site_root: Option<PathBuf>) -> Result<Config> {
    let mut config = Config::from_env();
    if let Some(root) = site_root {
        config.site_root = root;
    }
    config.validate()?;
    Ok(config)
}
