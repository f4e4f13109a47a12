//! One end-to-end publishing run.
//!
//! Wires the file-backed repositories from [`Config`] into the services and
//! executes the steps in order:
//!
//! 1. Load the content database (fatal if missing or malformed)
//! 2. Replace the public feed with the live articles
//! 3. Refresh the sitemap marker's lastmod (never fatal when absent)

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::services::{PublishService, PublishSummary, SitemapOutcome, SitemapService};
use crate::config::Config;
use crate::error::PublishError;
use crate::infrastructure::persistence::{
    FileSitemapRepository, JsonArticleRepository, JsonPublicArticleRepository,
};

/// Per-run options that are not part of the site configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Time the articles are evaluated against. The sitemap date is its UTC day.
    pub now: DateTime<Utc>,
    pub skip_sitemap: bool,
}

impl RunOptions {
    /// Options for a regular run at the current time.
    pub fn now() -> Self {
        Self {
            now: Utc::now(),
            skip_sitemap: false,
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub publish: PublishSummary,
    /// `None` when the sitemap step was skipped.
    pub sitemap: Option<SitemapOutcome>,
}

/// Runs the publishing step with the given configuration.
///
/// # Errors
///
/// Returns the first fatal [`PublishError`]. When the database is missing or
/// malformed, neither the feed nor the sitemap is touched.
pub async fn run(config: &Config, options: RunOptions) -> Result<BuildReport, PublishError> {
    tracing::info!("Starting daily build");

    let publish_service = PublishService::new(
        Arc::new(JsonArticleRepository::new(config.database_file())),
        Arc::new(JsonPublicArticleRepository::new(config.public_articles_file())),
    );

    let publish = publish_service.publish(options.now).await?;
    tracing::info!("Updated {}", config.public_articles_file().display());

    let sitemap = if options.skip_sitemap {
        tracing::info!("Sitemap update skipped");
        None
    } else {
        let sitemap_service = SitemapService::new(
            Arc::new(FileSitemapRepository::new(config.sitemap_file())),
            config.sitemap_page.clone(),
        );
        Some(sitemap_service.touch(options.now.date_naive()).await?)
    };

    tracing::info!("Build complete");

    Ok(BuildReport { publish, sitemap })
}
