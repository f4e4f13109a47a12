//! Sitemap lastmod maintenance.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::repositories::SitemapRepository;
use crate::domain::sitemap::{self, SitemapEntry, SitemapTouch};
use crate::error::PublishError;

/// What happened to the sitemap during a touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapOutcome {
    /// The marker's lastmod was changed from `previous`.
    Updated { previous: String },
    /// The marker already had today's date; the file was not rewritten.
    AlreadyCurrent,
    /// The sitemap has no entry for the page; the file was left alone.
    MarkerNotFound,
    /// There is no sitemap file.
    SitemapMissing,
}

/// State of the marker entry as found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerLookup {
    Found(SitemapEntry),
    NotFound,
    SitemapMissing,
}

/// Service that keeps the sitemap marker's lastmod in step with publishing.
pub struct SitemapService<S: SitemapRepository> {
    repository: Arc<S>,
    page: String,
}

impl<S: SitemapRepository> SitemapService<S> {
    /// Creates a service touching the entry for `page` (e.g. `insights.html`).
    pub fn new(repository: Arc<S>, page: impl Into<String>) -> Self {
        Self {
            repository,
            page: page.into(),
        }
    }

    /// Sets the marker's lastmod to `today`.
    ///
    /// A missing sitemap or a sitemap without the marker is reported in the
    /// outcome and logged, never treated as a failure.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Io`] if the sitemap exists but cannot be read
    /// or written.
    pub async fn touch(&self, today: NaiveDate) -> Result<SitemapOutcome, PublishError> {
        let Some(text) = self.repository.read().await? else {
            tracing::warn!("Sitemap not found, skipping lastmod update");
            return Ok(SitemapOutcome::SitemapMissing);
        };

        match sitemap::touch(&text, &self.page, today) {
            SitemapTouch::Updated { content, previous } => {
                self.repository.write(&content).await?;
                tracing::info!(
                    "Updated sitemap lastmod for {} ({} -> {})",
                    self.page,
                    previous,
                    today
                );
                Ok(SitemapOutcome::Updated { previous })
            }
            SitemapTouch::Unchanged => {
                tracing::info!("Sitemap lastmod for {} already current", self.page);
                Ok(SitemapOutcome::AlreadyCurrent)
            }
            SitemapTouch::MarkerNotFound => {
                tracing::warn!(
                    "Sitemap has no <loc>/<lastmod> entry for {}, left unchanged",
                    self.page
                );
                Ok(SitemapOutcome::MarkerNotFound)
            }
        }
    }

    /// Looks up the marker entry without modifying anything.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Io`] if the sitemap cannot be read.
    pub async fn inspect(&self) -> Result<MarkerLookup, PublishError> {
        let Some(text) = self.repository.read().await? else {
            return Ok(MarkerLookup::SitemapMissing);
        };

        Ok(match sitemap::find_marker(&text, &self.page) {
            Some(entry) => MarkerLookup::Found(entry),
            None => MarkerLookup::NotFound,
        })
    }
}
