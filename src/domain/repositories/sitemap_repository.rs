//! Repository trait for the sitemap document.

use crate::error::PublishError;
use async_trait::async_trait;

/// Raw text access to the sitemap.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileSitemapRepository`] - file on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SitemapRepository: Send + Sync {
    /// Reads the sitemap text.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(text))` if the sitemap exists
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Io`] on read failures other than absence.
    async fn read(&self) -> Result<Option<String>, PublishError>;

    /// Overwrites the sitemap with `content`.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Io`] on write failures.
    async fn write(&self, content: &str) -> Result<(), PublishError>;
}
