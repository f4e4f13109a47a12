//! Repository trait for the public article feed.

use crate::domain::entities::PublicArticle;
use crate::error::PublishError;
use async_trait::async_trait;

/// Sink for the projected public articles.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonPublicArticleRepository`] - JSON file on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PublicArticleRepository: Send + Sync {
    /// Replaces the whole feed with `articles`.
    ///
    /// Previous content is discarded, never merged.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Encode`] or [`PublishError::Io`] if the feed
    /// cannot be written.
    async fn replace_all(&self, articles: &[PublicArticle]) -> Result<(), PublishError>;
}
