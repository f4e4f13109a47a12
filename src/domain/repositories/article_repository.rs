//! Repository trait for reading the content database.

use crate::domain::entities::Article;
use crate::error::PublishError;
use async_trait::async_trait;

/// Source of the full article record set.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonArticleRepository`] - JSON file on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Loads every article, in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::SourceMissing`] if the database does not exist.
    /// Returns [`PublishError::MalformedSource`] if it is not a JSON array of objects.
    /// Returns [`PublishError::Io`] on other read failures.
    async fn load_all(&self) -> Result<Vec<Article>, PublishError>;
}
