//! JSON file implementation of the public article repository.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::entities::PublicArticle;
use crate::domain::repositories::PublicArticleRepository;
use crate::error::PublishError;
use crate::utils::atomic_write::replace_file;

/// Writes the public feed as a pretty-printed JSON array.
///
/// Output uses two-space indentation and no trailing newline. The file is
/// replaced as a whole on every call.
pub struct JsonPublicArticleRepository {
    path: PathBuf,
}

impl JsonPublicArticleRepository {
    /// Creates a repository writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PublicArticleRepository for JsonPublicArticleRepository {
    async fn replace_all(&self, articles: &[PublicArticle]) -> Result<(), PublishError> {
        let encoded =
            serde_json::to_vec_pretty(articles).map_err(|e| PublishError::encode(&self.path, e))?;

        replace_file(&self.path, &encoded)
            .await
            .map_err(|e| PublishError::io(&self.path, e))
    }
}
