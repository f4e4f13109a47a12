//! JSON file implementation of the article repository.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::entities::Article;
use crate::domain::repositories::ArticleRepository;
use crate::error::PublishError;

/// Reads the content database from a JSON file holding an array of articles.
pub struct JsonArticleRepository {
    path: PathBuf,
}

impl JsonArticleRepository {
    /// Creates a repository reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArticleRepository for JsonArticleRepository {
    async fn load_all(&self) -> Result<Vec<Article>, PublishError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(PublishError::source_missing(&self.path));
            }
            Err(e) => return Err(PublishError::io(&self.path, e)),
        };

        serde_json::from_str(&raw).map_err(|e| PublishError::malformed(&self.path, e))
    }
}
