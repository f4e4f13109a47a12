//! Filesystem implementation of the sitemap repository.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::repositories::SitemapRepository;
use crate::error::PublishError;
use crate::utils::atomic_write::replace_file;

/// Reads and writes the sitemap as UTF-8 text.
pub struct FileSitemapRepository {
    path: PathBuf,
}

impl FileSitemapRepository {
    /// Creates a repository for the sitemap at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SitemapRepository for FileSitemapRepository {
    async fn read(&self) -> Result<Option<String>, PublishError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PublishError::io(&self.path, e)),
        }
    }

    async fn write(&self, content: &str) -> Result<(), PublishError> {
        replace_file(&self.path, content.as_bytes())
            .await
            .map_err(|e| PublishError::io(&self.path, e))
    }
}
