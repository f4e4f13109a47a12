//! Article publishing service.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::PublishPartition;
use crate::domain::repositories::{ArticleRepository, PublicArticleRepository};
use crate::error::PublishError;

/// Counts describing one publishing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSummary {
    /// The time the articles were evaluated against.
    pub evaluated_at: DateTime<Utc>,
    pub total: usize,
    pub live: usize,
    pub scheduled: usize,
    /// Articles excluded because their publish date could not be read.
    pub invalid_dates: usize,
    pub next_publication: Option<DateTime<Utc>>,
}

/// Service that regenerates the public article feed.
///
/// Loads the full content database, keeps the articles that are live at the
/// given time and replaces the public feed with their projection.
pub struct PublishService<A: ArticleRepository, P: PublicArticleRepository> {
    article_repository: Arc<A>,
    public_repository: Arc<P>,
}

impl<A: ArticleRepository, P: PublicArticleRepository> PublishService<A, P> {
    /// Creates a new publish service.
    pub fn new(article_repository: Arc<A>, public_repository: Arc<P>) -> Self {
        Self {
            article_repository,
            public_repository,
        }
    }

    /// Publishes every article that is live at `now`.
    ///
    /// Articles with an unreadable publish date are left out and reported
    /// with a warning each; they never fail the run.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::SourceMissing`] or [`PublishError::MalformedSource`]
    /// if the database cannot be loaded. Nothing is written in that case.
    ///
    /// Returns [`PublishError::Io`] or [`PublishError::Encode`] if the feed
    /// cannot be written.
    pub async fn publish(&self, now: DateTime<Utc>) -> Result<PublishSummary, PublishError> {
        let articles = self.article_repository.load_all().await?;
        tracing::info!("Loaded {} articles from database", articles.len());

        let partition = PublishPartition::at(now, &articles);

        for article in &partition.invalid {
            let raw = article
                .publish_date_value()
                .map(ToString::to_string)
                .unwrap_or_default();
            tracing::warn!(
                "Article {} has an unreadable publish date {}, leaving it unpublished",
                article.id_label(),
                raw
            );
        }

        tracing::info!(
            "{} articles are live as of {}",
            partition.live.len(),
            now.to_rfc3339_opts(SecondsFormat::Millis, true)
        );

        let public = partition.project();
        self.public_repository.replace_all(&public).await?;

        let summary = PublishSummary {
            evaluated_at: now,
            total: partition.total(),
            live: partition.live.len(),
            scheduled: partition.scheduled.len(),
            invalid_dates: partition.invalid.len(),
            next_publication: partition.next_publication(),
        };

        if let Some(next) = summary.next_publication {
            tracing::info!(
                "{} articles scheduled, next goes live at {}",
                summary.scheduled,
                next.to_rfc3339_opts(SecondsFormat::Secs, true)
            );
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Article;
    use crate::domain::repositories::{MockArticleRepository, MockPublicArticleRepository};
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn sample_articles() -> Vec<Article> {
        serde_json::from_value(json!([
            { "id": 1, "title": "Undated" },
            { "id": 2, "title": "Future", "publishDate": "2099-01-01" },
            { "id": 3, "title": "Past", "publishDate": "2000-01-01" },
            { "id": 4, "title": "Broken", "publishDate": "someday" }
        ]))
        .unwrap()
    }

    #[tokio::test]
    async fn test_publish_writes_live_articles() {
        let mut mock_articles = MockArticleRepository::new();
        let mut mock_public = MockPublicArticleRepository::new();

        mock_articles
            .expect_load_all()
            .times(1)
            .returning(|| Ok(sample_articles()));

        mock_public
            .expect_replace_all()
            .withf(|public| {
                let ids: Vec<_> = public.iter().map(|p| p.id.clone().flatten()).collect();
                ids == vec![Some(json!(1)), Some(json!(3))]
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = PublishService::new(Arc::new(mock_articles), Arc::new(mock_public));

        let summary = service.publish(now()).await.unwrap();

        assert_eq!(
            summary,
            PublishSummary {
                evaluated_at: now(),
                total: 4,
                live: 2,
                scheduled: 1,
                invalid_dates: 1,
                next_publication: Some(Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap()),
            }
        );
    }

    #[tokio::test]
    async fn test_publish_empty_database_writes_empty_feed() {
        let mut mock_articles = MockArticleRepository::new();
        let mut mock_public = MockPublicArticleRepository::new();

        mock_articles
            .expect_load_all()
            .times(1)
            .returning(|| Ok(Vec::new()));

        mock_public
            .expect_replace_all()
            .withf(|public| public.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let service = PublishService::new(Arc::new(mock_articles), Arc::new(mock_public));

        let summary = service.publish(now()).await.unwrap();

        assert_eq!(summary.total, 0);
        assert_eq!(summary.next_publication, None);
    }

    #[tokio::test]
    async fn test_publish_missing_source_writes_nothing() {
        let mut mock_articles = MockArticleRepository::new();
        let mut mock_public = MockPublicArticleRepository::new();

        mock_articles
            .expect_load_all()
            .times(1)
            .returning(|| Err(PublishError::source_missing("data/database.json")));

        mock_public.expect_replace_all().times(0);

        let service = PublishService::new(Arc::new(mock_articles), Arc::new(mock_public));

        let result = service.publish(now()).await;

        assert!(matches!(result, Err(PublishError::SourceMissing { .. })));
    }

    #[tokio::test]
    async fn test_publish_malformed_source_writes_nothing() {
        let mut mock_articles = MockArticleRepository::new();
        let mut mock_public = MockPublicArticleRepository::new();

        mock_articles.expect_load_all().times(1).returning(|| {
            let err = serde_json::from_str::<Vec<Article>>("{ nope").unwrap_err();
            Err(PublishError::malformed("data/database.json", err))
        });

        mock_public.expect_replace_all().times(0);

        let service = PublishService::new(Arc::new(mock_articles), Arc::new(mock_public));

        let result = service.publish(now()).await;

        assert!(matches!(result, Err(PublishError::MalformedSource { .. })));
    }

    #[tokio::test]
    async fn test_publish_propagates_write_failure() {
        let mut mock_articles = MockArticleRepository::new();
        let mut mock_public = MockPublicArticleRepository::new();

        mock_articles
            .expect_load_all()
            .returning(|| Ok(sample_articles()));

        mock_public.expect_replace_all().times(1).returning(|_| {
            Err(PublishError::io(
                "data/articles.json",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ))
        });

        let service = PublishService::new(Arc::new(mock_articles), Arc::new(mock_public));

        let result = service.publish(now()).await;

        assert!(matches!(result, Err(PublishError::Io { .. })));
    }
}
