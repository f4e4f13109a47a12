//! Repository trait definitions for the domain layer.
//!
//! The publishing pipeline only talks to storage through these traits.
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`ArticleRepository`] - content database (read-only)
//! - [`PublicArticleRepository`] - public article feed (replace-only)
//! - [`SitemapRepository`] - sitemap document
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod article_repository;
pub mod public_article_repository;
pub mod sitemap_repository;

pub use article_repository::ArticleRepository;
pub use public_article_repository::PublicArticleRepository;
pub use sitemap_repository::SitemapRepository;

#[cfg(test)]
pub use article_repository::MockArticleRepository;
#[cfg(test)]
pub use public_article_repository::MockPublicArticleRepository;
#[cfg(test)]
pub use sitemap_repository::MockSitemapRepository;
