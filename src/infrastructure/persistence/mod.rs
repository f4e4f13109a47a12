//! File-backed repository implementations.
//!
//! Concrete implementations of the domain repository traits. The site keeps
//! its content as plain files next to the HTML, so each repository owns a
//! single path.
//!
//! # Repositories
//!
//! - [`JsonArticleRepository`] - content database (`data/database.json`)
//! - [`JsonPublicArticleRepository`] - public feed (`data/articles.json`)
//! - [`FileSitemapRepository`] - sitemap (`sitemap.xml`)

pub mod file_sitemap_repository;
pub mod json_article_repository;
pub mod json_public_article_repository;

pub use file_sitemap_repository::FileSitemapRepository;
pub use json_article_repository::JsonArticleRepository;
pub use json_public_article_repository::JsonPublicArticleRepository;
