//! Domain layer: entities, publishing rules and repository contracts.
//!
//! Nothing in this module performs I/O. Storage is abstracted by the traits
//! in [`repositories`] and implemented in [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`entities`] - article records and their public projection
//! - [`publish_date`] - publish date parsing and the liveness predicate
//! - [`publish`] - partition of a record set and projection of live records
//! - [`sitemap`] - locating and touching the sitemap marker entry
//! - [`repositories`] - data access trait definitions
//!
//! # Publishing Flow
//!
//! 1. [`repositories::ArticleRepository`] loads the full record set
//! 2. [`publish::PublishPartition`] splits it at the current time
//! 3. Live records are projected to [`entities::PublicArticle`]
//! 4. [`repositories::PublicArticleRepository`] replaces the public feed
//! 5. [`sitemap::touch`] refreshes the marker entry's lastmod

pub mod entities;
pub mod publish;
pub mod publish_date;
pub mod repositories;
pub mod sitemap;

pub use publish::{PublishPartition, ScheduledArticle, publish_at};
pub use publish_date::{ArticleStatus, PublishDate};
