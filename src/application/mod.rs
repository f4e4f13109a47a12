//! Application layer services implementing the publishing run.
//!
//! Services coordinate repository calls around the pure domain rules and are
//! generic over the repository traits, so they are unit-tested with mocks.
//!
//! # Available Services
//!
//! - [`services::publish_service::PublishService`] - regenerates the public article feed
//! - [`services::sitemap_service::SitemapService`] - maintains the sitemap marker's lastmod

pub mod services;
