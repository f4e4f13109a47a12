//! Business logic services for the application layer.

pub mod publish_service;
pub mod sitemap_service;

pub use publish_service::{PublishService, PublishSummary};
pub use sitemap_service::{MarkerLookup, SitemapOutcome, SitemapService};
