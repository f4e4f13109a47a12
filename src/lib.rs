//! # Site Publisher
//!
//! The daily publishing step of a static site. It reads the full content
//! database, keeps the articles whose publish date has passed, writes the
//! reduced public article feed and refreshes the sitemap's lastmod.
//!
//! ## Architecture
//!
//! The crate follows a layered layout:
//!
//! - **Domain Layer** ([`domain`]) - Article entities, publishing rules and repository traits
//! - **Application Layer** ([`application`]) - Services orchestrating one publishing run
//! - **Infrastructure Layer** ([`infrastructure`]) - File-backed repositories
//! - **Pipeline** ([`pipeline`]) - End-to-end run wired from [`config::Config`]
//!
//! ## Publishing Rules
//!
//! - An article without a publish date is live immediately
//! - An article with a publish date is live once that date has passed
//! - An article with an unreadable publish date stays unpublished (logged, never fatal)
//! - The public feed keeps the database order and is rewritten completely on each run
//!
//! ## Quick Start
//!
//! ```bash
//! # From the site root (data/database.json, sitemap.xml)
//! cargo run --release
//!
//! # Inspect what would go live
//! cargo run --bin admin -- articles scheduled
//! ```
//!
//! ## Configuration
//!
//! Paths and the base URL are loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod pipeline;
pub mod telemetry;
pub mod utils;

pub use config::Config;
pub use error::PublishError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the binaries
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        MarkerLookup, PublishService, PublishSummary, SitemapOutcome, SitemapService,
    };
    pub use crate::config::Config;
    pub use crate::domain::entities::{Article, PublicArticle};
    pub use crate::domain::{ArticleStatus, PublishDate, PublishPartition, publish_at};
    pub use crate::error::PublishError;
    pub use crate::pipeline::{BuildReport, RunOptions};
}
