//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Article`] - a record of the content database, read-only to this crate
//! - [`PublicArticle`] - the reduced record published to the site
//!
//! Both keep the difference between an absent field and an explicit `null`
//! (see [`Field`]), so the published feed mirrors the database exactly.

pub mod article;
pub mod public_article;

pub use article::{Article, Field};
pub use public_article::PublicArticle;
