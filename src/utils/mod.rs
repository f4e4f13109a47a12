//! Helpers shared by configuration and infrastructure.
//!
//! - [`site_url`] - base URL parsing and page URL construction
//! - [`atomic_write`] - whole-file replacement via rename

pub mod atomic_write;
pub mod site_url;
