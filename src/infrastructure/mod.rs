//! Infrastructure layer for external integrations.
//!
//! This layer implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - file-backed repository implementations

pub mod persistence;
