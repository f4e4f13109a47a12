//! Error type shared by repositories, services and the build pipeline.
//!
//! Only conditions that abort a run are represented here. Permissive cases
//! (an unparseable publish date, a sitemap without the expected marker) are
//! not errors: they are reported through logs and the build report instead.

use std::io;
use std::path::{Path, PathBuf};

/// Fatal failure of a publishing run.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The content database does not exist.
    #[error("Database file not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    /// The content database exists but is not a JSON array of article objects.
    #[error("Malformed database file {}: {source}", path.display())]
    MalformedSource {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The public article feed could not be encoded.
    #[error("Failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PublishError {
    pub fn source_missing(path: impl AsRef<Path>) -> Self {
        Self::SourceMissing {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn malformed(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::MalformedSource {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn encode(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Encode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Process exit status for this failure.
    ///
    /// Every fatal condition terminates the run with status 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
