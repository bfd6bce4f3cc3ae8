//! Error types for the conversion pipeline.
//!
//! Malformed lines are not errors: they are collected on the
//! [`EnvDocument`](super::EnvDocument) and reported as warnings.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that end a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input file does not exist. Raised before anything is read or written.
    #[error("The .env file '{}' does not exist.", .path.display())]
    NotFound { path: PathBuf },

    /// Input exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output file could not be created or written.
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// `true` for errors that must abort the caller rather than be reported
    /// and swallowed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Path of the file the failed step was operating on.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}
