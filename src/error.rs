// error.rs
use camino::{Utf8Path, Utf8PathBuf};
use std::io;
use thiserror::Error;

/// Error types for traversal operations
///
/// Any of these aborts the whole traversal: the caller receives the error
/// and no file descriptors.
#[derive(Error, Debug)]
pub enum WalkError {
    /// A stat, directory listing, canonicalization or open failed
    #[error("cannot access {path}: {source}")]
    Access {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    /// A spawned branch of the walk panicked or was cancelled
    #[error("Task failed: {0}")]
    Task(String),
}

impl WalkError {
    /// Wraps an I/O error with the path it occurred on
    pub fn access(path: impl Into<Utf8PathBuf>, source: io::Error) -> Self {
        Self::Access {
            path: path.into(),
            source,
        }
    }

    /// The path the failure occurred on, if any
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            Self::Access { path, .. } => Some(path),
            Self::Task(_) => None,
        }
    }

    /// Whether the underlying cause is a vanished or missing path
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Access { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
