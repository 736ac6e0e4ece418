// lib.rs
#![forbid(unsafe_code)]

#[cfg(feature = "async")]
pub mod async_walk;
pub mod descriptor;
pub mod error;
#[cfg(feature = "async")]
pub mod fs;
pub mod options;
pub mod patterns;
pub mod predicates;
pub mod rewrite;
pub mod sync;
pub mod windows;

pub use crate::descriptor::{FileDescriptor, FileStream, RawDescriptor};
pub use crate::error::WalkError;
#[cfg(feature = "async")]
pub use crate::fs::{Filesystem, OsFs};
pub use crate::options::{TraversalConfig, TraversalConfigBuilder};
pub use crate::patterns::{InclusionPolicy, Patterns};
pub use crate::predicates::{EntryKind, EntryStat};

use camino::Utf8Path;
#[cfg(feature = "async")]
use std::sync::Arc;

/// Main facade for the FilePick library
///
/// Every entry point walks the tree under a root, keeps the regular files
/// the configuration includes, and returns them with root-relative segment
/// paths and a lazily opened stream. Hidden entries and OS metadata files
/// are never visited. On failure only the error is returned.
pub struct FilePick;

impl FilePick {
    /// Collects matching files from the host filesystem
    ///
    /// # Arguments
    ///
    /// * `root` - Directory to walk
    /// * `config` - Patterns, reverse flag and root handling
    ///
    /// # Returns
    ///
    /// `Ok(Vec<FileDescriptor>)` in completion order, or the first
    /// `WalkError` encountered anywhere in the tree
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use filepick::{FilePick, TraversalConfigBuilder};
    ///
    /// # async fn run() -> Result<(), filepick::WalkError> {
    /// let config = TraversalConfigBuilder::new().files(["*.jpg"]).build();
    /// for file in FilePick::collect("/data/photos", config).await? {
    ///     println!("{} ({} bytes)", file.relative_path(), file.length);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "async")]
    pub async fn collect(
        root: impl AsRef<Utf8Path>,
        config: TraversalConfig,
    ) -> Result<Vec<FileDescriptor>, WalkError> {
        Self::collect_with(Arc::new(OsFs), root, config).await
    }

    /// Collects matching files from any [`Filesystem`] implementation
    #[cfg(feature = "async")]
    pub async fn collect_with<F: Filesystem + 'static>(
        fs: Arc<F>,
        root: impl AsRef<Utf8Path>,
        config: TraversalConfig,
    ) -> Result<Vec<FileDescriptor>, WalkError> {
        let root = rewrite::normalize(root.as_ref());
        let raw = async_walk::walk(fs, &root, &config).await?;
        Ok(rewrite::rewrite(raw, &root, &config))
    }

    /// Collects matching files using a loosely-typed JSON configuration
    ///
    /// See [`TraversalConfig::from_value`] for how the value is read.
    #[cfg(feature = "async")]
    pub async fn collect_value(
        root: impl AsRef<Utf8Path>,
        config: &serde_json::Value,
    ) -> Result<Vec<FileDescriptor>, WalkError> {
        Self::collect(root, TraversalConfig::from_value(config)).await
    }

    /// Collects matching files on the rayon thread pool, blocking the caller
    pub fn collect_blocking(
        root: impl AsRef<Utf8Path>,
        config: TraversalConfig,
    ) -> Result<Vec<FileDescriptor>, WalkError> {
        let root = rewrite::normalize(root.as_ref());
        let raw = sync::walk_blocking(&root, &config)?;
        Ok(rewrite::rewrite(raw, &root, &config))
    }
}
