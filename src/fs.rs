// fs.rs
//! Filesystem seam for the async walker.

use crate::predicates::{EntryKind, EntryStat};
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use std::io;

/// Minimal read-only filesystem used by the async walker
///
/// [`OsFs`] is the real implementation. Alternative implementations let
/// callers walk virtual trees or inject failures.
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Classifies a path and reports its size, following symlinks
    async fn stat(&self, path: &Utf8Path) -> io::Result<EntryStat>;

    /// Lists the entry names of a directory, in no particular order
    async fn read_dir(&self, path: &Utf8Path) -> io::Result<Vec<String>>;

    /// Resolves a directory to its real location
    ///
    /// Used to stop symlink cycles. The default returns the path unchanged,
    /// which is right for filesystems without symlinks.
    async fn canonicalize(&self, path: &Utf8Path) -> io::Result<Utf8PathBuf> {
        Ok(path.to_path_buf())
    }
}

/// The host filesystem, through `tokio::fs`
#[derive(Clone, Copy, Debug, Default)]
pub struct OsFs;

#[async_trait]
impl Filesystem for OsFs {
    async fn stat(&self, path: &Utf8Path) -> io::Result<EntryStat> {
        match tokio::fs::metadata(path).await {
            Ok(meta) => Ok(EntryStat::from_metadata(&meta)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // A dangling symlink is an entry of another kind, not a vanished path
                match tokio::fs::symlink_metadata(path).await {
                    Ok(link) if link.file_type().is_symlink() => {
                        Ok(EntryStat::new(EntryKind::Other, 0))
                    }
                    _ => Err(e),
                }
            }
            Err(e) => Err(e),
        }
    }

    async fn read_dir(&self, path: &Utf8Path) -> io::Result<Vec<String>> {
        let mut rd = tokio::fs::read_dir(path).await?;
        let mut names = Vec::new();

        while let Some(entry) = rd.next_entry().await? {
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    tracing::warn!(dir = %path, name = ?raw, "skipping non-UTF-8 entry name");
                }
            }
        }

        Ok(names)
    }

    async fn canonicalize(&self, path: &Utf8Path) -> io::Result<Utf8PathBuf> {
        let real = tokio::fs::canonicalize(path).await?;
        Utf8PathBuf::from_path_buf(real).map_err(|p| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("canonical path is not UTF-8: {}", p.display()),
            )
        })
    }
}
