// descriptor.rs
use crate::error::WalkError;
use crate::windows::native_path;
use camino::{Utf8Path, Utf8PathBuf};

/// A matched file as collected by the walker, before path rewriting
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDescriptor {
    /// Size in bytes at the time of the stat call
    pub length: u64,
    /// Path as walked, prefixed by the normalized root
    pub path: Utf8PathBuf,
}

impl RawDescriptor {
    pub fn new(length: u64, path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            length,
            path: path.into(),
        }
    }
}

/// Deferred access to a file's bytes
///
/// Holds the collected path only; no handle exists until one of the
/// `open` methods is called. Every call opens a fresh, independent handle
/// and closing it is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileStream {
    path: Utf8PathBuf,
}

impl FileStream {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Opens the file for async reading
    #[cfg(feature = "async")]
    pub async fn open(&self) -> Result<tokio::fs::File, WalkError> {
        tokio::fs::File::open(native_path(&self.path))
            .await
            .map_err(|e| WalkError::access(&self.path, e))
    }

    /// Opens the file for blocking reads
    pub fn open_blocking(&self) -> Result<std::fs::File, WalkError> {
        std::fs::File::open(native_path(&self.path)).map_err(|e| WalkError::access(&self.path, e))
    }
}

/// A matched file as returned to the caller
#[derive(Clone, Debug)]
pub struct FileDescriptor {
    /// Size in bytes
    pub length: u64,
    /// Path segments relative to the effective root, never empty
    pub path: Vec<String>,
    stream: FileStream,
}

impl FileDescriptor {
    pub fn new(length: u64, path: Vec<String>, stream: FileStream) -> Self {
        Self {
            length,
            path,
            stream,
        }
    }

    /// The stream factory for this file
    pub fn stream(&self) -> &FileStream {
        &self.stream
    }

    /// The path the file was found at during the walk
    pub fn source_path(&self) -> &Utf8Path {
        self.stream.path()
    }

    /// Segments joined with `/`
    pub fn relative_path(&self) -> String {
        self.path.join("/")
    }
}
