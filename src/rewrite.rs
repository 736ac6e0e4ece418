// rewrite.rs
//! Rewrites absolute walk paths into root-relative segment sequences.
//!
//! All arithmetic is done on path components, so redundant separators and
//! a trailing separator on the root never change the result.

use crate::descriptor::{FileDescriptor, FileStream, RawDescriptor};
use crate::options::TraversalConfig;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Lexically normalizes a path
///
/// Collapses repeated separators, drops `.` components and folds `..`
/// into a preceding normal component. `..` directly below the root is
/// dropped; leading `..` of a relative path is kept. An empty result
/// becomes `.`.
pub fn normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut kept: Vec<Utf8Component<'_>> = Vec::new();

    for comp in path.components() {
        match comp {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => match kept.last() {
                Some(Utf8Component::Normal(_)) => {
                    kept.pop();
                }
                Some(Utf8Component::RootDir) | Some(Utf8Component::Prefix(_)) => {}
                _ => kept.push(comp),
            },
            other => kept.push(other),
        }
    }

    if kept.is_empty() {
        return Utf8PathBuf::from(".");
    }

    let mut out = Utf8PathBuf::new();
    for comp in kept {
        out.push(comp.as_str());
    }
    out
}

/// Joins an entry name onto a walked directory
///
/// A walk rooted at `.` yields `sub/b.jpg`, not `./sub/b.jpg`, so
/// full-path and prefix patterns see the same path the caller wrote.
pub fn child_path(dir: &Utf8Path, name: &str) -> Utf8PathBuf {
    if dir.as_str() == "." {
        Utf8PathBuf::from(name)
    } else {
        dir.join(name)
    }
}

/// Computes the prefix stripped from every collected path
///
/// * `keep_root == false`: the normalized root itself.
/// * `keep_root` with no `root_folder`: the parent of the root.
/// * `keep_root` with a `root_folder`: everything before the first run of
///   root components equal to the folder's components. If the folder does
///   not occur in the root, the root itself is used.
pub fn effective_root(root: &Utf8Path, config: &TraversalConfig) -> Utf8PathBuf {
    let root = normalize(root);
    if !config.keep_root {
        return root;
    }

    let folder: Vec<&str> = Utf8Path::new(&config.root_folder)
        .components()
        .filter_map(|c| match c {
            Utf8Component::Normal(s) => Some(s),
            _ => None,
        })
        .collect();

    if folder.is_empty() {
        return root.parent().map(Utf8Path::to_path_buf).unwrap_or_default();
    }

    let comps: Vec<Utf8Component<'_>> = root.components().collect();
    let found = comps.windows(folder.len()).position(|window| {
        window
            .iter()
            .zip(&folder)
            .all(|(comp, name)| comp.as_str() == *name)
    });

    match found {
        Some(idx) => {
            let mut out = Utf8PathBuf::new();
            for comp in &comps[..idx] {
                out.push(comp.as_str());
            }
            out
        }
        None => {
            tracing::warn!(
                root = %root,
                root_folder = %config.root_folder,
                "root folder not found in root path, keeping paths relative to the root"
            );
            root
        }
    }
}

/// Splits a collected path into segments below the effective root
///
/// Never returns an empty sequence: when nothing is left after the prefix
/// (the walk root was the file itself) the file name is the only segment.
pub fn relative_segments(path: &Utf8Path, effective_root: &Utf8Path) -> Vec<String> {
    let rest = path.strip_prefix(effective_root).unwrap_or(path);

    let mut segments: Vec<String> = rest
        .components()
        .filter_map(|c| match c {
            Utf8Component::Normal(s) => Some(s.to_owned()),
            _ => None,
        })
        .collect();

    if segments.is_empty() {
        if let Some(name) = path.file_name() {
            segments.push(name.to_owned());
        }
    }
    segments
}

/// Turns raw descriptors into caller-facing ones in a single pass
///
/// `root` must be the root the walk was started from.
pub fn rewrite(
    raw: Vec<RawDescriptor>,
    root: &Utf8Path,
    config: &TraversalConfig,
) -> Vec<FileDescriptor> {
    let base = effective_root(root, config);
    tracing::trace!(effective_root = %base, count = raw.len(), "rewriting paths");

    raw.into_iter()
        .map(|d| {
            let segments = relative_segments(&d.path, &base);
            FileDescriptor::new(d.length, segments, FileStream::new(d.path))
        })
        .collect()
}
