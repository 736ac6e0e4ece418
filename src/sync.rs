// sync.rs
use crate::{
    descriptor::RawDescriptor,
    error::WalkError,
    options::TraversalConfig,
    patterns::InclusionPolicy,
    predicates::{is_ordinary, EntryKind, EntryStat},
    rewrite::child_path,
};
use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use std::{fs, io};

/// Walks `root` on the rayon pool and collects every included regular file
///
/// Same semantics as the async walker: siblings are visited in parallel,
/// every sibling finishes before a directory's result is known, and the
/// first error found replaces all collected files.
///
/// # Errors
///
/// Returns `WalkError::Access` for the first stat, listing or
/// canonicalization failure anywhere in the tree.
pub fn walk_blocking(
    root: &Utf8Path,
    config: &TraversalConfig,
) -> Result<Vec<RawDescriptor>, WalkError> {
    let policy = InclusionPolicy::from_config(config);

    tracing::debug!(root = %root, patterns = config.files.len(), reverse = config.reverse, "blocking walk started");
    let files = visit(&policy, root.to_path_buf(), &[])?;
    tracing::debug!(root = %root, files = files.len(), "blocking walk finished");

    Ok(files)
}

fn visit(
    policy: &InclusionPolicy,
    path: Utf8PathBuf,
    ancestors: &[Utf8PathBuf],
) -> Result<Vec<RawDescriptor>, WalkError> {
    let stat = stat(&path).map_err(|e| WalkError::access(&path, e))?;

    match stat.kind {
        EntryKind::Directory => visit_dir(policy, path, ancestors),
        EntryKind::File => {
            if !policy.include(&path) {
                tracing::trace!(path = %path, "excluded");
                return Ok(Vec::new());
            }
            Ok(vec![RawDescriptor::new(stat.len, path)])
        }
        EntryKind::Other => {
            tracing::trace!(path = %path, "neither file nor directory, skipped");
            Ok(Vec::new())
        }
    }
}

fn visit_dir(
    policy: &InclusionPolicy,
    dir: Utf8PathBuf,
    ancestors: &[Utf8PathBuf],
) -> Result<Vec<RawDescriptor>, WalkError> {
    let real = canonicalize(&dir).map_err(|e| WalkError::access(&dir, e))?;
    if ancestors.contains(&real) {
        tracing::warn!(dir = %dir, target = %real, "symlink cycle, not descending");
        return Ok(Vec::new());
    }

    let mut chain = ancestors.to_vec();
    chain.push(real);

    let names = read_dir(&dir).map_err(|e| WalkError::access(&dir, e))?;

    let branches: Vec<Result<Vec<RawDescriptor>, WalkError>> = names
        .into_par_iter()
        .filter(|name| {
            let keep = is_ordinary(name);
            if !keep {
                tracing::trace!(dir = %dir, name = %name, "pruned");
            }
            keep
        })
        .map(|name| visit(policy, child_path(&dir, &name), &chain))
        .collect();

    let mut files = Vec::new();
    for branch in branches {
        files.append(&mut branch?);
    }
    Ok(files)
}

fn stat(path: &Utf8Path) -> io::Result<EntryStat> {
    match fs::metadata(path) {
        Ok(meta) => Ok(EntryStat::from_metadata(&meta)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => match fs::symlink_metadata(path) {
            Ok(link) if link.file_type().is_symlink() => Ok(EntryStat::new(EntryKind::Other, 0)),
            _ => Err(e),
        },
        Err(e) => Err(e),
    }
}

fn read_dir(path: &Utf8Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(path)? {
        match entry?.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => {
                tracing::warn!(dir = %path, name = ?raw, "skipping non-UTF-8 entry name");
            }
        }
    }
    Ok(names)
}

fn canonicalize(path: &Utf8Path) -> io::Result<Utf8PathBuf> {
    let real = fs::canonicalize(path)?;
    Utf8PathBuf::from_path_buf(real).map_err(|p| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("canonical path is not UTF-8: {}", p.display()),
        )
    })
}
