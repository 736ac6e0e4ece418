// async_walk.rs
use crate::{
    descriptor::RawDescriptor,
    error::WalkError,
    fs::Filesystem,
    options::TraversalConfig,
    patterns::InclusionPolicy,
    predicates::{is_ordinary, EntryKind},
    rewrite::child_path,
};
use camino::{Utf8Path, Utf8PathBuf};
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;
use tokio::task::JoinSet;

type Branch = BoxFuture<'static, Result<Vec<RawDescriptor>, WalkError>>;

/// State shared read-only by every branch of one walk
struct Walk<F> {
    fs: Arc<F>,
    policy: InclusionPolicy,
}

/// Walks `root` concurrently and collects every included regular file
///
/// Each directory spawns one task per ordinary child and waits for all
/// of them before its own result is known. When any branch fails the
/// walk still waits for its siblings, then returns the first error and
/// discards everything collected so far. Result order follows task
/// completion, not directory listing order.
///
/// Must be called from within a tokio runtime.
///
/// # Arguments
///
/// * `fs` - Filesystem to walk
/// * `root` - Directory (or single file) to start from
/// * `config` - Patterns and reverse flag used to filter files
///
/// # Errors
///
/// Returns `WalkError::Access` for the first stat, listing or
/// canonicalization failure anywhere in the tree, and `WalkError::Task`
/// if a branch panicked.
pub async fn walk<F: Filesystem + 'static>(
    fs: Arc<F>,
    root: &Utf8Path,
    config: &TraversalConfig,
) -> Result<Vec<RawDescriptor>, WalkError> {
    let walk = Arc::new(Walk {
        fs,
        policy: InclusionPolicy::from_config(config),
    });

    tracing::debug!(root = %root, patterns = config.files.len(), reverse = config.reverse, "walk started");
    let files = visit(walk, root.to_path_buf(), Arc::new(Vec::new())).await?;
    tracing::debug!(root = %root, files = files.len(), "walk finished");

    Ok(files)
}

fn visit<F: Filesystem + 'static>(
    walk: Arc<Walk<F>>,
    path: Utf8PathBuf,
    ancestors: Arc<Vec<Utf8PathBuf>>,
) -> Branch {
    async move {
        let stat = walk
            .fs
            .stat(&path)
            .await
            .map_err(|e| WalkError::access(&path, e))?;

        match stat.kind {
            EntryKind::Directory => visit_dir(walk, path, ancestors).await,
            EntryKind::File => {
                if !walk.policy.include(&path) {
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
    .boxed()
}

async fn visit_dir<F: Filesystem + 'static>(
    walk: Arc<Walk<F>>,
    dir: Utf8PathBuf,
    ancestors: Arc<Vec<Utf8PathBuf>>,
) -> Result<Vec<RawDescriptor>, WalkError> {
    let real = walk
        .fs
        .canonicalize(&dir)
        .await
        .map_err(|e| WalkError::access(&dir, e))?;

    if ancestors.contains(&real) {
        tracing::warn!(dir = %dir, target = %real, "symlink cycle, not descending");
        return Ok(Vec::new());
    }

    let mut chain = Vec::with_capacity(ancestors.len() + 1);
    chain.extend(ancestors.iter().cloned());
    chain.push(real);
    let chain = Arc::new(chain);

    let names = walk
        .fs
        .read_dir(&dir)
        .await
        .map_err(|e| WalkError::access(&dir, e))?;

    let mut set = JoinSet::new();
    for name in names {
        if !is_ordinary(&name) {
            tracing::trace!(dir = %dir, name = %name, "pruned");
            continue;
        }
        set.spawn(visit(walk.clone(), child_path(&dir, &name), chain.clone()));
    }

    let mut files = Vec::new();
    let mut first_err = None;

    // Join every branch, even after a failure
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(Ok(mut found)) => {
                if first_err.is_none() {
                    files.append(&mut found);
                }
            }
            Ok(Err(e)) => {
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
            Err(e) => {
                if first_err.is_none() {
                    first_err = Some(WalkError::Task(e.to_string()));
                }
            }
        }
    }

    match first_err {
        Some(e) => Err(e),
        None => Ok(files),
    }
}
