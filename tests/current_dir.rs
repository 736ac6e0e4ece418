//! Walks rooted at the working directory.
//!
//! Changing the working directory is process-wide, so this file holds a
//! single test.

use camino::Utf8Path;
use filepick::{FilePick, TraversalConfigBuilder};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_dot_root_matches_full_path_patterns() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/b.jpg"), "bb").unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    for root in [".", "./", ""] {
        let config = TraversalConfigBuilder::new().files(["sub/b.jpg"]).build();
        let files = FilePick::collect_blocking(root, config).unwrap();
        assert_eq!(files.len(), 1, "root {root:?}");
        assert_eq!(files[0].path, ["sub", "b.jpg"]);
        assert_eq!(files[0].source_path(), Utf8Path::new("sub/b.jpg"));

        let config = TraversalConfigBuilder::new().files(["sub"]).build();
        let files = FilePick::collect_blocking(root, config).unwrap();
        assert_eq!(files.len(), 1, "prefix pattern under root {root:?}");
    }

    let config = TraversalConfigBuilder::new()
        .reverse(true)
        .keep_root(true)
        .build();
    let mut all: Vec<String> = FilePick::collect_blocking(".", config)
        .unwrap()
        .iter()
        .map(|f| f.source_path().to_string())
        .collect();
    all.sort();
    assert_eq!(all, vec!["a.txt", "sub/b.jpg"]);

    #[cfg(feature = "async")]
    {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let files = rt
            .block_on(FilePick::collect(
                ".",
                TraversalConfigBuilder::new().files(["sub/b.jpg"]).build(),
            ))
            .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].source_path(), Utf8Path::new("sub/b.jpg"));
    }

    std::env::set_current_dir(previous).unwrap();
}
