// patterns/mod.rs
//! Pattern matching and the inclusion policy built on it.
//!
//! A pattern is checked against a path with these rules, in order:
//!
//! 1. `*ext` patterns match when the path has the same extension.
//! 2. A plain pattern matches the basename, the full path, any path
//!    segment, or a leading run of path components. The prefix check is
//!    per component, not per character: `/data/photos` matches
//!    `/data/photos/x` but not `/data/photos2/x`.
//! 3. A pattern containing `*` is split into `dir*ext`, see [`Wildcard`].
//!
//! A list of patterns matches if any pattern matches. Every pattern is
//! tried; a wildcard pattern that fails does not stop later patterns
//! from being considered.

pub mod wildcard;

pub use wildcard::Wildcard;

use crate::options::TraversalConfig;
use crate::rewrite::normalize;
use camino::{Utf8Path, Utf8PathBuf};

/// A single compiled pattern string
#[derive(Clone, Debug)]
pub struct Pattern {
    raw: String,
    extension: Option<String>,
    prefix: Utf8PathBuf,
    wildcard: Option<Wildcard>,
}

impl Pattern {
    /// Compiles a pattern; empty strings are not patterns
    pub fn new(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let extension = if raw.starts_with('*') {
            Utf8Path::new(raw).extension().map(str::to_owned)
        } else {
            None
        };

        Some(Self {
            raw: raw.to_owned(),
            extension,
            prefix: normalize(Utf8Path::new(raw)),
            wildcard: Wildcard::parse(raw),
        })
    }

    /// The pattern as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Checks this pattern alone against a path
    pub fn matches(&self, path: &Utf8Path) -> bool {
        if let Some(ext) = &self.extension {
            if path.extension() == Some(ext.as_str()) {
                return true;
            }
        }

        if path.file_name() == Some(self.raw.as_str())
            || path.as_str() == self.raw
            || path.iter().any(|segment| segment == self.raw)
            || path.starts_with(&self.prefix)
        {
            return true;
        }

        self.wildcard
            .as_ref()
            .is_some_and(|wildcard| wildcard.matches(path))
    }
}

/// Compiled pattern list
#[derive(Clone, Debug, Default)]
pub struct Patterns {
    pats: Vec<Pattern>,
}

impl Patterns {
    /// Compiles multiple patterns, skipping empty ones
    pub fn compile_many<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pats = patterns
            .into_iter()
            .filter_map(|p| Pattern::new(p.as_ref()))
            .collect();
        Self { pats }
    }

    pub fn len(&self) -> usize {
        self.pats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pats.is_empty()
    }

    /// Checks if a path matches any of the compiled patterns
    ///
    /// An empty list matches nothing.
    pub fn is_match(&self, path: &Utf8Path) -> bool {
        self.pats.iter().any(|p| p.matches(path))
    }
}

/// Checks a path against raw pattern strings without keeping the compiled form
pub fn matches<S: AsRef<str>>(path: &Utf8Path, patterns: &[S]) -> bool {
    Patterns::compile_many(patterns).is_match(path)
}

/// Final include/exclude decision for regular files
///
/// With `reverse` set the patterns describe exclusions, so an empty
/// pattern list with `reverse` includes everything.
#[derive(Clone, Debug)]
pub struct InclusionPolicy {
    patterns: Patterns,
    reverse: bool,
}

impl InclusionPolicy {
    pub fn new(patterns: Patterns, reverse: bool) -> Self {
        Self { patterns, reverse }
    }

    pub fn from_config(config: &TraversalConfig) -> Self {
        Self::new(Patterns::compile_many(&config.files), config.reverse)
    }

    pub fn include(&self, path: &Utf8Path) -> bool {
        self.patterns.is_match(path) != self.reverse
    }
}

/// One-off inclusion check against a configuration
pub fn include(path: &Utf8Path, config: &TraversalConfig) -> bool {
    InclusionPolicy::from_config(config).include(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TraversalConfigBuilder;

    fn p(s: &str) -> &Utf8Path {
        Utf8Path::new(s)
    }

    #[test]
    fn extension_wildcard() {
        assert!(matches(p("/data/photos/a.jpg"), &["*.jpg"]));
        assert!(!matches(p("/data/photos/bar.txt"), &["*.jpg"]));
    }

    #[test]
    fn extension_is_compared_whole() {
        // `*jpg` has no extension, so it only matches through the suffix rule
        assert!(matches(p("/x/ajpg"), &["*jpg"]));
        assert!(!matches(p("/x/a.jpeg"), &["*.jpg"]));
    }

    #[test]
    fn basename_full_path_and_segment() {
        assert!(matches(p("/data/photos/a.jpg"), &["a.jpg"]));
        assert!(matches(p("/data/photos/a.jpg"), &["/data/photos/a.jpg"]));
        assert!(matches(p("/data/photos/sub/b.jpg"), &["sub"]));
        assert!(!matches(p("/data/photos/subway/b.jpg"), &["sub"]));
    }

    #[test]
    fn prefix_is_component_wise() {
        assert!(matches(p("/data/photos/sub/b.jpg"), &["/data/photos"]));
        assert!(matches(p("/data/photos/sub/b.jpg"), &["/data//photos/./sub"]));
        assert!(!matches(p("/data/photos2/b.jpg"), &["/data/photos"]));
    }

    #[test]
    fn wildcard_middle() {
        assert!(matches(p("project/build/out.o"), &["build*.o"]));
        assert!(!matches(p("project/src/out.o"), &["build*.o"]));
    }

    #[test]
    fn later_patterns_are_consulted_after_failed_wildcard() {
        let path = p("/data/notes/bar.txt");
        assert!(!matches(path, &["build*.o"]));
        assert!(matches(path, &["build*.o", "*.txt"]));
        assert!(matches(path, &["build*.o", "bar.txt"]));
    }

    #[test]
    fn empty_patterns_are_ignored() {
        assert!(!matches(p("/a/b"), &[""]));
        assert!(Patterns::compile_many(["", "*.rs"]).len() == 1);
    }

    #[test]
    fn empty_list_includes_only_in_reverse() {
        let path = p("/a/b.txt");
        assert!(!include(path, &TraversalConfig::default()));
        assert!(include(path, &TraversalConfigBuilder::new().reverse(true).build()));
    }

    #[test]
    fn reverse_inverts() {
        let config = TraversalConfigBuilder::new()
            .files(["*.log"])
            .reverse(true)
            .build();
        assert!(!include(p("/var/app.log"), &config));
        assert!(include(p("/var/app.txt"), &config));
    }
}
