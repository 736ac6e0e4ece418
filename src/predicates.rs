// predicates.rs
use once_cell::sync::Lazy;
use regex::RegexSet;
use std::fs::Metadata;

/// What a filesystem path turned out to be
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory, recursed into
    Directory,
    /// Regular file, filtered and possibly collected
    File,
    /// Anything else (sockets, devices, dangling symlinks); silently skipped
    Other,
}

/// The result of a stat call, reduced to what traversal needs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryStat {
    pub kind: EntryKind,
    pub len: u64,
}

impl EntryStat {
    pub fn new(kind: EntryKind, len: u64) -> Self {
        Self { kind, len }
    }

    /// Classifies followed (not symlink) metadata
    pub fn from_metadata(meta: &Metadata) -> Self {
        let kind = if meta.is_dir() {
            EntryKind::Directory
        } else if meta.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        Self {
            kind,
            len: meta.len(),
        }
    }
}

// Platform metadata files nobody wants to ship
const JUNK_PATTERNS: &[&str] = &[
    r"^npm-debug\.log$",
    r"^\..*\.swp$",
    r"^\.DS_Store$",
    r"^\.AppleDouble$",
    r"^\.LSOverride$",
    r"^Icon\r$",
    r"^\._.*",
    r"^\.Spotlight-V100(?:$|/)",
    r"\.Trashes",
    r"^__MACOSX$",
    r"~$",
    r"^Thumbs\.db$",
    r"^ehthumbs\.db$",
    r"^[Dd]esktop\.ini$",
    r"@eaDir$",
];

static JUNK: Lazy<RegexSet> =
    Lazy::new(|| RegexSet::new(JUNK_PATTERNS).expect("junk patterns are valid regexes"));

/// Names starting with `.` are hidden
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Checks whether an entry name is an OS-generated metadata file
pub fn is_junk(name: &str) -> bool {
    JUNK.is_match(name)
}

/// Entries that survive pruning: neither hidden nor junk
pub fn is_ordinary(name: &str) -> bool {
    !is_hidden(name) && !is_junk(name)
}
