// options.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuration for a single traversal
///
/// The value is immutable once a walk starts and is shared read-only by
/// every concurrent branch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalConfig {
    /// Patterns deciding which files match (see [`crate::patterns`])
    #[serde(default)]
    pub files: Vec<String>,

    /// Invert the decision: patterns describe exclusions
    #[serde(default)]
    pub reverse: bool,

    /// Keep the root directory (or the part up to `root_folder`) in the
    /// resulting segment paths
    #[serde(default)]
    pub keep_root: bool,

    /// Folder name to truncate the root at when `keep_root` is set
    #[serde(default)]
    pub root_folder: String,
}

impl TraversalConfig {
    /// Builds a configuration from a loosely-typed JSON value
    ///
    /// Never fails. Anything that is not a non-empty object yields the
    /// default configuration, a field of the wrong type falls back to its
    /// default, and non-string entries of `files` are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use filepick::TraversalConfig;
    /// use serde_json::json;
    ///
    /// let config = TraversalConfig::from_value(&json!({ "files": ["*.jpg", 3], "reverse": "yes" }));
    /// assert_eq!(config.files, vec!["*.jpg".to_string()]);
    /// assert!(!config.reverse);
    /// ```
    pub fn from_value(raw: &Value) -> Self {
        let obj = match raw.as_object() {
            Some(obj) if !obj.is_empty() => obj,
            _ => return Self::default(),
        };

        let files = obj
            .get("files")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            files,
            reverse: obj.get("reverse").and_then(Value::as_bool).unwrap_or(false),
            keep_root: obj.get("keepRoot").and_then(Value::as_bool).unwrap_or(false),
            root_folder: obj
                .get("rootFolder")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned(),
        }
    }
}

/// Builder for TraversalConfig for fluent configuration
pub struct TraversalConfigBuilder(TraversalConfig);

impl Default for TraversalConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TraversalConfigBuilder {
    /// Creates a new builder with default options
    pub fn new() -> Self {
        Self(TraversalConfig::default())
    }

    /// Replaces the pattern list
    pub fn files<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.files = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one pattern
    pub fn file(mut self, pattern: impl Into<String>) -> Self {
        self.0.files.push(pattern.into());
        self
    }

    /// Sets reverse matching
    pub fn reverse(mut self, v: bool) -> Self {
        self.0.reverse = v;
        self
    }

    /// Sets whether the root directory stays in the segment paths
    pub fn keep_root(mut self, v: bool) -> Self {
        self.0.keep_root = v;
        self
    }

    /// Sets the folder the root is truncated at when keeping the root
    pub fn root_folder(mut self, folder: impl Into<String>) -> Self {
        self.0.root_folder = folder.into();
        self
    }

    /// Builds the final TraversalConfig instance
    pub fn build(self) -> TraversalConfig {
        self.0
    }
}
