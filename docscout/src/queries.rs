use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::{SearchError, SearchResult};

/// An ordered list of distinct, previously used pattern strings, persisted
/// as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryHistory {
    patterns: Vec<String>,
}

impl QueryHistory {
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads the history from disk.
    ///
    /// A missing file yields an empty history; a file that exists but does
    /// not parse as a JSON string array is an error, not an empty list.
    pub fn load_from(path: &Path) -> SearchResult<Self> {
        if !path.exists() {
            debug!("No query history at {}, starting empty", path.display());
            return Ok(Self::new());
        }
        let data = fs::read_to_string(path).map_err(|e| SearchError::from_io(path, e))?;
        serde_json::from_str(&data).map_err(|e| SearchError::query_store(e.to_string()))
    }

    /// Saves the history, overwriting the file. The write goes to a
    /// temporary file first and is renamed into place.
    pub fn save_to(&self, path: &Path) -> SearchResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| SearchError::from_io(parent, e))?;
            }
        }

        let data =
            serde_json::to_string_pretty(self).map_err(|e| SearchError::query_store(e.to_string()))?;

        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, data).map_err(|e| SearchError::from_io(&tmp_path, e))?;
        fs::rename(&tmp_path, path).map_err(|e| SearchError::from_io(path, e))?;
        Ok(())
    }

    /// Appends a pattern unless it is already present. Returns whether the
    /// history changed.
    pub fn add(&mut self, pattern: impl Into<String>) -> bool {
        let pattern = pattern.into();
        if self.patterns.contains(&pattern) {
            return false;
        }
        self.patterns.push(pattern);
        true
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl FromIterator<String> for QueryHistory {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut history = Self::new();
        for pattern in iter {
            history.add(pattern);
        }
        history
    }
}
