use serde::Serialize;
use std::path::PathBuf;

/// One occurrence of a pattern match, tied to a specific file and line.
///
/// Immutable once constructed. `line_content` is trimmed of surrounding
/// whitespace for display; `matched_text` is the exact substring the pattern
/// matched within the original (untrimmed) line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    /// Full path to the file the match was found in
    pub file_path: PathBuf,
    /// Basename of `file_path`
    pub file_name: String,
    /// 1-based line number
    pub line_number: usize,
    /// The matched line, trimmed of leading/trailing whitespace
    pub line_content: String,
    /// The exact substring matched by the pattern
    pub matched_text: String,
}

impl SearchMatch {
    pub fn new(
        path: impl Into<PathBuf>,
        line_number: usize,
        line: &str,
        matched_text: impl Into<String>,
    ) -> Self {
        let file_path = path.into();
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            file_path,
            file_name,
            line_number,
            line_content: line.trim().to_string(),
            matched_text: matched_text.into(),
        }
    }
}

/// A buffer-mode match: byte offsets into the searched text plus the matched
/// substring. `text` always equals the slice `&buffer[start..end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// A file the folder walk visited but could not extract content from.
///
/// Skipped files produce no matches; they are collected on the side so that
/// callers can report them instead of losing them silently.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

impl SkippedFile {
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// The complete result of a collected folder search.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchOutput {
    /// All matches, per-file contiguous and in line order
    pub matches: Vec<SearchMatch>,
    /// Number of files whose content was searched
    pub files_searched: usize,
    /// Number of searched files with at least one match
    pub files_with_matches: usize,
    /// Total number of matches found
    pub total_matches: usize,
    /// Files visited but skipped because extraction failed
    pub skipped: Vec<SkippedFile>,
}

impl SearchOutput {
    pub fn new() -> Self {
        Default::default()
    }
}
