use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::errors::{SearchError, SearchResult};
use crate::results::SpanMatch;

/// Toggles applied at pattern compilation. Composable; all default to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchFlags {
    /// Case-insensitive matching
    pub case_insensitive: bool,
    /// `^`/`$` match at line boundaries (meaningful for buffer mode)
    pub multiline: bool,
    /// `.` matches newlines too
    pub dot_all: bool,
}

/// A pattern compiled once and applied either across a whole buffer or
/// line by line.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: regex::Regex,
}

impl PatternMatcher {
    /// Compiles `pattern` under the given flags.
    ///
    /// Compilation failure is reported to the caller as
    /// [`SearchError::InvalidPattern`], never swallowed.
    pub fn new(pattern: &str, flags: MatchFlags) -> SearchResult<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multiline)
            .dot_matches_new_line(flags.dot_all)
            .build()
            .map_err(|e| SearchError::invalid_pattern(e.to_string()))?;
        Ok(Self { regex })
    }

    /// Matches `word` as literal text at word boundaries.
    ///
    /// The word is escaped before the anchors are added, so regex
    /// metacharacters in it are matched literally.
    pub fn whole_word(word: &str, flags: MatchFlags) -> SearchResult<Self> {
        Self::new(&format!(r"\b{}\b", regex::escape(word)), flags)
    }

    /// Finds all matches across the whole buffer, with absolute byte offsets,
    /// in non-decreasing start order and without overlap.
    pub fn find_matches(&self, text: &str) -> Vec<SpanMatch> {
        self.find_in_line(text).collect()
    }

    /// Finds all matches within a single line, offsets relative to the line,
    /// left to right.
    pub fn find_in_line<'t>(&'t self, line: &'t str) -> impl Iterator<Item = SpanMatch> + 't {
        self.regex.find_iter(line).map(|m| SpanMatch {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
        })
    }
}
