use std::path::Path;
use tracing::trace;

use super::matcher::PatternMatcher;
use crate::extract::{DocumentExtractor, ExtractError};
use crate::results::SearchMatch;

/// Turns a single file into line-level match records.
#[derive(Debug, Clone)]
pub struct FileProcessor {
    matcher: PatternMatcher,
    extractor: DocumentExtractor,
}

impl FileProcessor {
    pub fn new(matcher: PatternMatcher, extractor: DocumentExtractor) -> Self {
        Self { matcher, extractor }
    }

    /// Extracts the file's content and matches it line by line.
    ///
    /// Returns one [`SearchMatch`] per occurrence, in line order. An
    /// extraction failure comes back as the `ExtractError` so that folder
    /// searches can treat it as "skip this file".
    pub fn process_file(&self, path: &Path) -> Result<Vec<SearchMatch>, ExtractError> {
        trace!("Processing file: {}", path.display());
        let content = self.extractor.extract(path)?;

        let mut matches = Vec::new();
        for (index, line) in content.lines().enumerate() {
            for span in self.matcher.find_in_line(line) {
                matches.push(SearchMatch::new(path, index + 1, line, span.text));
            }
        }
        Ok(matches)
    }
}
