use ignore::WalkBuilder;
use tracing::{debug, info};

use super::matcher::PatternMatcher;
use super::processor::FileProcessor;
use crate::config::SearchConfig;
use crate::errors::{SearchError, SearchResult};
use crate::extract::DocumentExtractor;
use crate::filters::should_include_file;
use crate::results::{SearchMatch, SearchOutput, SkippedFile};

/// Starts a lazy folder search.
///
/// The pattern is compiled before the walk is built, so an invalid pattern
/// fails here, ahead of any file I/O. The returned [`FolderSearch`] streams
/// matches as files are visited.
pub fn search_in_folder(config: &SearchConfig) -> SearchResult<FolderSearch> {
    let matcher = if config.whole_word {
        PatternMatcher::whole_word(&config.pattern, config.flags)?
    } else {
        PatternMatcher::new(&config.pattern, config.flags)?
    };

    if !config.root_path.is_dir() {
        return Err(SearchError::file_not_found(&config.root_path));
    }

    // Standard filters off: every regular file under the root is visited;
    // only the configured extension/ignore filters narrow the walk.
    let walker = WalkBuilder::new(&config.root_path)
        .standard_filters(false)
        .build();

    let extractor = DocumentExtractor::new(config.capabilities);
    Ok(FolderSearch {
        walker,
        processor: FileProcessor::new(matcher, extractor),
        file_extensions: config.file_extensions.clone(),
        ignore_patterns: config.ignore_patterns.clone(),
        pending: Vec::new().into_iter(),
        skipped: Vec::new(),
        files_searched: 0,
        files_with_matches: 0,
    })
}

/// Runs a folder search to completion and collects the results.
pub fn search(config: &SearchConfig) -> SearchResult<SearchOutput> {
    info!(
        "Starting search for {:?} under {}",
        config.pattern,
        config.root_path.display()
    );

    let mut stream = search_in_folder(config)?;
    let matches: Vec<SearchMatch> = stream.by_ref().collect();

    let output = SearchOutput {
        total_matches: matches.len(),
        files_searched: stream.files_searched(),
        files_with_matches: stream.files_with_matches(),
        skipped: stream.into_skipped(),
        matches,
    };

    info!(
        "Search complete. Found {} matches in {} of {} files ({} skipped)",
        output.total_matches,
        output.files_with_matches,
        output.files_searched,
        output.skipped.len()
    );
    Ok(output)
}

/// A pull-based stream of [`SearchMatch`] records from a recursive folder
/// walk.
///
/// One file is processed at a time, so a file's records are contiguous and in
/// line order, and never interleave with another file's. Files whose content
/// cannot be extracted yield no records; they are collected on the skip list
/// instead of aborting the walk.
pub struct FolderSearch {
    walker: ignore::Walk,
    processor: FileProcessor,
    file_extensions: Option<Vec<String>>,
    ignore_patterns: Vec<String>,
    pending: std::vec::IntoIter<SearchMatch>,
    skipped: Vec<SkippedFile>,
    files_searched: usize,
    files_with_matches: usize,
}

impl std::fmt::Debug for FolderSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FolderSearch")
            .field("file_extensions", &self.file_extensions)
            .field("ignore_patterns", &self.ignore_patterns)
            .field("skipped", &self.skipped)
            .field("files_searched", &self.files_searched)
            .field("files_with_matches", &self.files_with_matches)
            .finish_non_exhaustive()
    }
}

impl FolderSearch {
    /// Files visited but skipped because extraction failed, so far.
    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    /// Consumes the search and yields the skip list.
    pub fn into_skipped(self) -> Vec<SkippedFile> {
        self.skipped
    }

    /// Number of files whose content was searched so far.
    pub fn files_searched(&self) -> usize {
        self.files_searched
    }

    /// Number of searched files with at least one match so far.
    pub fn files_with_matches(&self) -> usize {
        self.files_with_matches
    }
}

impl Iterator for FolderSearch {
    type Item = SearchMatch;

    fn next(&mut self) -> Option<SearchMatch> {
        loop {
            if let Some(record) = self.pending.next() {
                return Some(record);
            }

            let entry = loop {
                match self.walker.next()? {
                    Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => break entry,
                    Ok(_) => continue,
                    Err(err) => {
                        debug!("Walk error: {}", err);
                        continue;
                    }
                }
            };

            let path = entry.into_path();
            if !should_include_file(&path, &self.file_extensions, &self.ignore_patterns) {
                continue;
            }

            match self.processor.process_file(&path) {
                Ok(matches) => {
                    self.files_searched += 1;
                    if !matches.is_empty() {
                        self.files_with_matches += 1;
                    }
                    self.pending = matches.into_iter();
                }
                Err(err) => {
                    debug!("Skipping {}: {}", path.display(), err);
                    self.skipped.push(SkippedFile::new(path, err.to_string()));
                }
            }
        }
    }
}
