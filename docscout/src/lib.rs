pub mod config;
pub mod errors;
pub mod export;
pub mod extract;
pub mod filters;
pub mod queries;
pub mod results;
pub mod search;

pub use config::SearchConfig;
pub use errors::{SearchError, SearchResult};
pub use export::export_csv;
pub use extract::{Capabilities, DocumentExtractor, ExtractError};
pub use queries::QueryHistory;
pub use results::{SearchMatch, SearchOutput, SkippedFile, SpanMatch};
pub use search::{search, search_in_folder, FolderSearch, MatchFlags, PatternMatcher};
