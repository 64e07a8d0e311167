//! Pattern matching and folder searching.
//!
//! The flow is extractor → matcher → results: [`engine::search_in_folder`]
//! walks a directory tree, [`processor::FileProcessor`] turns each file into
//! text and line-level match records, and [`matcher::PatternMatcher`] holds
//! the compiled pattern both of them share. The pattern is compiled exactly
//! once, before any file is touched, so an invalid pattern fails up front.
//!
//! Folder results stream lazily out of a pull-based iterator; nothing is
//! materialized beyond the current file's matches, and each file's records
//! stay contiguous and in line order.

pub mod engine;
pub mod matcher;
pub mod processor;

pub use engine::{search, search_in_folder, FolderSearch};
pub use matcher::{MatchFlags, PatternMatcher};
pub use processor::FileProcessor;
