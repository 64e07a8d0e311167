use std::path::Path;
use tracing::info;

use crate::errors::{SearchError, SearchResult};
use crate::results::SearchMatch;

/// Writes search results to a CSV file, overwriting any existing file.
///
/// The header row is `File Name, Line Number, Matched Text, Full Line`;
/// records follow in the order given.
pub fn export_csv(matches: &[SearchMatch], path: &Path) -> SearchResult<()> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| SearchError::export_error(e.to_string()))?;

    writer
        .write_record(["File Name", "Line Number", "Matched Text", "Full Line"])
        .map_err(|e| SearchError::export_error(e.to_string()))?;

    for m in matches {
        let line_number = m.line_number.to_string();
        writer
            .write_record([
                m.file_name.as_str(),
                line_number.as_str(),
                m.matched_text.as_str(),
                m.line_content.as_str(),
            ])
            .map_err(|e| SearchError::export_error(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| SearchError::export_error(e.to_string()))?;
    info!("Exported {} results to {}", matches.len(), path.display());
    Ok(())
}
