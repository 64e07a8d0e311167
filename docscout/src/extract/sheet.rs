use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

use super::ExtractError;

/// Extracts the first sheet of an XLSX workbook, one line per row with
/// non-empty cell values joined by tabs.
pub(crate) fn extract(path: &Path) -> Result<String, ExtractError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| ExtractError::new(path, e))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let first = sheet_names
        .first()
        .ok_or_else(|| ExtractError::new(path, "workbook has no sheets"))?;
    let range = workbook
        .worksheet_range(first)
        .map_err(|e| ExtractError::new(path, e))?;

    let mut content = String::new();
    for row in range.rows() {
        let cells: Vec<String> = row
            .iter()
            .filter(|cell| !matches!(cell, Data::Empty))
            .map(|cell| cell.to_string())
            .collect();
        if !content.is_empty() {
            content.push('\n');
        }
        content.push_str(&cells.join("\t"));
    }
    Ok(content)
}
