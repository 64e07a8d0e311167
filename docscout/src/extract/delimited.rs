use csv::ReaderBuilder;
use std::path::Path;

use super::ExtractError;

/// Renders a CSV file as text, one line per record with fields joined by
/// `", "`. Records are read without header handling and with varying field
/// counts tolerated.
pub(crate) fn extract(path: &Path) -> Result<String, ExtractError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| ExtractError::new(path, e))?;

    let mut content = String::new();
    for record in reader.records() {
        let record = record.map_err(|e| ExtractError::new(path, e))?;
        if !content.is_empty() {
            content.push('\n');
        }
        content.push_str(&record.iter().collect::<Vec<_>>().join(", "));
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_quoted_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quoted.csv");
        fs::write(&path, "a,\"b, with comma\"\nc,d\n").unwrap();

        let content = extract(&path).unwrap();
        assert_eq!(content, "a, b, with comma\nc, d");
    }

    #[test]
    fn test_ragged_rows_are_tolerated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        fs::write(&path, "a,b,c\nd\n").unwrap();

        let content = extract(&path).unwrap();
        assert_eq!(content, "a, b, c\nd");
    }
}
