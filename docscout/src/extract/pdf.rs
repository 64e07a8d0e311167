use lopdf::Document;
use std::path::Path;
use tracing::trace;

use super::ExtractError;

/// Extracts the text layer of a PDF page by page, in page order.
///
/// Pages that yield no extractable text (scanned images, empty pages) are
/// skipped rather than contributing blank blocks.
pub(crate) fn extract(path: &Path) -> Result<String, ExtractError> {
    let doc = Document::load(path).map_err(|e| ExtractError::new(path, e))?;

    let mut content = String::new();
    for page in doc.get_pages().keys() {
        let text = match doc.extract_text(&[*page]) {
            Ok(text) => text,
            Err(e) => {
                trace!("No text layer on page {} of {}: {}", page, path.display(), e);
                continue;
            }
        };
        if text.trim().is_empty() {
            continue;
        }
        if !content.is_empty() {
            content.push('\n');
        }
        content.push_str(text.trim_end());
    }
    Ok(content)
}
