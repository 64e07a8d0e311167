use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use std::fs;
use std::path::Path;

use super::ExtractError;

/// Extracts the paragraph text of a DOCX document, one line per paragraph.
pub(crate) fn extract(path: &Path) -> Result<String, ExtractError> {
    let data = fs::read(path).map_err(|e| ExtractError::new(path, e))?;
    let docx = read_docx(&data).map_err(|e| ExtractError::new(path, e))?;

    let mut content = String::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(para) = child {
            if !content.is_empty() {
                content.push('\n');
            }
            for child in para.children {
                if let ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let RunChild::Text(text) = child {
                            content.push_str(&text.text);
                        }
                    }
                }
            }
        }
    }
    Ok(content)
}
