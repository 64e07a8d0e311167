//! Content extraction for the file formats the search understands.
//!
//! Dispatch is by lower-cased extension: DOCX, PDF, and XLSX go through their
//! format handlers when the corresponding capability is enabled; CSV is parsed
//! row-wise; everything else is decoded as UTF-8 text on a best-effort basis.
//! A disabled handler routes the file through the raw-text fallback.
//!
//! Extraction failures are non-fatal by contract: they come back as
//! [`ExtractError`] values for the caller to skip or display, never as panics.

mod delimited;
mod docx;
mod pdf;
mod sheet;

use std::path::Path;
use thiserror::Error;
use tracing::{trace, warn};

/// A per-file extraction failure.
///
/// Displays as `Error reading file '<basename>': <detail>`, suitable for
/// showing inline in place of the file's content.
#[derive(Error, Debug)]
#[error("Error reading file '{name}': {detail}")]
pub struct ExtractError {
    pub name: String,
    pub detail: String,
}

impl ExtractError {
    pub fn new(path: &Path, detail: impl std::fmt::Display) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            detail: detail.to_string(),
        }
    }
}

/// The set of optional format handlers, resolved once at startup and passed
/// in explicitly rather than consulted as global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub docx: bool,
    pub pdf: bool,
    pub xlsx: bool,
}

impl Capabilities {
    /// Every format handler enabled.
    pub fn all() -> Self {
        Self {
            docx: true,
            pdf: true,
            xlsx: true,
        }
    }

    /// No document handlers; everything is treated as raw text.
    pub fn text_only() -> Self {
        Self {
            docx: false,
            pdf: false,
            xlsx: false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

/// Extracts searchable text from files, dispatching by extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentExtractor {
    capabilities: Capabilities,
}

impl DocumentExtractor {
    pub fn new(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Returns the file's textual content.
    ///
    /// DOCX yields one line per paragraph, PDF one block per page with
    /// text-less pages skipped, XLSX one tab-joined line per row of the first
    /// sheet, CSV one `", "`-joined line per record. Any other extension is
    /// read as UTF-8 with invalid sequences replaced.
    pub fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        trace!("Extracting {} as '{}'", path.display(), ext);

        match ext.as_str() {
            "docx" if self.capabilities.docx => docx::extract(path),
            "pdf" if self.capabilities.pdf => pdf::extract(path),
            "xlsx" if self.capabilities.xlsx => sheet::extract(path),
            "csv" => delimited::extract(path),
            _ => read_text(path),
        }
    }
}

/// Raw-text fallback: best-effort UTF-8 with invalid sequences replaced.
fn read_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractError::new(path, e))?;
    let cow = String::from_utf8_lossy(&bytes);
    if let std::borrow::Cow::Owned(_) = cow {
        warn!("Invalid UTF-8 replaced in file: {}", path.display());
    }
    Ok(cow.into_owned())
}
