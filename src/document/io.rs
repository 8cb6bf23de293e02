//! Reading and writing configuration documents on disk.

use super::ConfigDocument;
use crate::error::DocumentError;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Load a UTF-8 JSON file whose root is an object.
pub fn load_document(path: &Path) -> Result<ConfigDocument, DocumentError> {
    let text = std::fs::read_to_string(path)?;
    let body = text.strip_prefix(UTF8_BOM).unwrap_or(&text);
    let document = ConfigDocument::from_json_str(body)?;
    tracing::debug!(
        path = %path.display(),
        modules = document.len(),
        "Loaded configuration document"
    );
    Ok(document)
}

/// Write a document as pretty JSON, creating or truncating the file.
///
/// The parent directory must already exist.
pub fn save_document(document: &ConfigDocument, path: &Path) -> Result<(), DocumentError> {
    let text = document.to_pretty_string()?;
    std::fs::write(path, text.as_bytes())?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "Saved configuration document");
    Ok(())
}
