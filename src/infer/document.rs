//! Scope document ingestion.

use std::path::Path;

use crate::error::DocumentError;

/// Read a job description from a scope document.
///
/// Plain text formats only; anything else is rejected by extension rather
/// than guessed at.
pub fn load_description(path: &Path) -> Result<String, DocumentError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_lowercase();

    match extension.as_str() {
        "txt" | "md" | "text" => {
            let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!(path = %path.display(), bytes = text.len(), "loaded scope document");
            Ok(text)
        }
        _ => Err(DocumentError::Unsupported { extension }),
    }
}
