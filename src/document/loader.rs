// src/document/loader.rs

use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::document::model::DependencyDocument;
use crate::errors::{Result, TaskSortError};
use crate::fs::FileSystem;
use crate::types::DocumentFormat;

/// Decide the document format from the path's extension.
pub fn format_for_path(path: &Path) -> Result<DocumentFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(DocumentFormat::from_extension)
        .ok_or_else(|| TaskSortError::UnsupportedFormat(path.to_path_buf()))
}

/// Parse a dependency document from a string.
///
/// Blank input is treated as a document with no pairs.
pub fn parse_document(contents: &str, format: DocumentFormat) -> Result<DependencyDocument> {
    if contents.trim().is_empty() {
        debug!("input document is empty; treating as zero dependency pairs");
        return Ok(DependencyDocument::default());
    }

    let doc = match format {
        DocumentFormat::Json => serde_json::from_str(contents)?,
        DocumentFormat::Toml => toml::from_str(contents)?,
    };

    Ok(doc)
}

/// Read and parse a dependency document.
///
/// This only performs deserialization; cycles are found later by the
/// scheduler.
pub fn load_from_path(fs: &dyn FileSystem, path: &Path) -> Result<DependencyDocument> {
    let format = format_for_path(path)?;
    if !fs.is_file(path) {
        return Err(TaskSortError::IoError(io::Error::new(
            io::ErrorKind::NotFound,
            format!("file not found: {}", path.display()),
        )));
    }
    let contents = fs.read_to_string(path)?;
    let doc = parse_document(&contents, format)?;

    info!(
        path = %path.display(),
        pairs = doc.pairs.len(),
        "loaded dependency document"
    );

    Ok(doc)
}
