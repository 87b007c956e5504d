// src/document/writer.rs

use std::path::{Path, PathBuf};

use tracing::info;

use crate::dag::BatchSequence;
use crate::document::loader::format_for_path;
use crate::document::model::TaskSequenceDocument;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::types::DocumentFormat;

/// Output path next to the input: `<stem>_output.<ext>`.
///
/// JSON inputs always get a `.JSON` extension; other formats keep the
/// input's extension.
pub fn derive_output_path(input: &Path) -> Result<PathBuf> {
    let format = format_for_path(input)?;
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let ext = match format {
        DocumentFormat::Json => "JSON".to_string(),
        DocumentFormat::Toml => input
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| "toml".to_string()),
    };

    Ok(input.with_file_name(format!("{stem}_output.{ext}")))
}

/// Serialize batches as an output document.
pub fn render_document(batches: &BatchSequence, format: DocumentFormat) -> Result<String> {
    let doc = TaskSequenceDocument::from(batches.clone());

    let rendered = match format {
        DocumentFormat::Json => serde_json::to_string_pretty(&doc)?,
        DocumentFormat::Toml => toml::to_string_pretty(&doc)?,
    };

    Ok(rendered)
}

/// Render `batches` in the format implied by `path` and write them there.
pub fn write_output(fs: &dyn FileSystem, path: &Path, batches: &BatchSequence) -> Result<()> {
    let format = format_for_path(path)?;
    let rendered = render_document(batches, format)?;
    fs.write(path, rendered.as_bytes())?;

    info!(path = %path.display(), batches = batches.len(), "wrote task sequence");
    Ok(())
}
