use crate::errors::{PipelineError, PipelineResult};
use maud::Markup;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes the page to `target`, or to a temp file that outlives the process
/// so the viewer can still read it.
pub fn write_page(markup: Markup, target: Option<&Path>) -> PipelineResult<PathBuf> {
    let body = markup.into_string();

    if let Some(path) = target {
        std::fs::write(path, body.as_bytes())
            .map_err(|e| PipelineError::Io(format!("Failed to write {}: {e}", path.display())))?;
        return Ok(path.to_path_buf());
    }

    let mut file = tempfile::Builder::new()
        .prefix("price_map_")
        .suffix(".html")
        .tempfile()
        .map_err(|e| PipelineError::Io(format!("Failed to create temp file: {e}")))?;

    file.write_all(body.as_bytes())
        .map_err(|e| PipelineError::Io(format!("Failed to write temp file: {e}")))?;

    let (_, path) = file
        .keep()
        .map_err(|e| PipelineError::Io(format!("Failed to keep temp file: {e}")))?;

    Ok(path)
}
