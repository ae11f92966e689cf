// outputs/xlsx.rs
use crate::errors::{PipelineError, PipelineResult};
use std::path::Path;

pub fn write_workbook(buffer: &[u8], path: &Path) -> PipelineResult<()> {
    std::fs::write(path, buffer)
        .map_err(|e| PipelineError::Io(format!("Failed to write {}: {e}", path.display())))
}
