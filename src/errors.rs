// errors.rs
use thiserror::Error;

/// Errors that end a pipeline run. Unparseable money, missing area phrases and
/// zero areas are not errors; they are handled where the values are derived.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("CSV error: {0}")]
    Csv(String),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Spreadsheet error: {0}")]
    Xlsx(String),
    #[error("Viewer error: {0}")]
    Viewer(String),
}

// Type alias used by every stage.
pub type PipelineResult<T> = Result<T, PipelineError>;
