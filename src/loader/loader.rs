// loader.rs
use crate::errors::{PipelineError, PipelineResult};
use crate::loader::RawListing;
use csv::{ReaderBuilder, Trim};
use encoding_rs::WINDOWS_1252;
use log::{debug, info};
use std::fs;
use std::path::Path;

const SEPARATOR: u8 = b';';

/// Columns the pipeline cannot run without.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Preço",
    "Valor de avaliação",
    "Descrição",
    "UF",
    "Cidade",
    "Bairro",
];

pub fn load_listings(path: &Path) -> PipelineResult<Vec<RawListing>> {
    let bytes = fs::read(path)
        .map_err(|e| PipelineError::Io(format!("Failed to read {}: {e}", path.display())))?;

    let rows = parse_export(&bytes)?;
    info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parses the raw bytes of an export: Latin-1 text, `;` separated, with a
/// title line above the header.
pub fn parse_export(bytes: &[u8]) -> PipelineResult<Vec<RawListing>> {
    // windows-1252 is the WHATWG superset of Latin-1
    let (text, _, _) = WINDOWS_1252.decode(bytes);

    let body = skip_first_line(&text);

    let mut reader = ReaderBuilder::new()
        .delimiter(SEPARATOR)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| PipelineError::Csv(format!("Failed to read header row: {e}")))?
        .clone();
    debug!("Export header: {:?}", headers);

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(PipelineError::MissingColumn(column.to_string()));
        }
    }

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let mut record = result
            .map_err(|e| PipelineError::Csv(format!("Failed to read row {}: {e}", index + 1)))?;

        // Ragged rows: absent trailing fields read as empty
        while record.len() < headers.len() {
            record.push_field("");
        }

        let row = record
            .deserialize::<RawListing>(Some(&headers))
            .map_err(|e| PipelineError::Csv(format!("Failed to parse row {}: {e}", index + 1)))?;
        rows.push(row);
    }

    Ok(rows)
}

fn skip_first_line(text: &str) -> &str {
    text.split_once('\n').map(|(_, rest)| rest).unwrap_or("")
}
