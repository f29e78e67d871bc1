//! CSV / TSV reader.

use foresight_types::dataset::{Dataset, DatasetFormat};
use foresight_types::error::DatasetError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse delimited text with a header row.
///
/// Rows with fewer fields than the header are padded with empty cells; rows
/// with more fields are rejected. Blank lines are skipped.
pub fn parse_delimited(
    name: &str,
    format: DatasetFormat,
    bytes: &[u8],
    delimiter: u8,
) -> Result<Dataset, DatasetError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| DatasetError::Csv(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if columns.iter().all(|c| c.trim().is_empty()) {
        return Err(DatasetError::Empty);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| DatasetError::Csv(e.to_string()))?;
        if record.len() > columns.len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(DatasetError::Csv(format!(
                "line {line}: expected {} fields, found {}",
                columns.len(),
                record.len()
            )));
        }
        let mut row: Vec<String> = record.iter().map(|f| f.to_string()).collect();
        row.resize(columns.len(), String::new());
        rows.push(row);
    }

    Ok(Dataset::new(name, format, columns, rows))
}
