//! XLSX reader backed by calamine.
//!
//! The first row of the selected worksheet is the header. Cells are kept as
//! display text; Excel date cells are rendered as `YYYY-MM-DD HH:MM:SS`.

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, DataType, Reader, Xlsx};
use foresight_types::dataset::{Dataset, DatasetFormat};
use foresight_types::error::DatasetError;

/// Parse an XLSX workbook held in memory.
///
/// `sheet` selects a worksheet by name; the first worksheet is used when unset.
pub fn parse_workbook(
    name: &str,
    bytes: &[u8],
    sheet: Option<&str>,
) -> Result<Dataset, DatasetError> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))
        .map_err(|e: calamine::XlsxError| DatasetError::Workbook(e.to_string()))?;

    let sheet_names = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(wanted) => sheet_names
            .iter()
            .find(|s| s.as_str() == wanted)
            .cloned()
            .ok_or_else(|| DatasetError::SheetNotFound(wanted.to_string()))?,
        None => sheet_names.first().cloned().ok_or(DatasetError::Empty)?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| DatasetError::Workbook(e.to_string()))?;

    let mut rows = range.rows();
    let columns: Vec<String> = rows
        .next()
        .ok_or(DatasetError::Empty)?
        .iter()
        .map(cell_text)
        .collect();
    if columns.iter().all(|c| c.trim().is_empty()) {
        return Err(DatasetError::Empty);
    }

    let rows = rows
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    tracing::debug!(sheet = %sheet_name, "read worksheet");
    Ok(Dataset::new(name, DatasetFormat::Xlsx, columns, rows))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string(),
    }
}
