//! Textual serialization of an uploaded dataset.

use foresight_types::dataset::Dataset;
use foresight_types::error::WizardError;

/// Serialize a dataset as CSV: header row first, no index column, `\n`
/// record terminators and quoting only where a field needs it.
///
/// Rows shorter or longer than the header are written as-is.
pub fn to_csv_string(dataset: &Dataset) -> Result<String, WizardError> {
    if dataset.columns.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .flexible(true)
        .from_writer(Vec::new());

    writer
        .write_record(&dataset.columns)
        .map_err(|e| WizardError::Serialize(e.to_string()))?;
    for row in &dataset.rows {
        writer
            .write_record(row)
            .map_err(|e| WizardError::Serialize(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| WizardError::Serialize(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| WizardError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use foresight_types::dataset::DatasetFormat;

    fn dataset(columns: &[&str], rows: &[&[&str]]) -> Dataset {
        Dataset::new(
            "test.csv",
            DatasetFormat::Csv,
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_header_and_rows() {
        let ds = dataset(&["temp", "speed"], &[&["1200", "3.5"], &["1180", "3.7"]]);
        assert_eq!(to_csv_string(&ds).unwrap(), "temp,speed\n1200,3.5\n1180,3.7\n");
    }

    #[test]
    fn test_quotes_only_when_needed() {
        let ds = dataset(&["name", "note"], &[&["coil, A", "say \"hi\""]]);
        assert_eq!(
            to_csv_string(&ds).unwrap(),
            "name,note\n\"coil, A\",\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_header_only() {
        let ds = dataset(&["a", "b"], &[]);
        assert_eq!(to_csv_string(&ds).unwrap(), "a,b\n");
    }

    #[test]
    fn test_no_columns_is_empty() {
        let ds = dataset(&[], &[]);
        assert_eq!(to_csv_string(&ds).unwrap(), "");
    }

    #[test]
    fn test_ragged_rows_are_written() {
        let ds = dataset(&["a", "b"], &[&["1"]]);
        assert_eq!(to_csv_string(&ds).unwrap(), "a,b\n1\n");
    }
}
