//! In-memory tabular dataset loaded from the uploaded file.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::path::Path;

/// File format of an uploaded dataset, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    Csv,
    Tsv,
    Xlsx,
}

impl DatasetFormat {
    /// Detect the format from a file path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(DatasetFormat::Csv),
            "tsv" => Some(DatasetFormat::Tsv),
            "xlsx" => Some(DatasetFormat::Xlsx),
            _ => None,
        }
    }

    /// Default field delimiter for delimited-text formats.
    pub fn default_delimiter(self) -> Option<u8> {
        match self {
            DatasetFormat::Csv => Some(b','),
            DatasetFormat::Tsv => Some(b'\t'),
            DatasetFormat::Xlsx => None,
        }
    }
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetFormat::Csv => write!(f, "csv"),
            DatasetFormat::Tsv => write!(f, "tsv"),
            DatasetFormat::Xlsx => write!(f, "xlsx"),
        }
    }
}

/// Rows x named columns. Immutable once loaded into a session.
///
/// Every cell is kept as the text it was read as; the wizard only needs the
/// column names and a faithful textual serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// File name the data came from (no directory).
    pub name: String,
    pub format: DatasetFormat,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(
        name: impl Into<String>,
        format: DatasetFormat,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            format,
            columns,
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DatasetFormat::from_path(Path::new("data/history.CSV")),
            Some(DatasetFormat::Csv)
        );
        assert_eq!(
            DatasetFormat::from_path(Path::new("book.xlsx")),
            Some(DatasetFormat::Xlsx)
        );
        assert_eq!(DatasetFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(DatasetFormat::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn test_default_delimiter() {
        assert_eq!(DatasetFormat::Csv.default_delimiter(), Some(b','));
        assert_eq!(DatasetFormat::Tsv.default_delimiter(), Some(b'\t'));
        assert_eq!(DatasetFormat::Xlsx.default_delimiter(), None);
    }

    #[test]
    fn test_dataset_accessors() {
        let dataset = Dataset::new(
            "mill.csv",
            DatasetFormat::Csv,
            vec!["temp".to_string(), "speed".to_string()],
            vec![vec!["1".to_string(), "2".to_string()]],
        );
        assert_eq!(dataset.columns, ["temp", "speed"]);
        assert_eq!(dataset.row_count(), 1);
    }
}
