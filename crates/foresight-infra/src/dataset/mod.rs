//! File-backed dataset source.
//!
//! Picks a reader from the file extension: `csv` / `tsv` go through the
//! delimited-text reader, `xlsx` through the workbook reader.

pub mod delimited;
pub mod workbook;

use std::path::Path;

use foresight_core::source::DatasetSource;
use foresight_types::config::InputConfig;
use foresight_types::dataset::{Dataset, DatasetFormat};
use foresight_types::error::DatasetError;

/// Loads uploads from the local filesystem.
pub struct FileDatasetSource {
    input: InputConfig,
}

impl FileDatasetSource {
    pub fn new(input: InputConfig) -> Self {
        Self { input }
    }
}

impl DatasetSource for FileDatasetSource {
    async fn load(&self, path: &Path) -> Result<Dataset, DatasetError> {
        let format = DatasetFormat::from_path(path).ok_or_else(|| {
            DatasetError::UnsupportedFormat(
                path.extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or_default()
                    .to_string(),
            )
        })?;
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("dataset")
            .to_string();

        tracing::debug!(file = %path.display(), %format, bytes = bytes.len(), "parsing dataset");
        parse_dataset(&name, format, &bytes, &self.input)
    }
}

/// Parse raw file bytes already identified as `format`.
pub fn parse_dataset(
    name: &str,
    format: DatasetFormat,
    bytes: &[u8],
    input: &InputConfig,
) -> Result<Dataset, DatasetError> {
    match format {
        DatasetFormat::Csv | DatasetFormat::Tsv => {
            let delimiter = resolve_delimiter(format, input.csv_delimiter);
            delimited::parse_delimited(name, format, bytes, delimiter)
        }
        DatasetFormat::Xlsx => workbook::parse_workbook(name, bytes, input.excel_sheet.as_deref()),
    }
}

/// Configured delimiter when it is a single ASCII character, else the
/// format's default.
fn resolve_delimiter(format: DatasetFormat, configured: Option<char>) -> u8 {
    let fallback = format.default_delimiter().unwrap_or(b',');
    match configured {
        Some(c) if c.is_ascii() => c as u8,
        Some(c) => {
            tracing::warn!("Ignoring non-ASCII csv_delimiter {c:?}, using default");
            fallback
        }
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_csv_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.csv");
        tokio::fs::write(&path, "temp,speed\n1200,3.5\n").await.unwrap();

        let source = FileDatasetSource::new(InputConfig::default());
        let dataset = source.load(&path).await.unwrap();
        assert_eq!(dataset.name, "history.csv");
        assert_eq!(dataset.format, DatasetFormat::Csv);
        assert_eq!(dataset.columns, vec!["temp", "speed"]);
        assert_eq!(dataset.rows, vec![vec!["1200", "3.5"]]);
    }

    #[tokio::test]
    async fn test_load_tsv_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.tsv");
        tokio::fs::write(&path, "a\tb\n1\t2\n").await.unwrap();

        let source = FileDatasetSource::new(InputConfig::default());
        let dataset = source.load(&path).await.unwrap();
        assert_eq!(dataset.columns, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_configured_delimiter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.csv");
        tokio::fs::write(&path, "a;b\n1;2\n").await.unwrap();

        let source = FileDatasetSource::new(InputConfig {
            csv_delimiter: Some(';'),
            excel_sheet: None,
        });
        let dataset = source.load(&path).await.unwrap();
        assert_eq!(dataset.columns, vec!["a", "b"]);
        assert_eq!(dataset.rows, vec![vec!["1", "2"]]);
    }

    #[tokio::test]
    async fn test_load_xlsx_with_configured_sheet() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/mill.xlsx");

        let source = FileDatasetSource::new(InputConfig {
            csv_delimiter: None,
            excel_sheet: Some("notes".to_string()),
        });
        let dataset = source.load(&path).await.unwrap();
        assert_eq!(dataset.format, DatasetFormat::Xlsx);
        assert_eq!(dataset.columns, vec!["shift", "operator"]);
        assert_eq!(dataset.rows, vec![vec!["night", "Ana"]]);
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        tokio::fs::write(&path, "{}").await.unwrap();

        let source = FileDatasetSource::new(InputConfig::default());
        let err = source.load(&path).await.unwrap_err();
        assert!(matches!(err, DatasetError::UnsupportedFormat(ext) if ext == "json"));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let source = FileDatasetSource::new(InputConfig::default());
        let err = source.load(&dir.path().join("gone.csv")).await.unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }

    #[test]
    fn test_resolve_delimiter() {
        assert_eq!(resolve_delimiter(DatasetFormat::Csv, None), b',');
        assert_eq!(resolve_delimiter(DatasetFormat::Tsv, None), b'\t');
        assert_eq!(resolve_delimiter(DatasetFormat::Csv, Some('|')), b'|');
        assert_eq!(resolve_delimiter(DatasetFormat::Csv, Some('é')), b',');
    }
}
