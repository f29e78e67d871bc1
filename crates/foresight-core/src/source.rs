//! DatasetSource trait for abstracting dataset loading.
//!
//! Defined in foresight-core so front-ends can load uploads without depending
//! on a specific file reader. The file-backed `FileDatasetSource` lives in
//! foresight-infra.

use std::path::Path;

use foresight_types::dataset::Dataset;
use foresight_types::error::DatasetError;

/// Abstraction over reading an uploaded table.
pub trait DatasetSource: Send + Sync {
    /// Read and parse the file at `path` into a dataset.
    fn load(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<Dataset, DatasetError>> + Send;
}
