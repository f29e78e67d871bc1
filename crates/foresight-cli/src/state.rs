//! Application state shared by every command.

use std::path::PathBuf;

use foresight_infra::config::load_global_config;
use foresight_infra::dataset::FileDatasetSource;
use foresight_infra::filesystem::resolve_data_dir;
use foresight_types::config::GlobalConfig;

pub struct AppState {
    pub config: GlobalConfig,
    pub source: FileDatasetSource,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data directory and load `config.toml` from it.
    ///
    /// The directory is not created; a missing config simply means defaults.
    pub async fn init() -> Self {
        let data_dir = resolve_data_dir();
        let config = load_global_config(&data_dir).await;
        tracing::debug!(data_dir = %data_dir.display(), ?config, "loaded configuration");

        Self {
            source: FileDatasetSource::new(config.input.clone()),
            config,
            data_dir,
        }
    }
}
