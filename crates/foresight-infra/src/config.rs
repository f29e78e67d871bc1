//! Global configuration loader for Foresight.
//!
//! Reads `config.toml` from the data directory (`~/.foresight/` by default)
//! and deserializes it into [`GlobalConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::Path;

use foresight_types::config::GlobalConfig;

/// File name of the settings file inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let path = data_dir.join(CONFIG_FILE);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                path = %path.display(),
                "no foresight config file, using built-in labels"
            );
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "foresight config unreadable, using built-in labels"
            );
            return GlobalConfig::default();
        }
    };

    toml::from_str::<GlobalConfig>(&content).unwrap_or_else(|err| {
        tracing::warn!(
            path = %path.display(),
            error = %err.message(),
            "foresight config is not valid TOML for GlobalConfig, using built-in labels"
        );
        GlobalConfig::default()
    })
}
