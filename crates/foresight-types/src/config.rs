//! Global configuration types for Foresight.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls how
//! prompts are rendered and how uploaded files are read.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the wizard.
///
/// Loaded from `~/.foresight/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Separator placed between items of a multi-choice answer in the prompt.
    #[serde(default = "default_list_separator")]
    pub list_separator: String,

    /// Text rendered in place of a missing single-value answer.
    #[serde(default = "default_undefined_label")]
    pub undefined_label: String,

    #[serde(default)]
    pub input: InputConfig,
}

fn default_list_separator() -> String {
    ", ".to_string()
}

fn default_undefined_label() -> String {
    "Not defined".to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            list_separator: default_list_separator(),
            undefined_label: default_undefined_label(),
            input: InputConfig::default(),
        }
    }
}

/// How uploaded files are parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Override the delimiter for CSV/TSV files (e.g. `';'`).
    #[serde(default)]
    pub csv_delimiter: Option<char>,

    /// Worksheet to read from XLSX workbooks. First sheet when unset.
    #[serde(default)]
    pub excel_sheet: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.list_separator, ", ");
        assert_eq!(config.undefined_label, "Not defined");
        assert!(config.input.csv_delimiter.is_none());
        assert!(config.input.excel_sheet.is_none());
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let toml_str = r#"
list_separator = "; "
undefined_label = "n/a"

[input]
csv_delimiter = ";"
excel_sheet = "History"
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.list_separator, "; ");
        assert_eq!(config.undefined_label, "n/a");
        assert_eq!(config.input.csv_delimiter, Some(';'));
        assert_eq!(config.input.excel_sheet.as_deref(), Some("History"));
    }
}
