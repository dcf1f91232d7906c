//! Configuration file support for depsnap.
//!
//! Provides YAML-based configuration through `depsnap.config.yml` files,
//! including loading, validation and merging with command-line flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::dependencies::domain::ScopeId;
use crate::shared::security::{read_input_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depsnap.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    /// Built-in filters to leave out of the pipeline, by name.
    pub disabled_filters: Option<Vec<String>>,
    /// Only print this scope's snapshot.
    pub scope: Option<ScopeId>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective options after command-line flags are applied over the config file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub format: OutputFormat,
    pub disabled_filters: Vec<String>,
    pub scope: Option<ScopeId>,
}

impl Settings {
    /// Flags win over the config file; the config file wins over defaults.
    pub fn resolve(
        format: Option<OutputFormat>,
        scope: Option<ScopeId>,
        config: Option<ConfigFile>,
    ) -> Self {
        let config = config.unwrap_or_default();
        Self {
            format: format.or(config.format).unwrap_or_default(),
            disabled_filters: config.disabled_filters.unwrap_or_default(),
            scope: scope.or(config.scope),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_input_file(path, "config file", MAX_INPUT_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML and 'format' is json or text.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(target: "depsnap::config", path = %path.display(), "Config loaded");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    for (i, name) in config.disabled_filters.iter().flatten().enumerate() {
        if name.trim().is_empty() {
            bail!(
                "Invalid config: disabled_filters[{}] must not be empty.\n\n\
                 💡 Hint: Use a filter name such as \"implicit-dependencies\" or \"sdk-and-packages\".",
                i
            );
        }
    }
    if config
        .scope
        .as_ref()
        .is_some_and(|scope| scope.as_str().trim().is_empty())
    {
        bail!("Invalid config: scope must not be empty.");
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::warn!(target: "depsnap::config", field = %key, "Unknown config field");
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "config.yml",
            r#"
format: text
disabled_filters:
  - implicit-dependencies
scope: net8.0
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Text));
        assert_eq!(
            config.disabled_filters.as_deref(),
            Some(&["implicit-dependencies".to_string()][..])
        );
        assert_eq!(config.scope, Some(ScopeId::new("net8.0")));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());

        write_config(&dir, CONFIG_FILENAME, "format: json\n");
        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/depsnap.config.yml"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_invalid_format_value() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "config.yml", "format: markdown\n");
        let err = load_config_from_path(&path).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_filter_name_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "config.yml", "disabled_filters: [\"  \"]\n");
        let err = load_config_from_path(&path).unwrap_err().to_string();
        assert!(err.contains("disabled_filters[0] must not be empty"));
    }

    #[test]
    fn test_unknown_fields_are_captured() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "config.yml", "format: json\ncheck_cve: true\n");
        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.unknown_fields.len(), 1);
        assert!(config.unknown_fields.contains_key("check_cve"));
    }

    #[test]
    fn test_settings_precedence() {
        let config = ConfigFile {
            format: Some(OutputFormat::Text),
            disabled_filters: Some(vec!["sdk-and-packages".to_string()]),
            scope: Some(ScopeId::new("net472")),
            unknown_fields: HashMap::new(),
        };
        let settings = Settings::resolve(Some(OutputFormat::Json), None, Some(config));

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.scope, Some(ScopeId::new("net472")));
        assert_eq!(settings.disabled_filters, vec!["sdk-and-packages".to_string()]);

        assert_eq!(Settings::resolve(None, None, None), Settings::default());
    }
}
