//! Configuration file support for uc-quote.
//!
//! Provides YAML-based configuration through `uc-quote.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use uc_quote::application::dto::OutputFormat;
use uc_quote::quoting::domain::{OptionGroupKind, Selections};
use uc_quote::quoting::policies::PricingPolicy;
use uc_quote::shared::security::validate_file_size;
use uc_quote::shared::Result;

pub const CONFIG_FILENAME: &str = "uc-quote.config.yml";

/// Config files are a few lines of YAML
const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Catalog path, URL, or `builtin`
    pub catalog: Option<String>,
    pub format: Option<String>,
    pub strict: Option<bool>,
    pub filter: Option<FilterConfig>,
    pub selections: Option<SelectionsConfig>,
    pub pricing: Option<PricingPolicy>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// The three filter criteria; manufacturer and configuration are required
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    #[serde(default)]
    pub platform: String,
    pub manufacturer: String,
    pub configuration: String,
}

/// Option keys to select on every quoted product.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SelectionsConfig {
    pub display: Option<String>,
    pub audio: Option<String>,
    pub camera: Option<String>,
    pub source: Option<String>,
}

impl SelectionsConfig {
    pub fn to_selections(&self) -> Selections {
        let mut selections = Selections::none();
        selections.set(OptionGroupKind::Display, self.display.clone());
        selections.set(OptionGroupKind::Audio, self.audio.clone());
        selections.set(OptionGroupKind::Camera, self.camera.clone());
        selections.set(OptionGroupKind::MediaSource, self.source.clone());
        selections
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    if let Ok(metadata) = std::fs::metadata(path) {
        validate_file_size(metadata.len(), path, MAX_CONFIG_SIZE)?;
    }

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = &config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(filter) = &config.filter {
        if filter.manufacturer.trim().is_empty() || filter.configuration.trim().is_empty() {
            bail!(
                "Invalid config: filter.manufacturer and filter.configuration must not be empty.\n\n\
                 💡 Hint: Remove the 'filter' section to quote the whole catalog."
            );
        }
    }

    if let Some(selections) = &config.selections {
        for (group, key) in selections.to_selections().chosen() {
            if key.trim().is_empty() {
                bail!(
                    "Invalid config: selections.{} must not be empty.\n\n\
                     💡 Hint: Remove the entry to keep each product's default option.",
                    group
                );
            }
        }
    }

    if let Some(pricing) = &config.pricing {
        pricing
            .validate()
            .context("Invalid config: pricing section is out of range")?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
catalog: ./catalog.json
format: markdown
strict: true
filter:
  platform: Teams
  manufacturer: Logitech
  configuration: Medium Room
selections:
  display: dual-75
  audio: ceiling
pricing:
  misc_parts: 80.0
  tax_rate: 0.07
  rates:
    install: 110.0
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.catalog.as_deref(), Some("./catalog.json"));
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.strict, Some(true));

        let filter = config.filter.unwrap();
        assert_eq!(filter.platform, "Teams");
        assert_eq!(filter.manufacturer, "Logitech");
        assert_eq!(filter.configuration, "Medium Room");

        let selections = config.selections.unwrap().to_selections();
        assert_eq!(selections.get(OptionGroupKind::Display), Some("dual-75"));
        assert_eq!(selections.get(OptionGroupKind::Audio), Some("ceiling"));
        assert_eq!(selections.get(OptionGroupKind::Camera), None);

        let pricing = config.pricing.unwrap();
        assert_eq!(pricing.misc_parts, 80.0);
        assert_eq!(pricing.tax_rate, 0.07);
        assert_eq!(pricing.rates.install, 110.0);
        // unspecified rates keep their defaults
        assert_eq!(pricing.rates.configuration, 150.0);
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert!(config.filter.is_none());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "format: html\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid format: html"));
    }

    #[test]
    fn test_filter_requires_manufacturer_and_configuration() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "filter:\n  manufacturer: Logitech\n");
        assert!(load_config_from_path(&config_path).is_err());

        let config_path = write_config(
            &dir,
            "filter:\n  manufacturer: \"\"\n  configuration: Medium Room\n",
        );
        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("must not be empty"));
    }

    #[test]
    fn test_empty_selection_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "selections:\n  camera: \"  \"\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("selections.camera"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "pricing:\n  rates:\n    management: -5\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{:#}", err).contains("pricing"));
    }

    #[test]
    fn test_tax_rate_out_of_range_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "pricing:\n  tax_rate: 6\n");
        assert!(load_config_from_path(&config_path).is_err());
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "format: text\ndiscount_rate: true\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.unknown_fields.contains_key("discount_rate"));
    }

    #[test]
    fn test_unknown_selection_group_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "selections:\n  projector: p1\n");
        assert!(load_config_from_path(&config_path).is_err());
    }
}
