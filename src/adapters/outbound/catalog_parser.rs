//! Catalog document parsing shared by every catalog reader
//!
//! A catalog is either a bare list of configuration records or a table
//! with a `configurations` list. JSON and YAML accept both shapes; TOML
//! only the table form, written as `[[configurations]]`.

use crate::quoting::domain::{Catalog, ConfigurationRecord};
use crate::shared::error::QuoteError;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

/// Serialization format of a catalog document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogFormat {
    #[default]
    Json,
    Toml,
    Yaml,
}

impl CatalogFormat {
    /// Picks the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("toml") => CatalogFormat::Toml,
            Some("yml") | Some("yaml") => CatalogFormat::Yaml,
            _ => CatalogFormat::Json,
        }
    }

    /// Picks the format from an HTTP `Content-Type`, if it names one
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let mime = content_type.split(';').next()?.trim().to_lowercase();
        if mime.ends_with("json") {
            Some(CatalogFormat::Json)
        } else if mime.ends_with("toml") {
            Some(CatalogFormat::Toml)
        } else if mime.ends_with("yaml") || mime.ends_with("yml") {
            Some(CatalogFormat::Yaml)
        } else {
            None
        }
    }
}

#[derive(Deserialize)]
struct CatalogTable {
    #[serde(default)]
    configurations: Vec<ConfigurationRecord>,
}

/// Parses a catalog document
///
/// `source_name` only appears in error messages.
pub fn parse_catalog(content: &str, format: CatalogFormat, source_name: &str) -> Result<Catalog> {
    let records = match format {
        CatalogFormat::Json => parse_json(content),
        CatalogFormat::Toml => toml::from_str::<CatalogTable>(content)
            .map(|table| table.configurations)
            .map_err(|e| e.to_string()),
        CatalogFormat::Yaml => parse_yaml(content),
    }
    .map_err(|details| QuoteError::CatalogParseError {
        source_name: source_name.to_string(),
        details,
    })?;

    Ok(Catalog::new(records))
}

fn parse_json(content: &str) -> std::result::Result<Vec<ConfigurationRecord>, String> {
    // decide the shape up front so errors keep their line and column
    if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<ConfigurationRecord>>(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str::<CatalogTable>(content)
            .map(|table| table.configurations)
            .map_err(|e| e.to_string())
    }
}

fn parse_yaml(content: &str) -> std::result::Result<Vec<ConfigurationRecord>, String> {
    let value: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(content).map_err(|e| e.to_string())?;
    if value.is_sequence() {
        serde_yaml_ng::from_value::<Vec<ConfigurationRecord>>(value).map_err(|e| e.to_string())
    } else {
        serde_yaml_ng::from_value::<CatalogTable>(value)
            .map(|table| table.configurations)
            .map_err(|e| e.to_string())
    }
}
