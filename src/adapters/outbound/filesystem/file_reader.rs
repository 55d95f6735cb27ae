use crate::adapters::outbound::catalog_parser::{parse_catalog, CatalogFormat};
use crate::ports::outbound::CatalogReader;
use crate::quoting::domain::Catalog;
use crate::shared::error::QuoteError;
use crate::shared::security::{validate_regular_file, MAX_CATALOG_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;

/// FileSystemCatalogReader adapter for catalogs stored on disk
///
/// The format follows the file extension (`.json`, `.toml`, `.yml`,
/// `.yaml`); anything else is read as JSON.
pub struct FileSystemCatalogReader {
    path: PathBuf,
}

impl FileSystemCatalogReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the file after the symlink and size checks
    fn safe_read_file(&self) -> Result<String> {
        validate_regular_file(&self.path, "catalog", MAX_CATALOG_SIZE).map_err(|e| {
            QuoteError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;

        fs::read_to_string(&self.path).map_err(|e| {
            QuoteError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl CatalogReader for FileSystemCatalogReader {
    async fn read_catalog(&self) -> Result<Catalog> {
        if !self.path.exists() {
            return Err(QuoteError::CatalogNotFound {
                path: self.path.clone(),
                suggestion: "Check the --catalog path, pass an https:// URL, or omit --catalog to use the built-in catalog".to_string(),
            }
            .into());
        }

        let content = self.safe_read_file()?;
        parse_catalog(
            &content,
            CatalogFormat::from_path(&self.path),
            &self.path.display().to_string(),
        )
    }

    fn describe_source(&self) -> String {
        self.path.display().to_string()
    }
}
