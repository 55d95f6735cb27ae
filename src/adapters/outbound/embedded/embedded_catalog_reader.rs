use crate::adapters::outbound::catalog_parser::{parse_catalog, CatalogFormat};
use crate::ports::outbound::CatalogReader;
use crate::quoting::domain::Catalog;
use crate::shared::Result;
use async_trait::async_trait;

const EMBEDDED_CATALOG: &str = include_str!("../../../../data/catalog.json");

/// EmbeddedCatalogReader adapter serving the sample catalog shipped with the binary
pub struct EmbeddedCatalogReader;

impl EmbeddedCatalogReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmbeddedCatalogReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogReader for EmbeddedCatalogReader {
    async fn read_catalog(&self) -> Result<Catalog> {
        parse_catalog(EMBEDDED_CATALOG, CatalogFormat::Json, "built-in catalog")
    }

    fn describe_source(&self) -> String {
        "built-in catalog".to_string()
    }
}
