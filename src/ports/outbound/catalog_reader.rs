use crate::quoting::domain::Catalog;
use crate::shared::Result;
use async_trait::async_trait;

/// CatalogReader port for loading the configuration catalog
///
/// This port abstracts where the catalog comes from (local file, remote
/// URL, data compiled into the binary). It is called once per run; the
/// returned catalog is never modified afterwards.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// Loads and parses the full catalog
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source does not exist or cannot be fetched
    /// - The content is not a valid catalog document
    async fn read_catalog(&self) -> Result<Catalog>;

    /// Human-readable description of the source, used in progress output
    fn describe_source(&self) -> String;
}

#[async_trait]
impl<T: CatalogReader + ?Sized> CatalogReader for Box<T> {
    async fn read_catalog(&self) -> Result<Catalog> {
        (**self).read_catalog().await
    }

    fn describe_source(&self) -> String {
        (**self).describe_source()
    }
}
