/// Catalog data compiled into the binary
mod embedded_catalog_reader;

pub use embedded_catalog_reader::EmbeddedCatalogReader;
