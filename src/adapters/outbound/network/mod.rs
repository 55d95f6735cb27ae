/// Network adapters for remote catalogs
mod http_catalog_reader;

pub use http_catalog_reader::HttpCatalogReader;
