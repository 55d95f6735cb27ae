mod catalog_reader_factory;
mod formatter_factory;
mod presenter_factory;

pub use catalog_reader_factory::{CatalogReaderFactory, CatalogSource};
pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
