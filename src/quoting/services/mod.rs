mod catalog_filter;
mod catalog_validator;
mod quote_calculator;
mod quote_metadata_generator;

pub use catalog_filter::{CatalogFilter, FilterCriteria};
pub use catalog_validator::{CatalogValidator, ValidationIssue};
pub use quote_calculator::{QuoteCalculator, ResolvedOption};
pub use quote_metadata_generator::QuoteMetadataGenerator;
