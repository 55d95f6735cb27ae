//! uc-quote - hardware catalog browser and ROM quote calculator
//!
//! This library loads a catalog of unified-communications room bundles,
//! narrows it with a platform / manufacturer / room-configuration filter and
//! computes an itemized Rough Order of Magnitude quote for each bundle,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`quoting`): Catalog model, filter and quote calculator
//! - **Application Layer** (`application`): Use cases, session state and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use uc_quote::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let catalog_reader = EmbeddedCatalogReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateQuoteUseCase::new(catalog_reader, progress_reporter);
//!
//! // Execute
//! let request = QuoteRequest::builder()
//!     .criteria(FilterCriteria::new("Teams", "Logitech", "Medium Room"))
//!     .selection(OptionGroupKind::Display, "dual-65")
//!     .build()?;
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let model = QuoteReadModelBuilder::build(&response);
//! let output = MarkdownFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod quoting;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::embedded::EmbeddedCatalogReader;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemCatalogReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::network::HttpCatalogReader;
    pub use crate::application::dto::{OutputFormat, QuoteRequest, QuoteResponse};
    pub use crate::application::read_models::{QuoteReadModel, QuoteReadModelBuilder};
    pub use crate::application::session::{reduce, CatalogSession, ProductCard, SessionEvent};
    pub use crate::application::use_cases::GenerateQuoteUseCase;
    pub use crate::ports::outbound::{
        CatalogReader, OutputPresenter, ProgressReporter, QuoteFormatter,
    };
    pub use crate::quoting::domain::{
        Catalog, ConfigurationRecord, ConfigurationTag, LaborCategory, LaborHours, OptionGroup,
        OptionGroupKind, ProductOption, Quote, Selections,
    };
    pub use crate::quoting::policies::PricingPolicy;
    pub use crate::quoting::services::{
        CatalogFilter, CatalogValidator, FilterCriteria, QuoteCalculator,
    };
    pub use crate::shared::Result;
}
