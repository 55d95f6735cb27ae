//! Read models for CQRS-lite pattern
//!
//! View-optimized structs holding display-ready text for each product
//! card, plus the formatting rules for money and hours.

pub mod money;
mod quote_read_model;
mod quote_read_model_builder;

pub use quote_read_model::{
    AmountsView, ChoiceView, LaborRowView, OptionRowView, ProductView, QuoteMetadataView,
    QuoteReadModel, SummaryView,
};
pub use quote_read_model_builder::QuoteReadModelBuilder;
