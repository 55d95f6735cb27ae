use crate::application::session::ProductCard;
use crate::quoting::domain::QuoteMetadata;
use crate::quoting::policies::PricingPolicy;
use crate::quoting::services::ValidationIssue;

/// QuoteResponse - Internal response DTO from the generate-quote use case
///
/// Carries the final product cards, which adapters turn into a read model
/// and then into the chosen output format.
#[derive(Debug, Clone)]
pub struct QuoteResponse {
    /// Products left after filtering, each with selections and quote
    pub cards: Vec<ProductCard>,
    pub metadata: QuoteMetadata,
    /// Number of records in the loaded catalog
    pub catalog_size: usize,
    /// Data-quality issues found at load time (empty when clean)
    pub validation_issues: Vec<ValidationIssue>,
    pub pricing: PricingPolicy,
}
