use crate::quoting::domain::{OptionGroupKind, Selections};
use crate::quoting::policies::PricingPolicy;
use crate::quoting::services::FilterCriteria;
use crate::shared::error::QuoteError;
use crate::shared::Result;

/// QuoteRequest - Internal request DTO for the generate-quote use case
#[derive(Debug, Clone, Default)]
pub struct QuoteRequest {
    /// Filter to apply; `None` keeps the whole catalog
    pub criteria: Option<FilterCriteria>,
    /// Case-insensitive substring a product name must contain
    pub name: Option<String>,
    /// Option keys to apply on top of each product's defaults
    pub selections: Selections,
    /// Abort on catalog validation issues instead of warning
    pub strict: bool,
    pub pricing: PricingPolicy,
}

impl QuoteRequest {
    pub fn builder() -> QuoteRequestBuilder {
        QuoteRequestBuilder::default()
    }
}

/// Builder for [`QuoteRequest`] that validates inputs on `build()`
#[derive(Debug, Default)]
pub struct QuoteRequestBuilder {
    criteria: Option<FilterCriteria>,
    name: Option<String>,
    selections: Selections,
    strict: bool,
    pricing: Option<PricingPolicy>,
}

impl QuoteRequestBuilder {
    pub fn criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = Some(criteria);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn selection(mut self, group: OptionGroupKind, key: impl Into<String>) -> Self {
        self.selections.set(group, Some(key.into()));
        self
    }

    pub fn selections(mut self, selections: Selections) -> Self {
        self.selections = selections;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn pricing(mut self, pricing: PricingPolicy) -> Self {
        self.pricing = Some(pricing);
        self
    }

    /// # Errors
    /// - the name filter is blank
    /// - a selected option key is blank
    /// - the pricing policy is invalid
    pub fn build(self) -> Result<QuoteRequest> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(QuoteError::Validation {
                    message: "name filter must not be empty".to_string(),
                }
                .into());
            }
        }

        for (group, key) in self.selections.chosen() {
            if key.trim().is_empty() {
                return Err(QuoteError::Validation {
                    message: format!("{} option key must not be empty", group),
                }
                .into());
            }
        }

        let pricing = self.pricing.unwrap_or_default();
        pricing.validate()?;

        Ok(QuoteRequest {
            criteria: self.criteria,
            name: self.name,
            selections: self.selections,
            strict: self.strict,
            pricing,
        })
    }
}
