use crate::application::dto::{QuoteRequest, QuoteResponse};
use crate::application::session::{reduce, CatalogSession, SessionEvent};
use crate::ports::outbound::{CatalogReader, ProgressReporter};
use crate::quoting::domain::{Catalog, Selections};
use crate::quoting::services::{
    CatalogValidator, QuoteCalculator, QuoteMetadataGenerator, ValidationIssue,
};
use crate::shared::error::QuoteError;
use crate::shared::Result;
use std::sync::Arc;

#[cfg(test)]
mod tests;

/// Number of validation issues listed before the rest are summarized
const MAX_LISTED_ISSUES: usize = 10;

/// GenerateQuoteUseCase - Core use case for quote generation
///
/// Loads the catalog, narrows it through a [`CatalogSession`] and applies
/// the requested option selections to every remaining product.
///
/// # Type Parameters
/// * `CR` - CatalogReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateQuoteUseCase<CR, PR> {
    catalog_reader: CR,
    progress_reporter: PR,
}

impl<CR, PR> GenerateQuoteUseCase<CR, PR>
where
    CR: CatalogReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateQuoteUseCase with injected dependencies
    pub fn new(catalog_reader: CR, progress_reporter: PR) -> Self {
        Self {
            catalog_reader,
            progress_reporter,
        }
    }

    /// Executes the quote generation use case
    ///
    /// # Errors
    /// - the catalog cannot be loaded or parsed
    /// - strict mode is on and the catalog has validation issues
    /// - a filter is given and no configuration matches it
    pub async fn execute(&self, request: QuoteRequest) -> Result<QuoteResponse> {
        // Step 1: Load the catalog
        self.progress_reporter.report(&format!(
            "📖 Loading catalog from: {}",
            self.catalog_reader.describe_source()
        ));

        let catalog = self.catalog_reader.read_catalog().await?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} configuration(s)", catalog.len()));

        // Step 2: Check data quality
        let validation_issues = self.validate_catalog(&catalog, request.strict)?;

        // Step 3: Narrow the product list
        let catalog_size = catalog.len();
        let mut session =
            CatalogSession::new(Arc::new(catalog), QuoteCalculator::new(request.pricing));

        if let Some(criteria) = request.criteria {
            session = reduce(
                session,
                SessionEvent::FilterChanged {
                    criteria: criteria.clone(),
                },
            );

            if session.current_results().is_empty() {
                return Err(QuoteError::NoMatchingConfigurations {
                    platform: criteria.platform_substring,
                    manufacturer: criteria.manufacturer,
                    configuration: criteria.configuration_tag,
                }
                .into());
            }

            self.progress_reporter.report(&format!(
                "🔎 {} configuration(s) match the filter",
                session.current_results().len()
            ));
        }

        if let Some(name) = request.name {
            session = reduce(
                session,
                SessionEvent::SearchChanged {
                    query: Some(name.clone()),
                },
            );
            if session.current_results().is_empty() {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: No product name contains '{}'.",
                    name
                ));
            }
        }

        // Step 4: Apply selections to every product
        session = self.apply_selections(session, &request.selections);

        // Step 5: Generate metadata and the response
        let cards = session.into_results();
        self.progress_reporter
            .report_completion(&format!("✨ Quoted {} product(s)", cards.len()));

        Ok(QuoteResponse {
            cards,
            metadata: QuoteMetadataGenerator::generate_default_metadata(),
            catalog_size,
            validation_issues,
            pricing: request.pricing,
        })
    }

    /// Runs the catalog validator, warning or failing depending on `strict`
    fn validate_catalog(&self, catalog: &Catalog, strict: bool) -> Result<Vec<ValidationIssue>> {
        let issues = CatalogValidator::validate(catalog);
        if issues.is_empty() {
            return Ok(issues);
        }

        let mut summary: Vec<String> = issues
            .iter()
            .take(MAX_LISTED_ISSUES)
            .map(|issue| format!("  - {}", issue))
            .collect();
        if issues.len() > MAX_LISTED_ISSUES {
            summary.push(format!(
                "  ... and {} more",
                issues.len() - MAX_LISTED_ISSUES
            ));
        }
        let summary = summary.join("\n");

        if strict {
            return Err(QuoteError::InvalidCatalog {
                issue_count: issues.len(),
                summary,
            }
            .into());
        }

        self.progress_reporter.report_error(&format!(
            "⚠️  Warning: Catalog has {} data issue(s):\n{}",
            issues.len(),
            summary
        ));
        Ok(issues)
    }

    /// Sends one selection event per product and chosen group
    ///
    /// A key the product does not offer still becomes the selection (it
    /// contributes nothing to the quote) but is reported as a warning.
    fn apply_selections(
        &self,
        mut session: CatalogSession,
        selections: &Selections,
    ) -> CatalogSession {
        let chosen = selections.chosen();
        let total = session.current_results().len();
        if chosen.is_empty() || total == 0 {
            return session;
        }

        self.progress_reporter.report("🧮 Applying option selections...");

        for index in 0..total {
            let name = session.current_results()[index].record().name.clone();
            self.progress_reporter
                .report_progress(index + 1, total, Some(&name));

            for &(group, key) in &chosen {
                let offered = session.current_results()[index]
                    .record()
                    .option_group(group)
                    .contains_key(key);
                if !offered {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: {} has no {} option '{}'; it adds nothing to the quote.",
                        name, group, key
                    ));
                }

                session = reduce(
                    session,
                    SessionEvent::SelectionChanged {
                        card: index,
                        group,
                        key: Some(key.to_string()),
                    },
                );
            }
        }

        session
    }
}
