//! Builder for constructing QuoteReadModel from session state
//!
//! Rendering is a pure function of the cards and metadata; all display
//! formatting goes through [`super::money`].

use super::money::{format_currency, format_hours_label, format_option_price};
use super::quote_read_model::{
    AmountsView, ChoiceView, LaborRowView, OptionRowView, ProductView, QuoteMetadataView,
    QuoteReadModel, SummaryView,
};
use crate::application::dto::QuoteResponse;
use crate::application::session::{CatalogSession, ProductCard};
use crate::quoting::domain::{OptionGroupKind, QuoteMetadata};
use crate::quoting::policies::PricingPolicy;

pub struct QuoteReadModelBuilder;

impl QuoteReadModelBuilder {
    /// Builds the read model for a finished use-case response
    pub fn build(response: &QuoteResponse) -> QuoteReadModel {
        QuoteReadModel {
            metadata: Self::build_metadata(&response.metadata),
            products: response.cards.iter().map(Self::build_product).collect(),
            summary: SummaryView {
                catalog_size: response.catalog_size,
                shown: response.cards.len(),
                issue_count: response.validation_issues.len(),
                pricing_note: Self::pricing_note(&response.pricing),
            },
        }
    }

    /// Renders the current state of an interactive session
    pub fn from_session(session: &CatalogSession, metadata: &QuoteMetadata) -> QuoteReadModel {
        let cards = session.current_results();
        QuoteReadModel {
            metadata: Self::build_metadata(metadata),
            products: cards.iter().map(Self::build_product).collect(),
            summary: SummaryView {
                catalog_size: session.catalog().len(),
                shown: cards.len(),
                issue_count: 0,
                pricing_note: None,
            },
        }
    }

    fn build_metadata(metadata: &QuoteMetadata) -> QuoteMetadataView {
        QuoteMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            quote_id: metadata.quote_id().to_string(),
        }
    }

    fn build_product(card: &ProductCard) -> ProductView {
        let record = card.record();
        let quote = card.quote();

        let options = OptionGroupKind::ALL
            .into_iter()
            .map(|kind| {
                let group = record.option_group(kind);
                let selected_key = card.selections().get(kind).map(String::from);
                let line = quote.option(kind);
                OptionRowView {
                    label: kind.label().to_string(),
                    group: kind.to_string(),
                    selected_name: line.and_then(|l| l.name.clone()),
                    price: format_option_price(line.map(|l| l.price)),
                    amount: line.map_or(0.0, |l| l.price),
                    choices: group
                        .iter()
                        .map(|(key, option)| ChoiceView {
                            key: key.to_string(),
                            name: option.name.clone(),
                            price: format_option_price(option.price),
                            selected: selected_key.as_deref() == Some(key),
                        })
                        .collect(),
                    selected_key,
                }
            })
            .collect();

        let labor = quote
            .labor
            .iter()
            .map(|line| LaborRowView {
                category: line.category,
                label: format_hours_label(line.hours, line.category),
                hours: line.hours,
                rate: line.rate,
                cost: format_currency(line.cost),
                amount: line.cost,
            })
            .collect();

        ProductView {
            name: record.name.clone(),
            image_source: record.image_source.clone(),
            manufacturer: record.manufacturer.clone(),
            platforms: record.platform.clone(),
            configurations: record
                .configuration
                .tags()
                .into_iter()
                .map(String::from)
                .collect(),
            base_price: format_currency(quote.base_price),
            options,
            misc_parts: format_currency(quote.misc_parts),
            parts_subtotal: format_currency(quote.parts_subtotal),
            labor,
            labor_subtotal: format_currency(quote.labor_subtotal),
            project_subtotal: format_currency(quote.project_subtotal),
            tax: format_currency(quote.tax),
            total: format_currency(quote.total),
            amounts: AmountsView {
                base_price: quote.base_price,
                misc_parts: quote.misc_parts,
                parts_subtotal: quote.parts_subtotal,
                labor_subtotal: quote.labor_subtotal,
                project_subtotal: quote.project_subtotal,
                tax_rate: quote.tax_rate,
                tax: quote.tax,
                total: quote.total,
            },
        }
    }

    fn pricing_note(pricing: &PricingPolicy) -> Option<String> {
        if pricing.is_default() {
            return None;
        }
        Some(format!(
            "Custom pricing: misc. parts {}, tax {}%, labor {}/{}/{}/{} per hour",
            format_currency(pricing.misc_parts),
            (pricing.tax_rate * 10000.0).round() / 100.0,
            format_currency(pricing.rates.install),
            format_currency(pricing.rates.configuration),
            format_currency(pricing.rates.programming),
            format_currency(pricing.rates.management),
        ))
    }
}
