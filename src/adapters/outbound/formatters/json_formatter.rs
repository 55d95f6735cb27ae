use crate::application::read_models::{
    LaborRowView, OptionRowView, ProductView, QuoteMetadataView, QuoteReadModel,
};
use crate::ports::outbound::QuoteFormatter;
use crate::quoting::domain::LaborCategory;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteDocument {
    quote_id: String,
    generated_at: String,
    tool: Tool,
    catalog_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pricing_note: Option<String>,
    products: Vec<Product>,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Product {
    name: String,
    manufacturer: String,
    platforms: Vec<String>,
    configurations: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    image_source: String,
    base_price: f64,
    options: Vec<SelectedOption>,
    misc_parts: f64,
    parts_subtotal: f64,
    labor: Vec<Labor>,
    labor_subtotal: f64,
    project_subtotal: f64,
    tax_rate: f64,
    tax: f64,
    total: f64,
    display: DisplayText,
}

#[derive(Debug, Serialize)]
struct SelectedOption {
    group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    price: f64,
}

#[derive(Debug, Serialize)]
struct Labor {
    category: LaborCategory,
    hours: f64,
    rate: f64,
    cost: f64,
}

/// The same figures as rendered for people, so consumers need no rounding rules
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DisplayText {
    parts_subtotal: String,
    labor_subtotal: String,
    project_subtotal: String,
    tax: String,
    total: String,
}

/// JsonFormatter adapter for machine-readable quote output
///
/// Amounts are emitted unrounded; the `display` block carries the
/// formatted strings.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_document(model: &QuoteReadModel) -> QuoteDocument {
        let QuoteMetadataView {
            timestamp,
            tool_name,
            tool_version,
            quote_id,
        } = &model.metadata;

        QuoteDocument {
            quote_id: quote_id.clone(),
            generated_at: timestamp.clone(),
            tool: Tool {
                name: tool_name.clone(),
                version: tool_version.clone(),
            },
            catalog_size: model.summary.catalog_size,
            pricing_note: model.summary.pricing_note.clone(),
            products: model.products.iter().map(Self::build_product).collect(),
        }
    }

    fn build_product(product: &ProductView) -> Product {
        let amounts = &product.amounts;
        Product {
            name: product.name.clone(),
            manufacturer: product.manufacturer.clone(),
            platforms: product.platforms.clone(),
            configurations: product.configurations.clone(),
            image_source: product.image_source.clone(),
            base_price: amounts.base_price,
            options: product.options.iter().map(Self::build_option).collect(),
            misc_parts: amounts.misc_parts,
            parts_subtotal: amounts.parts_subtotal,
            labor: product.labor.iter().map(Self::build_labor).collect(),
            labor_subtotal: amounts.labor_subtotal,
            project_subtotal: amounts.project_subtotal,
            tax_rate: amounts.tax_rate,
            tax: amounts.tax,
            total: amounts.total,
            display: DisplayText {
                parts_subtotal: product.parts_subtotal.clone(),
                labor_subtotal: product.labor_subtotal.clone(),
                project_subtotal: product.project_subtotal.clone(),
                tax: product.tax.clone(),
                total: product.total.clone(),
            },
        }
    }

    fn build_option(row: &OptionRowView) -> SelectedOption {
        SelectedOption {
            group: row.group.clone(),
            key: row.selected_key.clone(),
            name: row.selected_name.clone(),
            price: row.amount,
        }
    }

    fn build_labor(row: &LaborRowView) -> Labor {
        Labor {
            category: row.category,
            hours: row.hours,
            rate: row.rate,
            cost: row.amount,
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteFormatter for JsonFormatter {
    fn format(&self, model: &QuoteReadModel) -> Result<String> {
        let document = Self::build_document(model);
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
