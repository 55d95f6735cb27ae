use crate::quoting::domain::LaborCategory;

/// QuoteReadModel - Query-optimized view of a rendered quote document
///
/// Every amount is pre-formatted for display; the raw figures travel
/// alongside in [`AmountsView`] for machine-readable output.
#[derive(Debug, Clone)]
pub struct QuoteReadModel {
    pub metadata: QuoteMetadataView,
    pub products: Vec<ProductView>,
    pub summary: SummaryView,
}

#[derive(Debug, Clone)]
pub struct QuoteMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub quote_id: String,
}

/// Totals over the whole document
#[derive(Debug, Clone)]
pub struct SummaryView {
    pub catalog_size: usize,
    pub shown: usize,
    pub issue_count: usize,
    /// Set when the pricing constants differ from the standard ones
    pub pricing_note: Option<String>,
}

/// One product card: identity, selected options and the quote
#[derive(Debug, Clone)]
pub struct ProductView {
    pub name: String,
    pub image_source: String,
    pub manufacturer: String,
    pub platforms: Vec<String>,
    pub configurations: Vec<String>,
    pub base_price: String,
    pub options: Vec<OptionRowView>,
    pub misc_parts: String,
    pub parts_subtotal: String,
    pub labor: Vec<LaborRowView>,
    pub labor_subtotal: String,
    pub project_subtotal: String,
    pub tax: String,
    pub total: String,
    pub amounts: AmountsView,
}

/// A group row, e.g. `Displays:  4K 65"  $200.00`
#[derive(Debug, Clone)]
pub struct OptionRowView {
    pub label: String,
    pub group: String,
    pub selected_key: Option<String>,
    pub selected_name: Option<String>,
    pub price: String,
    /// Price the selection adds, zero when nothing is charged
    pub amount: f64,
    pub choices: Vec<ChoiceView>,
}

/// An entry the user could pick in a group
#[derive(Debug, Clone)]
pub struct ChoiceView {
    pub key: String,
    pub name: String,
    pub price: String,
    pub selected: bool,
}

/// A labor row, e.g. `3 Installation Hours  $300.00`
#[derive(Debug, Clone)]
pub struct LaborRowView {
    pub category: LaborCategory,
    pub label: String,
    pub hours: f64,
    pub rate: f64,
    pub cost: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountsView {
    pub base_price: f64,
    pub misc_parts: f64,
    pub parts_subtotal: f64,
    pub labor_subtotal: f64,
    pub project_subtotal: f64,
    pub tax_rate: f64,
    pub tax: f64,
    pub total: f64,
}
