use super::labor_hours::{LaborCategory, LaborHours};
use super::option_group::OptionGroupKind;
use serde::Serialize;

/// The contribution of one option group to a quote
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionLine {
    pub group: OptionGroupKind,
    /// Selected key, as requested (may not exist in the group)
    pub key: Option<String>,
    /// Display name of the resolved option, if the key resolved
    pub name: Option<String>,
    pub price: f64,
    pub hours: LaborHours,
}

/// Hours and cost billed for one labor category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaborLine {
    pub category: LaborCategory,
    pub hours: f64,
    pub rate: f64,
    pub cost: f64,
}

/// The fixed rows of an itemized quote, in display order around the
/// option and labor rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteRow {
    BasePrice,
    MiscParts,
    PartsSubtotal,
    LaborSubtotal,
    ProjectSubtotal,
    Tax,
    Rom,
}

impl QuoteRow {
    pub fn label(self) -> &'static str {
        match self {
            QuoteRow::BasePrice => "Base Hardware Price",
            QuoteRow::MiscParts => "Misc. Parts",
            QuoteRow::PartsSubtotal => "Parts Subtotal:",
            QuoteRow::LaborSubtotal => "Labor Subtotal:",
            QuoteRow::ProjectSubtotal => "Project Subtotal:",
            QuoteRow::Tax => "Tax:",
            QuoteRow::Rom => "ROM:",
        }
    }
}

/// An itemized price quote
///
/// All amounts are kept at full precision; rounding happens only when a
/// value is formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub base_price: f64,
    pub options: Vec<OptionLine>,
    pub misc_parts: f64,
    pub parts_subtotal: f64,
    pub total_hours: LaborHours,
    pub labor: Vec<LaborLine>,
    pub labor_subtotal: f64,
    pub project_subtotal: f64,
    pub tax_rate: f64,
    pub tax: f64,
    /// Rough order of magnitude: project subtotal plus tax
    pub total: f64,
}

impl Quote {
    pub fn option(&self, group: OptionGroupKind) -> Option<&OptionLine> {
        self.options.iter().find(|line| line.group == group)
    }

    pub fn labor_line(&self, category: LaborCategory) -> Option<&LaborLine> {
        self.labor.iter().find(|line| line.category == category)
    }
}
