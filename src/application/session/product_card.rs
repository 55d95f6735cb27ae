use crate::quoting::domain::{ConfigurationRecord, OptionGroupKind, Quote, Selections};
use crate::quoting::services::QuoteCalculator;

/// One product in the displayed list, with its current selections and quote
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    record: ConfigurationRecord,
    selections: Selections,
    quote: Quote,
}

impl ProductCard {
    /// Creates a card with the first option of every group selected
    pub fn new(record: ConfigurationRecord, calculator: &QuoteCalculator) -> Self {
        let selections = record.default_selections();
        let quote = calculator.compute(&record, &selections);
        Self {
            record,
            selections,
            quote,
        }
    }

    /// Changes one group's selection and recomputes the quote
    pub fn select(
        &mut self,
        group: OptionGroupKind,
        key: Option<String>,
        calculator: &QuoteCalculator,
    ) {
        self.selections.set(group, key);
        self.quote = calculator.compute(&self.record, &self.selections);
    }

    pub fn record(&self) -> &ConfigurationRecord {
        &self.record
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn quote(&self) -> &Quote {
        &self.quote
    }
}
