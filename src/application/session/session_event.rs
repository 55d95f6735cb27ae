use crate::quoting::domain::OptionGroupKind;
use crate::quoting::services::FilterCriteria;

/// A user action on the product list
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// New filter criteria; rebuilds the product list with default selections
    FilterChanged { criteria: FilterCriteria },
    /// Drops the filter and shows the whole catalog again
    FilterCleared,
    /// New name search; `None` clears it
    SearchChanged { query: Option<String> },
    /// One product's option changed; only that product is re-quoted
    SelectionChanged {
        card: usize,
        group: OptionGroupKind,
        key: Option<String>,
    },
}
