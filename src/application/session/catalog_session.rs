use super::product_card::ProductCard;
use super::session_event::SessionEvent;
use crate::quoting::domain::{Catalog, ConfigurationRecord};
use crate::quoting::services::{CatalogFilter, FilterCriteria, QuoteCalculator};
use std::sync::Arc;

/// The product list currently on display
///
/// The catalog is shared read-only; everything else is owned by the
/// session and replaced wholesale by [`reduce`].
#[derive(Debug, Clone)]
pub struct CatalogSession {
    catalog: Arc<Catalog>,
    calculator: QuoteCalculator,
    criteria: Option<FilterCriteria>,
    search: Option<String>,
    current_results: Vec<ProductCard>,
}

impl CatalogSession {
    /// Starts a session showing the whole catalog with default selections
    pub fn new(catalog: Arc<Catalog>, calculator: QuoteCalculator) -> Self {
        let mut session = Self {
            catalog,
            calculator,
            criteria: None,
            search: None,
            current_results: Vec::new(),
        };
        session.rebuild_results();
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> Option<&FilterCriteria> {
        self.criteria.as_ref()
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn current_results(&self) -> &[ProductCard] {
        &self.current_results
    }

    pub fn into_results(self) -> Vec<ProductCard> {
        self.current_results
    }

    fn rebuild_results(&mut self) {
        let records: Vec<ConfigurationRecord> = match &self.criteria {
            Some(criteria) => CatalogFilter::new(criteria.clone()).filter(self.catalog.records()),
            None => self.catalog.records().to_vec(),
        };

        let needle = self.search.as_ref().map(|q| q.to_lowercase());
        self.current_results = records
            .into_iter()
            .filter(|record| match &needle {
                Some(needle) => record.name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .map(|record| ProductCard::new(record, &self.calculator))
            .collect();
    }
}

/// Applies one event to the session
///
/// Filter and search changes rebuild the product list from the catalog,
/// resetting every card to its default selections. A selection change
/// re-quotes only the addressed card; an index past the end of the list
/// is ignored.
pub fn reduce(mut session: CatalogSession, event: SessionEvent) -> CatalogSession {
    match event {
        SessionEvent::FilterChanged { criteria } => {
            session.criteria = Some(criteria);
            session.rebuild_results();
        }
        SessionEvent::FilterCleared => {
            session.criteria = None;
            session.rebuild_results();
        }
        SessionEvent::SearchChanged { query } => {
            session.search = query.filter(|q| !q.trim().is_empty());
            session.rebuild_results();
        }
        SessionEvent::SelectionChanged { card, group, key } => {
            if let Some(product) = session.current_results.get_mut(card) {
                product.select(group, key, &session.calculator);
            }
        }
    }
    session
}
