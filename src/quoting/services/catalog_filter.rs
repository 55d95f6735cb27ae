use crate::quoting::domain::ConfigurationRecord;
use serde::{Deserialize, Serialize};

/// User-supplied criteria for narrowing the catalog
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Matched as a substring of any platform tag
    pub platform_substring: String,
    /// Matched exactly
    pub manufacturer: String,
    /// Matched by membership (tag list) or equality (single tag)
    pub configuration_tag: String,
}

impl FilterCriteria {
    pub fn new(
        platform_substring: impl Into<String>,
        manufacturer: impl Into<String>,
        configuration_tag: impl Into<String>,
    ) -> Self {
        Self {
            platform_substring: platform_substring.into(),
            manufacturer: manufacturer.into(),
            configuration_tag: configuration_tag.into(),
        }
    }
}

/// CatalogFilter - selects the records matching a set of criteria
///
/// The three checks are applied literally, with no special-casing of empty
/// strings:
/// - an empty platform substring matches any record with at least one
///   platform tag, and never a record without tags
/// - an empty manufacturer or configuration tag only matches an empty value
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    criteria: FilterCriteria,
}

impl CatalogFilter {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Returns the matching records in their original order
    pub fn filter(&self, records: &[ConfigurationRecord]) -> Vec<ConfigurationRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }

    pub fn matches(&self, record: &ConfigurationRecord) -> bool {
        self.matches_platform(record)
            && record.manufacturer == self.criteria.manufacturer
            && record
                .configuration
                .contains(&self.criteria.configuration_tag)
    }

    fn matches_platform(&self, record: &ConfigurationRecord) -> bool {
        record
            .platform
            .iter()
            .any(|tag| tag.contains(self.criteria.platform_substring.as_str()))
    }
}
