use crate::quoting::domain::LaborCategory;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Flat charge added to every parts subtotal
pub const DEFAULT_MISC_PARTS: f64 = 75.0;

/// Sales tax applied to the project subtotal
pub const DEFAULT_TAX_RATE: f64 = 0.06;

/// Hourly labor rates, one per category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaborRates {
    pub install: f64,
    pub configuration: f64,
    pub programming: f64,
    pub management: f64,
}

impl LaborRates {
    pub fn rate(&self, category: LaborCategory) -> f64 {
        match category {
            LaborCategory::Install => self.install,
            LaborCategory::Configuration => self.configuration,
            LaborCategory::Programming => self.programming,
            LaborCategory::Management => self.management,
        }
    }
}

impl Default for LaborRates {
    fn default() -> Self {
        Self {
            install: 100.0,
            configuration: 150.0,
            programming: 150.0,
            management: 150.0,
        }
    }
}

/// PricingPolicy holds the constants the quote calculator applies on top
/// of catalog data
///
/// The default is the standard price sheet: $75 misc parts, $100/h install,
/// $150/h for configuration, programming and management, 6% tax.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingPolicy {
    pub misc_parts: f64,
    pub tax_rate: f64,
    pub rates: LaborRates,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            misc_parts: DEFAULT_MISC_PARTS,
            tax_rate: DEFAULT_TAX_RATE,
            rates: LaborRates::default(),
        }
    }
}

impl PricingPolicy {
    pub fn is_default(&self) -> bool {
        *self == PricingPolicy::default()
    }

    /// Rejects policies that would produce meaningless quotes
    ///
    /// # Errors
    /// - misc parts charge negative or not finite
    /// - tax rate outside `[0, 1]`
    /// - any labor rate negative or not finite
    pub fn validate(&self) -> Result<()> {
        if !self.misc_parts.is_finite() || self.misc_parts < 0.0 {
            anyhow::bail!(
                "Invalid pricing: misc_parts must be a non-negative amount (got {})",
                self.misc_parts
            );
        }

        if !(0.0..=1.0).contains(&self.tax_rate) {
            anyhow::bail!(
                "Invalid pricing: tax_rate must be between 0 and 1 (got {}). Use 0.06 for 6%.",
                self.tax_rate
            );
        }

        for category in LaborCategory::ALL {
            let rate = self.rates.rate(category);
            if !rate.is_finite() || rate < 0.0 {
                anyhow::bail!(
                    "Invalid pricing: {} rate must be a non-negative amount (got {})",
                    category.label(),
                    rate
                );
            }
        }

        Ok(())
    }
}
