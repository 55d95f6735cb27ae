mod pricing_policy;

pub use pricing_policy::{LaborRates, PricingPolicy, DEFAULT_MISC_PARTS, DEFAULT_TAX_RATE};
