use super::labor_hours::LaborHours;
use serde::{Deserialize, Serialize};

/// A swappable component offered within an option group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    pub name: String,
    /// Added cost; `None` or zero means the option is included at no charge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Extra labor the option brings
    #[serde(rename = "optionHours", default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<LaborHours>,
}

impl ProductOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: None,
            hours: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_hours(mut self, hours: LaborHours) -> Self {
        self.hours = Some(hours);
        self
    }

    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    pub fn hours_or_zero(&self) -> LaborHours {
        self.hours.unwrap_or(LaborHours::ZERO)
    }
}
