use crate::quoting::domain::{
    ConfigurationRecord, LaborCategory, LaborHours, LaborLine, OptionGroup, OptionGroupKind,
    OptionLine, Quote, Selections,
};
use crate::quoting::policies::PricingPolicy;

/// Price and labor an option adds once its key has been looked up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOption {
    pub price: f64,
    pub hours: LaborHours,
}

impl ResolvedOption {
    pub const NONE: ResolvedOption = ResolvedOption {
        price: 0.0,
        hours: LaborHours::ZERO,
    };
}

/// QuoteCalculator service turning a record and its selections into a quote
///
/// Pure arithmetic: the calculator never fails. An empty group, an absent
/// or empty key, and a key the group does not contain all contribute
/// nothing.
#[derive(Debug, Clone, Default)]
pub struct QuoteCalculator {
    policy: PricingPolicy,
}

impl QuoteCalculator {
    pub fn new(policy: PricingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Looks up `key` in `group`, degrading to a zero contribution
    pub fn resolve_option(group: &OptionGroup, key: Option<&str>) -> ResolvedOption {
        let key = match key {
            Some(key) if !key.is_empty() && !group.is_empty() => key,
            _ => return ResolvedOption::NONE,
        };

        match group.get(key) {
            Some(option) => ResolvedOption {
                price: option.price_or_zero(),
                hours: option.hours_or_zero(),
            },
            None => ResolvedOption::NONE,
        }
    }

    /// Computes the itemized quote for `config` with `selections`
    pub fn compute(&self, config: &ConfigurationRecord, selections: &Selections) -> Quote {
        let options: Vec<OptionLine> = OptionGroupKind::ALL
            .into_iter()
            .map(|kind| {
                let group = config.option_group(kind);
                let key = selections.get(kind);
                let resolved = Self::resolve_option(group, key);
                OptionLine {
                    group: kind,
                    key: key.map(String::from),
                    name: key
                        .filter(|k| !k.is_empty())
                        .and_then(|k| group.get(k))
                        .map(|option| option.name.clone()),
                    price: resolved.price,
                    hours: resolved.hours,
                }
            })
            .collect();

        let parts_subtotal = config.base_price
            + options.iter().map(|line| line.price).sum::<f64>()
            + self.policy.misc_parts;

        let total_hours = options
            .iter()
            .fold(config.base_hours, |acc, line| acc + line.hours);

        let labor: Vec<LaborLine> = LaborCategory::ALL
            .into_iter()
            .map(|category| {
                let hours = total_hours.get(category);
                let rate = self.policy.rates.rate(category);
                LaborLine {
                    category,
                    hours,
                    rate,
                    cost: hours * rate,
                }
            })
            .collect();

        let labor_subtotal: f64 = labor.iter().map(|line| line.cost).sum();
        let project_subtotal = parts_subtotal + labor_subtotal;
        let tax = project_subtotal * self.policy.tax_rate;

        Quote {
            base_price: config.base_price,
            options,
            misc_parts: self.policy.misc_parts,
            parts_subtotal,
            total_hours,
            labor,
            labor_subtotal,
            project_subtotal,
            tax_rate: self.policy.tax_rate,
            tax,
            total: project_subtotal + tax,
        }
    }
}
