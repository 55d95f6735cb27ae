use crate::quoting::domain::{Catalog, ConfigurationRecord, LaborHours, OptionGroupKind};
use std::fmt;

/// A data-quality problem found in one catalog record
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// Record display name (or its position when the name is blank)
    pub record: String,
    /// Dotted path to the offending field, e.g. `displays.d1.price`
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.record, self.field, self.message)
    }
}

/// CatalogValidator - load-time data-quality check for a catalog
///
/// Runs once after loading, outside the quoting path. The calculator
/// itself accepts any numbers; this pass is what surfaces negative or
/// non-finite amounts before they turn into a wrong quote.
pub struct CatalogValidator;

impl CatalogValidator {
    pub fn validate(catalog: &Catalog) -> Vec<ValidationIssue> {
        catalog
            .records()
            .iter()
            .enumerate()
            .flat_map(|(index, record)| Self::validate_record(index, record))
            .collect()
    }

    fn validate_record(index: usize, record: &ConfigurationRecord) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let label = if record.name.trim().is_empty() {
            format!("record #{}", index + 1)
        } else {
            record.name.clone()
        };

        if record.name.trim().is_empty() {
            issues.push(ValidationIssue {
                record: label.clone(),
                field: "UCHardware".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        check_amount(&mut issues, &label, "baseprice", record.base_price);
        check_hours(&mut issues, &label, "basehours", &record.base_hours);

        for kind in OptionGroupKind::ALL {
            let group_name = group_field_name(kind);
            for (key, option) in record.option_group(kind).iter() {
                let path = format!("{}.{}", group_name, key);
                if let Some(price) = option.price {
                    check_amount(&mut issues, &label, &format!("{}.price", path), price);
                }
                if let Some(hours) = option.hours.as_ref() {
                    check_hours(&mut issues, &label, &format!("{}.optionHours", path), hours);
                }
            }
        }

        issues
    }
}

fn group_field_name(kind: OptionGroupKind) -> &'static str {
    match kind {
        OptionGroupKind::MediaSource => "mediaSources",
        OptionGroupKind::Display => "displays",
        OptionGroupKind::Camera => "camera",
        OptionGroupKind::Audio => "audio",
    }
}

fn check_amount(issues: &mut Vec<ValidationIssue>, record: &str, field: &str, value: f64) {
    if !value.is_finite() || value < 0.0 {
        issues.push(ValidationIssue {
            record: record.to_string(),
            field: field.to_string(),
            message: format!("must be a non-negative amount (got {})", value),
        });
    }
}

fn check_hours(issues: &mut Vec<ValidationIssue>, record: &str, field: &str, hours: &LaborHours) {
    const FIELD_NAMES: [&str; 4] = [
        "installHours",
        "configHours",
        "programingHours",
        "managementHours",
    ];

    for ((_, value), name) in hours.iter().zip(FIELD_NAMES) {
        if !value.is_finite() || value < 0.0 {
            issues.push(ValidationIssue {
                record: record.to_string(),
                field: format!("{}.{}", field, name),
                message: format!("must be non-negative (got {})", value),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quoting::domain::{OptionGroup, ProductOption};

    fn valid_record() -> ConfigurationRecord {
        let mut record =
            ConfigurationRecord::new("Valid", 1000.0, LaborHours::new(1.0, 1.0, 0.0, 0.0));
        record.displays = OptionGroup::new()
            .with_option("none", ProductOption::new("None"))
            .with_option("d1", ProductOption::new("4K").with_price(200.0));
        record
    }

    #[test]
    fn test_valid_catalog_has_no_issues() {
        let catalog = Catalog::new(vec![valid_record()]);
        assert!(CatalogValidator::validate(&catalog).is_empty());
    }

    #[test]
    fn test_negative_base_price() {
        let mut record = valid_record();
        record.base_price = -1.0;
        let issues = CatalogValidator::validate(&Catalog::new(vec![record]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].record, "Valid");
        assert_eq!(issues[0].field, "baseprice");
    }

    #[test]
    fn test_negative_base_hours_names_the_field() {
        let mut record = valid_record();
        record.base_hours.programming = -2.0;
        let issues = CatalogValidator::validate(&Catalog::new(vec![record]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "basehours.programingHours");
    }

    #[test]
    fn test_option_price_and_hours() {
        let mut record = valid_record();
        record.audio = OptionGroup::new().with_option(
            "bar",
            ProductOption::new("Soundbar")
                .with_price(-10.0)
                .with_hours(LaborHours::new(-1.0, 0.0, 0.0, f64::NAN)),
        );
        let issues = CatalogValidator::validate(&Catalog::new(vec![record]));
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "audio.bar.price",
                "audio.bar.optionHours.installHours",
                "audio.bar.optionHours.managementHours",
            ]
        );
    }

    #[test]
    fn test_blank_name_uses_position() {
        let mut record = valid_record();
        record.name = "  ".to_string();
        let catalog = Catalog::new(vec![valid_record(), record]);
        let issues = CatalogValidator::validate(&catalog);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].record, "record #2");
        assert_eq!(issues[0].field, "UCHardware");
    }

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue {
            record: "Kit".to_string(),
            field: "baseprice".to_string(),
            message: "must be a non-negative amount (got -1)".to_string(),
        };
        assert_eq!(
            issue.to_string(),
            "Kit: baseprice must be a non-negative amount (got -1)"
        );
    }
}
