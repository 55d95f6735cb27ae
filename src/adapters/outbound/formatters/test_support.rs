use crate::application::dto::QuoteResponse;
use crate::application::read_models::{QuoteReadModel, QuoteReadModelBuilder};
use crate::application::session::ProductCard;
use crate::quoting::domain::{
    ConfigurationRecord, ConfigurationTag, LaborHours, OptionGroup, OptionGroupKind,
    ProductOption, QuoteMetadata,
};
use crate::quoting::policies::PricingPolicy;
use crate::quoting::services::QuoteCalculator;

/// Rally Bar with the 4K display selected: parts $1275, labor $600, ROM $1987.50
pub(crate) fn sample_read_model() -> QuoteReadModel {
    let mut record =
        ConfigurationRecord::new("Rally Bar", 1000.0, LaborHours::new(2.0, 1.0, 0.0, 1.0));
    record.image_source = "images/rally-bar.png".to_string();
    record.platform = vec!["Microsoft Teams".to_string(), "Zoom Rooms".to_string()];
    record.manufacturer = "Logitech".to_string();
    record.configuration = ConfigurationTag::Single("Medium Room".to_string());
    record.displays = OptionGroup::new()
        .with_option("none", ProductOption::new("None"))
        .with_option(
            "d1",
            ProductOption::new("4K 65\"")
                .with_price(200.0)
                .with_hours(LaborHours::new(1.0, 0.0, 0.0, 0.0)),
        );

    let calculator = QuoteCalculator::default();
    let mut card = ProductCard::new(record, &calculator);
    card.select(OptionGroupKind::Display, Some("d1".to_string()), &calculator);

    QuoteReadModelBuilder::build(&QuoteResponse {
        cards: vec![card],
        metadata: QuoteMetadata::new(
            "2024-01-15T10:30:00Z".to_string(),
            "uc-quote".to_string(),
            "0.4.0".to_string(),
            "urn:uuid:12345678-1234-1234-1234-123456789012".to_string(),
        ),
        catalog_size: 3,
        validation_issues: vec![],
        pricing: PricingPolicy::default(),
    })
}
