use super::*;
use crate::quoting::domain::{
    ConfigurationRecord, ConfigurationTag, LaborHours, OptionGroup, OptionGroupKind,
    ProductOption,
};
use crate::quoting::policies::PricingPolicy;
use crate::quoting::services::FilterCriteria;
use async_trait::async_trait;
use std::cell::RefCell;

// Mock implementations for testing
struct MockCatalogReader {
    catalog: Catalog,
}

#[async_trait]
impl CatalogReader for MockCatalogReader {
    async fn read_catalog(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }

    fn describe_source(&self) -> String {
        "mock catalog".to_string()
    }
}

struct FailingCatalogReader;

#[async_trait]
impl CatalogReader for FailingCatalogReader {
    async fn read_catalog(&self) -> Result<Catalog> {
        Err(QuoteError::CatalogFetchError {
            url: "https://example.com/catalog.json".to_string(),
            details: "connection refused".to_string(),
        }
        .into())
    }

    fn describe_source(&self) -> String {
        "https://example.com/catalog.json".to_string()
    }
}

#[derive(Default)]
struct RecordingProgressReporter {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn create_record(name: &str, manufacturer: &str, room: &str) -> ConfigurationRecord {
    let mut record =
        ConfigurationRecord::new(name, 1000.0, LaborHours::new(2.0, 1.0, 0.0, 1.0));
    record.platform = vec!["Microsoft Teams".to_string()];
    record.manufacturer = manufacturer.to_string();
    record.configuration = ConfigurationTag::Single(room.to_string());
    record.displays = OptionGroup::new()
        .with_option("none", ProductOption::new("None"))
        .with_option(
            "d1",
            ProductOption::new("4K 65\"")
                .with_price(200.0)
                .with_hours(LaborHours::new(1.0, 0.0, 0.0, 0.0)),
        );
    record
}

fn create_catalog() -> Catalog {
    Catalog::new(vec![
        create_record("Rally Bar", "Logitech", "Medium Room"),
        create_record("Studio X50", "Poly", "Medium Room"),
        create_record("Rally Plus", "Logitech", "Large Room"),
    ])
}

fn create_use_case(
    catalog: Catalog,
) -> GenerateQuoteUseCase<MockCatalogReader, RecordingProgressReporter> {
    GenerateQuoteUseCase::new(
        MockCatalogReader { catalog },
        RecordingProgressReporter::default(),
    )
}

#[tokio::test]
async fn test_execute_without_filter_quotes_whole_catalog() {
    let use_case = create_use_case(create_catalog());
    let request = QuoteRequest::builder().build().unwrap();

    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.cards.len(), 3);
    assert_eq!(response.catalog_size, 3);
    assert!(response.validation_issues.is_empty());
    assert_eq!(response.cards[0].quote().parts_subtotal, 1075.0);
    assert!(response.metadata.quote_id().starts_with("urn:uuid:"));

    let messages = use_case.progress_reporter.messages.borrow();
    assert!(messages[0].contains("mock catalog"));
    assert!(messages.iter().any(|m| m.contains("Loaded 3 configuration(s)")));
}

#[tokio::test]
async fn test_execute_with_filter_and_selection() {
    let use_case = create_use_case(create_catalog());
    let request = QuoteRequest::builder()
        .criteria(FilterCriteria::new("Teams", "Logitech", "Medium Room"))
        .selection(OptionGroupKind::Display, "d1")
        .build()
        .unwrap();

    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.cards.len(), 1);
    let quote = response.cards[0].quote();
    assert_eq!(quote.parts_subtotal, 1275.0);
    assert_eq!(quote.labor_subtotal, 600.0);
    assert_eq!(quote.project_subtotal, 1875.0);
    assert!((quote.total - 1987.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_execute_with_no_match_fails() {
    let use_case = create_use_case(create_catalog());
    let request = QuoteRequest::builder()
        .criteria(FilterCriteria::new("Zoom", "Logitech", "Medium Room"))
        .build()
        .unwrap();

    let error = use_case.execute(request).await.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<QuoteError>(),
        Some(QuoteError::NoMatchingConfigurations { .. })
    ));
}

#[tokio::test]
async fn test_execute_with_name_search() {
    let use_case = create_use_case(create_catalog());
    let request = QuoteRequest::builder().name("RALLY").build().unwrap();

    let response = use_case.execute(request).await.unwrap();
    let names: Vec<&str> = response
        .cards
        .iter()
        .map(|card| card.record().name.as_str())
        .collect();
    assert_eq!(names, vec!["Rally Bar", "Rally Plus"]);
}

#[tokio::test]
async fn test_execute_with_unmatched_name_warns() {
    let use_case = create_use_case(create_catalog());
    let request = QuoteRequest::builder().name("Meetup").build().unwrap();

    let response = use_case.execute(request).await.unwrap();
    assert!(response.cards.is_empty());
    assert!(use_case.progress_reporter.errors.borrow()[0].contains("Meetup"));
}

#[tokio::test]
async fn test_execute_with_unknown_option_key_warns_and_adds_nothing() {
    let use_case = create_use_case(create_catalog());
    let request = QuoteRequest::builder()
        .selection(OptionGroupKind::Camera, "webcam")
        .build()
        .unwrap();

    let response = use_case.execute(request).await.unwrap();

    for card in &response.cards {
        assert_eq!(card.quote().parts_subtotal, 1075.0);
        assert_eq!(card.selections().get(OptionGroupKind::Camera), Some("webcam"));
    }
    let errors = use_case.progress_reporter.errors.borrow();
    assert_eq!(errors.len(), 3);
    assert!(errors[0].contains("'webcam'"));
}

#[tokio::test]
async fn test_execute_with_custom_pricing() {
    let use_case = create_use_case(create_catalog());
    let mut pricing = PricingPolicy::default();
    pricing.misc_parts = 0.0;
    pricing.tax_rate = 0.0;
    let request = QuoteRequest::builder().pricing(pricing).build().unwrap();

    let response = use_case.execute(request).await.unwrap();
    let quote = response.cards[0].quote();
    assert_eq!(quote.parts_subtotal, 1000.0);
    assert_eq!(quote.tax, 0.0);
    assert_eq!(response.pricing, pricing);
}

#[tokio::test]
async fn test_execute_warns_on_invalid_catalog() {
    let mut broken = create_record("Broken", "Logitech", "Medium Room");
    broken.base_price = -10.0;
    let use_case = create_use_case(Catalog::new(vec![broken]));
    let request = QuoteRequest::builder().build().unwrap();

    let response = use_case.execute(request).await.unwrap();
    assert_eq!(response.validation_issues.len(), 1);
    assert!(use_case.progress_reporter.errors.borrow()[0].contains("1 data issue(s)"));
}

#[tokio::test]
async fn test_execute_strict_rejects_invalid_catalog() {
    let mut broken = create_record("Broken", "Logitech", "Medium Room");
    broken.base_price = -10.0;
    let use_case = create_use_case(Catalog::new(vec![broken]));
    let request = QuoteRequest::builder().strict(true).build().unwrap();

    let error = use_case.execute(request).await.unwrap_err();
    match error.downcast_ref::<QuoteError>() {
        Some(QuoteError::InvalidCatalog { issue_count, summary }) => {
            assert_eq!(*issue_count, 1);
            assert!(summary.contains("Broken"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_execute_propagates_reader_failure() {
    let use_case = GenerateQuoteUseCase::new(
        FailingCatalogReader,
        RecordingProgressReporter::default(),
    );
    let request = QuoteRequest::builder().build().unwrap();

    let error = use_case.execute(request).await.unwrap_err();
    assert!(error.to_string().contains("connection refused"));
}
