use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uc_quote::prelude::*;

/// Mock CatalogReader for testing
///
/// Serves a fixed catalog and counts how often it was read.
pub struct MockCatalogReader {
    pub catalog: Catalog,
    pub should_fail: bool,
    pub reads: Arc<AtomicUsize>,
}

impl MockCatalogReader {
    pub fn new(records: Vec<ConfigurationRecord>) -> Self {
        Self {
            catalog: Catalog::new(records),
            should_fail: false,
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            catalog: Catalog::default(),
            should_fail: true,
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogReader for MockCatalogReader {
    async fn read_catalog(&self) -> Result<Catalog> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock catalog read failure");
        }
        Ok(self.catalog.clone())
    }

    fn describe_source(&self) -> String {
        "mock catalog".to_string()
    }
}
