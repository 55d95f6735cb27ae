use crate::adapters::outbound::catalog_parser::{parse_catalog, CatalogFormat};
use crate::ports::outbound::CatalogReader;
use crate::quoting::domain::Catalog;
use crate::shared::error::QuoteError;
use crate::shared::security::{is_loopback_http, validate_catalog_url, MAX_CATALOG_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// HttpCatalogReader adapter for catalogs published on a web server
///
/// Only `https://` URLs are fetched, plus plain `http://` to the local
/// host. Server errors and connection failures are retried; client
/// errors (4xx) are not.
pub struct HttpCatalogReader {
    client: reqwest::Client,
    url: String,
    max_retries: u32,
    max_size: u64,
}

impl HttpCatalogReader {
    /// Creates a reader for `url` with default timeout and retry settings
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        validate_catalog_url(&url)?;

        let user_agent = format!("uc-quote/{}", env!("CARGO_PKG_VERSION"));
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if is_loopback_http(&url) {
            // only loopback is allowed over plain http, never through a proxy
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            url,
            max_retries: 3,
            max_size: MAX_CATALOG_SIZE,
        })
    }

    #[cfg(test)]
    fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    fn fetch_error(&self, details: impl Into<String>) -> QuoteError {
        QuoteError::CatalogFetchError {
            url: self.url.clone(),
            details: details.into(),
        }
    }

    /// Fetches the document with retry logic
    async fn fetch_with_retry(&self) -> Result<(String, Option<String>)> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_once().await {
                Ok(result) => return Ok(result),
                Err(FetchFailure::Permanent(details)) => return Err(self.fetch_error(details).into()),
                Err(FetchFailure::Transient(details)) => {
                    last_error = Some(details);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        let details = last_error.unwrap_or_else(|| "no attempt was made".to_string());
        Err(self.fetch_error(details).into())
    }

    async fn fetch_once(&self) -> std::result::Result<(String, Option<String>), FetchFailure> {
        let mut response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchFailure::Transient(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            return Err(FetchFailure::Permanent(format!(
                "server returned status code {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(FetchFailure::Transient(format!(
                "server returned status code {}",
                status
            )));
        }

        if let Some(length) = response.content_length() {
            if length > self.max_size {
                return Err(FetchFailure::Permanent(self.too_large(length)));
            }
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);

        // Content-Length may be absent or wrong, so the cap is enforced while reading
        let mut bytes = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FetchFailure::Transient(e.to_string()))?
        {
            if (bytes.len() + chunk.len()) as u64 > self.max_size {
                return Err(FetchFailure::Permanent(
                    self.too_large((bytes.len() + chunk.len()) as u64),
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        let body = String::from_utf8(bytes).map_err(|e| {
            FetchFailure::Permanent(format!("catalog is not valid UTF-8: {}", e))
        })?;

        Ok((body, content_type))
    }

    fn too_large(&self, length: u64) -> String {
        format!(
            "Security: catalog is too large (at least {} bytes). Maximum allowed size is {} bytes.",
            length, self.max_size
        )
    }

    /// Format from the response `Content-Type`, else from the URL path
    fn detect_format(&self, content_type: Option<&str>) -> CatalogFormat {
        content_type
            .and_then(CatalogFormat::from_content_type)
            .unwrap_or_else(|| {
                let path = self.url.split(['?', '#']).next().unwrap_or("");
                CatalogFormat::from_path(Path::new(path))
            })
    }
}

enum FetchFailure {
    Transient(String),
    Permanent(String),
}


#[async_trait]
impl CatalogReader for HttpCatalogReader {
    async fn read_catalog(&self) -> Result<Catalog> {
        let (body, content_type) = self.fetch_with_retry().await?;
        parse_catalog(&body, self.detect_format(content_type.as_deref()), &self.url)
    }

    fn describe_source(&self) -> String {
        self.url.clone()
    }
}
