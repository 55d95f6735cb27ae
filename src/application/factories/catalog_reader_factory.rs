use crate::adapters::outbound::embedded::EmbeddedCatalogReader;
use crate::adapters::outbound::filesystem::FileSystemCatalogReader;
use crate::adapters::outbound::network::HttpCatalogReader;
use crate::ports::outbound::CatalogReader;
use crate::shared::Result;
use std::fmt;
use std::path::PathBuf;

/// Where the configuration catalog is loaded from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
    /// The sample catalog compiled into the binary
    #[default]
    Embedded,
}

impl CatalogSource {
    /// Interprets a `--catalog` argument
    ///
    /// `builtin` and `embedded` select the compiled-in catalog, anything
    /// with an http(s) scheme is fetched, everything else is a path.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "builtin" | "embedded" => CatalogSource::Embedded,
            lower if lower.starts_with("https://") || lower.starts_with("http://") => {
                CatalogSource::Url(trimmed.to_string())
            }
            _ => CatalogSource::File(PathBuf::from(trimmed)),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{}", url),
            CatalogSource::Embedded => write!(f, "built-in catalog"),
        }
    }
}

/// Factory for creating catalog readers
pub struct CatalogReaderFactory;

impl CatalogReaderFactory {
    /// Creates the reader for `source`
    ///
    /// Fails only for URLs that are not allowed to be fetched.
    pub fn create(source: CatalogSource) -> Result<Box<dyn CatalogReader>> {
        let reader: Box<dyn CatalogReader> = match source {
            CatalogSource::File(path) => Box::new(FileSystemCatalogReader::new(path)),
            CatalogSource::Url(url) => Box::new(HttpCatalogReader::new(url)?),
            CatalogSource::Embedded => Box::new(EmbeddedCatalogReader::new()),
        };
        Ok(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_embedded() {
        assert_eq!(CatalogSource::parse("builtin"), CatalogSource::Embedded);
        assert_eq!(CatalogSource::parse("Embedded"), CatalogSource::Embedded);
    }

    #[test]
    fn test_parse_url() {
        assert_eq!(
            CatalogSource::parse("https://example.com/catalog.json"),
            CatalogSource::Url("https://example.com/catalog.json".to_string())
        );
    }

    #[test]
    fn test_parse_path() {
        assert_eq!(
            CatalogSource::parse("data/catalog.yml"),
            CatalogSource::File(PathBuf::from("data/catalog.yml"))
        );
    }

    #[test]
    fn test_default_is_embedded() {
        assert_eq!(CatalogSource::default(), CatalogSource::Embedded);
    }

    #[test]
    fn test_create_embedded_reader() {
        let reader = CatalogReaderFactory::create(CatalogSource::Embedded).unwrap();
        assert_eq!(reader.describe_source(), "built-in catalog");
    }

    #[test]
    fn test_create_rejects_plain_http_to_remote_host() {
        let source = CatalogSource::Url("http://example.com/catalog.json".to_string());
        assert!(CatalogReaderFactory::create(source).is_err());
    }

    #[test]
    fn test_create_accepts_upper_case_scheme() {
        let source = CatalogSource::parse("HTTPS://example.com/catalog.json");
        assert!(matches!(source, CatalogSource::Url(_)));
        assert!(CatalogReaderFactory::create(source).is_ok());
    }
}
