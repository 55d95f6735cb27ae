use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can distinguish a bad invocation from a failed quote run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Quote rendered successfully
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (catalog, network, file I/O, validation, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for catalog loading and quoting.
///
/// The quote calculator itself never fails; these cover everything
/// around it (loading, validation, filtering, output).
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Catalog file not found: {path}\n\n💡 Hint: {suggestion}")]
    CatalogNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse catalog: {source_name}\nDetails: {details}\n\n💡 Hint: Each record needs at least 'UCHardware' and 'baseprice'; option groups map keys to {{ name, price, optionHours }}")]
    CatalogParseError {
        source_name: String,
        details: String,
    },

    #[error("Failed to fetch catalog: {url}\nDetails: {details}\n\n💡 Hint: Check the URL and your network connection")]
    CatalogFetchError { url: String, details: String },

    #[error("Catalog failed validation with {issue_count} issue(s):\n{summary}\n\n💡 Hint: Fix the catalog data or run without --strict to quote anyway")]
    InvalidCatalog { issue_count: usize, summary: String },

    #[error("No configurations match the filter (platform: \"{platform}\", manufacturer: \"{manufacturer}\", configuration: \"{configuration}\")\n\n💡 Hint: Manufacturer and configuration must match exactly; platform matches any tag containing the text")]
    NoMatchingConfigurations {
        platform: String,
        manufacturer: String,
        configuration: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
