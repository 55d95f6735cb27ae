use clap::Parser;

use uc_quote::application::dto::OutputFormat;

/// Browse a hardware catalog and print ROM quotes for its room bundles
#[derive(Parser, Debug, Default)]
#[command(name = "uc-quote")]
#[command(version)]
#[command(
    about = "Browse a hardware catalog and print ROM quotes for its room bundles",
    long_about = None
)]
pub struct Args {
    /// Catalog file (.json, .toml, .yml), https:// URL, or "builtin"
    #[arg(short, long, value_name = "PATH|URL")]
    pub catalog: Option<String>,

    /// Keep bundles with a platform tag containing this text
    #[arg(long, value_name = "SUBSTRING", requires = "manufacturer")]
    pub platform: Option<String>,

    /// Keep bundles from exactly this manufacturer
    #[arg(
        short,
        long,
        value_name = "NAME",
        requires = "configuration",
        value_parser = non_blank
    )]
    pub manufacturer: Option<String>,

    /// Keep bundles tagged with exactly this room configuration
    #[arg(
        long,
        value_name = "TAG",
        requires = "manufacturer",
        value_parser = non_blank
    )]
    pub configuration: Option<String>,

    /// Keep bundles whose name contains this text (case-insensitive)
    #[arg(short, long, value_name = "SUBSTRING")]
    pub name: Option<String>,

    /// Display option key to select on every bundle
    #[arg(long, value_name = "KEY")]
    pub display: Option<String>,

    /// Audio option key to select on every bundle
    #[arg(long, value_name = "KEY")]
    pub audio: Option<String>,

    /// Camera option key to select on every bundle
    #[arg(long, value_name = "KEY")]
    pub camera: Option<String>,

    /// Media source option key to select on every bundle
    #[arg(long, value_name = "KEY")]
    pub source: Option<String>,

    /// Output format: text, markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Fail when the catalog has data-quality issues
    #[arg(long)]
    pub strict: bool,

    /// Configuration file (defaults to ./uc-quote.config.yml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Only print warnings and errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Manufacturer and configuration are matched exactly, so a blank value
/// could only ever select records with that field missing
fn non_blank(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("value must not be empty; omit the filter to quote the whole catalog".to_string())
    } else {
        Ok(value.to_string())
    }
}
