use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum catalog file size (10 MB)
///
/// A catalog is a hand-maintained list of bundles; anything larger is
/// almost certainly the wrong file.
pub const MAX_CATALOG_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// Uses `symlink_metadata()` so the link itself is inspected rather than
/// its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "catalog", "config file")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds `max_size` bytes
pub fn validate_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata for {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, the {} must be a regular file.",
            path.display(),
            file_description
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates a remote catalog URL
///
/// Only `https://` is accepted, except plain `http://` against the local
/// host for development servers. Credentials in the URL are never accepted.
pub fn validate_catalog_url(url: &str) -> Result<()> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| anyhow::anyhow!("Invalid catalog URL '{}': {}", url, e))?;

    if !parsed.username().is_empty() || parsed.password().is_some() {
        anyhow::bail!(
            "Security: catalog URL must not contain credentials: {}",
            parsed.host_str().unwrap_or(url)
        );
    }

    let host = match parsed.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => anyhow::bail!("Catalog URL has no host: {}", url),
    };

    match parsed.scheme() {
        "https" => Ok(()),
        "http" if host == "localhost" || host == "127.0.0.1" => Ok(()),
        "http" => anyhow::bail!(
            "Security: refusing to fetch catalog over plain HTTP from '{}'. Use https:// instead.",
            host
        ),
        _ => anyhow::bail!(
            "Unsupported catalog URL scheme: {}. Only https:// URLs are supported.",
            url
        ),
    }
}

/// True when `url` is plain http to the local host, which is fetched
/// without a proxy
pub fn is_loopback_http(url: &str) -> bool {
    reqwest::Url::parse(url).is_ok_and(|parsed| {
        parsed.scheme() == "http"
            && matches!(parsed.host_str(), Some("localhost") | Some("127.0.0.1"))
    })
}
