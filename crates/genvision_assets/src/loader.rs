//! File and URL loaders for animation JSON.

use crate::Animation;
use genvision_error::{AssetLoadError, AssetLoadErrorKind};
use std::path::Path;
use tracing::{debug, instrument, warn};

fn parse(name: &str, content: &str) -> Result<Animation, AssetLoadError> {
    let definition: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| AssetLoadError::new(AssetLoadErrorKind::Malformed(e.to_string())))?;

    // Lottie documents are always JSON objects.
    if !definition.is_object() {
        return Err(AssetLoadError::new(AssetLoadErrorKind::Malformed(format!(
            "{} is not a JSON object",
            name
        ))));
    }

    Ok(Animation::new(name, definition))
}

/// Loads an animation from a local JSON file.
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, is not UTF-8, or
/// is not a JSON object.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_file(name: &str, path: impl AsRef<Path>) -> Result<Animation, AssetLoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        let kind = if e.kind() == std::io::ErrorKind::NotFound {
            AssetLoadErrorKind::NotFound(path.display().to_string())
        } else {
            AssetLoadErrorKind::Io(format!("{}: {}", path.display(), e))
        };
        AssetLoadError::new(kind)
    })?;

    let content = String::from_utf8(bytes)
        .map_err(|e| AssetLoadError::new(AssetLoadErrorKind::Encoding(e.to_string())))?;

    let animation = parse(name, &content)?;
    debug!(name, "Loaded animation file");
    Ok(animation)
}

/// Like [`load_file`], but logs failures and returns `None`.
pub fn load_file_optional(name: &str, path: impl AsRef<Path>) -> Option<Animation> {
    match load_file(name, path) {
        Ok(animation) => Some(animation),
        Err(e) => {
            warn!(name, error = %e, "Skipping animation");
            None
        }
    }
}

/// Fetches an animation from a URL.
///
/// # Errors
///
/// Returns an error on transport failure, a non-success status, or a body
/// that is not a JSON object.
#[instrument(skip(client))]
pub async fn load_url(
    client: &reqwest::Client,
    name: &str,
    url: &str,
) -> Result<Animation, AssetLoadError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AssetLoadError::new(AssetLoadErrorKind::Http(e.to_string())))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AssetLoadError::new(AssetLoadErrorKind::Http(format!(
            "{} returned {}",
            url, status
        ))));
    }

    let content = response
        .text()
        .await
        .map_err(|e| AssetLoadError::new(AssetLoadErrorKind::Encoding(e.to_string())))?;

    let animation = parse(name, &content)?;
    debug!(name, "Fetched animation");
    Ok(animation)
}

/// Like [`load_url`], but logs failures and returns `None`.
pub async fn load_url_optional(
    client: &reqwest::Client,
    name: &str,
    url: &str,
) -> Option<Animation> {
    match load_url(client, name, url).await {
        Ok(animation) => Some(animation),
        Err(e) => {
            warn!(name, url, error = %e, "Skipping animation");
            None
        }
    }
}
