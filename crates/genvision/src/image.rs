//! Image file loading for uploads.

use genvision_core::{ImageFormat, ImageInput};
use genvision_error::{ConfigError, GenVisionResult};
use std::path::Path;
use tracing::{debug, instrument};

/// Reads a `.jpg`, `.jpeg` or `.png` file into an [`ImageInput`].
///
/// # Errors
///
/// Returns an error for other extensions, unreadable files, or empty files.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_image(path: impl AsRef<Path>) -> GenVisionResult<ImageInput> {
    let path = path.as_ref();
    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ImageFormat::from_extension)
        .ok_or_else(|| {
            ConfigError::new(format!(
                "Unsupported image type for {}: expected jpg, jpeg or png",
                path.display()
            ))
        })?;

    let bytes = std::fs::read(path).map_err(|e| {
        ConfigError::new(format!("Failed to read image {}: {}", path.display(), e))
    })?;

    if bytes.is_empty() {
        return Err(ConfigError::new(format!("Image {} is empty", path.display())).into());
    }

    debug!(format = %format, bytes = bytes.len(), "Loaded image");
    Ok(ImageInput::from_bytes(format, bytes))
}
