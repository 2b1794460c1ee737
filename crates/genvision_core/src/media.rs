//! Media types for image parts.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Where image content is sourced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaSource {
    /// Base64-encoded content
    Base64(String),
    /// Raw binary data
    Binary(Vec<u8>),
}

impl MediaSource {
    /// True when there are no bytes to send.
    pub fn is_empty(&self) -> bool {
        match self {
            MediaSource::Base64(data) => data.is_empty(),
            MediaSource::Binary(data) => data.is_empty(),
        }
    }
}

/// Image formats accepted from uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// JPEG (`.jpg`, `.jpeg`)
    #[display("jpeg")]
    Jpeg,
    /// PNG (`.png`)
    #[display("png")]
    Png,
}

impl ImageFormat {
    /// Resolve a format from a file extension, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use genvision_core::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_extension("JPG"), Some(ImageFormat::Jpeg));
    /// assert_eq!(ImageFormat::from_extension("png"), Some(ImageFormat::Png));
    /// assert_eq!(ImageFormat::from_extension("gif"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }

    /// MIME type sent alongside the image bytes.
    pub fn mime(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }
}

/// An image supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ImageInput {
    /// MIME type, e.g. "image/png"
    mime: String,
    /// Image content
    source: MediaSource,
}

impl ImageInput {
    /// Create an image from a MIME type and a source.
    pub fn new(mime: impl Into<String>, source: MediaSource) -> Self {
        Self {
            mime: mime.into(),
            source,
        }
    }

    /// Create an image from raw bytes of a known format.
    pub fn from_bytes(format: ImageFormat, bytes: Vec<u8>) -> Self {
        Self::new(format.mime(), MediaSource::Binary(bytes))
    }
}
