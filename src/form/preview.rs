// SPDX-License-Identifier: MPL-2.0
//! Local image preview: file bytes in, displayable preview out.
//!
//! No network is involved. The bytes are decoded once to validate the file
//! and learn its dimensions; the same bytes back both the render handle and
//! the base64 data URL.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use iced::widget::image;
use image_rs::GenericImageView;
use std::fmt;
use std::path::PathBuf;

/// A validated, displayable image preview.
#[derive(Debug, Clone)]
pub struct ImagePreview {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    data_url: String,
}

impl ImagePreview {
    /// Builds a preview from encoded image bytes (PNG, JPEG, etc.).
    ///
    /// # Errors
    ///
    /// Returns an error if the format cannot be recognized
    /// ([`PreviewError::UnknownFormat`]) or the pixel data fails to decode
    /// ([`PreviewError::Decode`]).
    pub fn from_encoded(bytes: Vec<u8>) -> Result<Self, PreviewError> {
        let format = image_rs::guess_format(&bytes)
            .map_err(|e| PreviewError::UnknownFormat(e.to_string()))?;
        let decoded = image_rs::load_from_memory_with_format(&bytes, format)
            .map_err(|e| PreviewError::Decode(e.to_string()))?;
        let (width, height) = decoded.dimensions();

        let data_url = format!(
            "data:{};base64,{}",
            format.to_mime_type(),
            STANDARD.encode(&bytes)
        );
        let handle = image::Handle::from_bytes(bytes);

        Ok(Self {
            handle,
            width,
            height,
            data_url,
        })
    }

    /// The preview as a `data:<mime>;base64,<payload>` string.
    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

/// Errors that can occur while producing a preview.
#[derive(Debug, Clone)]
pub enum PreviewError {
    /// The file could not be read.
    Io(String),
    /// The bytes match no known image format.
    UnknownFormat(String),
    /// The format was recognized but the pixel data is invalid.
    Decode(String),
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::Io(msg) => write!(f, "I/O error: {msg}"),
            PreviewError::UnknownFormat(msg) => write!(f, "Unrecognized image format: {msg}"),
            PreviewError::Decode(msg) => write!(f, "Decoding failed: {msg}"),
        }
    }
}

impl std::error::Error for PreviewError {}

/// Reads the file at `path` and turns it into a displayable preview.
pub async fn load_preview(path: PathBuf) -> Result<ImagePreview, PreviewError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| PreviewError::Io(e.to_string()))?;
    ImagePreview::from_encoded(bytes)
}
