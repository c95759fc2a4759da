//! Encoded image payloads.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::path::Path;
use storyboard_error::{InputError, InputErrorKind, StoryboardResult};

/// A self-contained encoded image: MIME type plus base64 data.
///
/// Reference images travel to the services in this form, and rendered scene
/// images come back in it.
///
/// # Examples
///
/// ```
/// use storyboard_core::ImagePayload;
///
/// let payload = ImagePayload::from_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();
/// assert_eq!(payload.mime(), "image/png");
/// assert_eq!(payload.extension(), "png");
/// assert_eq!(payload.to_data_url(), "data:image/png;base64,iVBORw0KGgo=");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImagePayload {
    mime: String,
    data: String,
}

impl ImagePayload {
    /// Build from a MIME type and base64 data that is already encoded.
    ///
    /// # Errors
    ///
    /// Returns an input error when the MIME type is not `image/*` or the data is
    /// not valid base64.
    pub fn from_base64(mime: impl Into<String>, data: impl Into<String>) -> StoryboardResult<Self> {
        let mime = checked_mime(mime.into())?;
        let data = data.into();
        STANDARD
            .decode(data.as_bytes())
            .map_err(|e| InputError::new(InputErrorKind::Base64Decode(e.to_string())))?;
        Ok(Self { mime, data })
    }

    /// Build from raw image bytes.
    ///
    /// # Errors
    ///
    /// Returns an input error when the MIME type is not `image/*`.
    pub fn from_bytes(mime: impl Into<String>, bytes: &[u8]) -> StoryboardResult<Self> {
        let mime = checked_mime(mime.into())?;
        Ok(Self {
            mime,
            data: STANDARD.encode(bytes),
        })
    }

    /// Parse a `data:<mime>;base64,<payload>` URL.
    ///
    /// # Errors
    ///
    /// Returns an input error for anything other than a base64 image data URL.
    pub fn from_data_url(url: &str) -> StoryboardResult<Self> {
        let malformed = || InputError::new(InputErrorKind::MalformedDataUrl(truncate(url)));

        let rest = url.strip_prefix("data:").ok_or_else(malformed)?;
        let (meta, data) = rest.split_once(',').ok_or_else(malformed)?;
        let mime = meta.strip_suffix(";base64").ok_or_else(malformed)?;
        Self::from_base64(mime, data)
    }

    /// Read an image file, inferring the MIME type from its extension.
    ///
    /// # Errors
    ///
    /// Returns an input error if the extension is not a known image type or the
    /// file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> StoryboardResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        let mime = match extension.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "webp" => "image/webp",
            "gif" => "image/gif",
            "heic" => "image/heic",
            "heif" => "image/heif",
            other => {
                return Err(InputError::new(InputErrorKind::UnsupportedImage(format!(
                    "{} (extension '{}')",
                    path.display(),
                    other
                )))
                .into());
            }
        };

        let bytes = std::fs::read(path).map_err(|e| {
            InputError::new(InputErrorKind::FileRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        Self::from_bytes(mime, &bytes)
    }

    /// MIME type, e.g. `image/png`.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Base64 encoded image data.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Render as a `data:` URL suitable for embedding in HTML.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.data)
    }

    /// Decode the raw image bytes.
    ///
    /// # Errors
    ///
    /// Returns an input error if the stored data is not valid base64.
    pub fn decode(&self) -> StoryboardResult<Vec<u8>> {
        Ok(STANDARD
            .decode(self.data.as_bytes())
            .map_err(|e| InputError::new(InputErrorKind::Base64Decode(e.to_string())))?)
    }

    /// File extension matching the MIME type.
    pub fn extension(&self) -> &str {
        match self.mime.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            other => other
                .strip_prefix("image/")
                .and_then(|subtype| subtype.split(['+', ';']).next())
                .filter(|subtype| !subtype.is_empty())
                .unwrap_or("png"),
        }
    }
}

fn checked_mime(mime: String) -> StoryboardResult<String> {
    let normalized = mime.trim().to_ascii_lowercase();
    if normalized.starts_with("image/") && normalized.len() > "image/".len() {
        Ok(normalized)
    } else {
        Err(InputError::new(InputErrorKind::UnsupportedImage(mime)).into())
    }
}

fn truncate(value: &str) -> String {
    value.chars().take(48).collect()
}
