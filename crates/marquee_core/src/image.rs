//! References to generated images.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use marquee_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Media type attached to inline images from the encoded-bytes provider.
pub const PNG_MEDIA_TYPE: &str = "image/png";

/// A generated image: either hosted remotely or carried inline.
///
/// The wire form is a single string, the URL for [`ImageRef::Remote`] and an
/// RFC 2397 data URL (`data:image/png;base64,...`) for [`ImageRef::Inline`].
/// [`ImageRef::parse`] inverts it.
///
/// # Examples
///
/// ```
/// use marquee_core::ImageRef;
///
/// let image = ImageRef::inline_png(vec![0x89, 0x50, 0x4E, 0x47]);
/// let wire = image.to_string();
/// assert!(wire.starts_with("data:image/png;base64,"));
/// assert_eq!(ImageRef::parse(&wire).unwrap(), image);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ImageRef {
    /// URL of an image hosted by the provider
    Remote {
        /// Hosted image URL
        url: String,
    },
    /// Image bytes carried in the reference itself
    Inline {
        /// MIME type of the bytes
        media_type: String,
        /// Raw image bytes
        data: Vec<u8>,
    },
}

impl ImageRef {
    /// Reference to a hosted image.
    pub fn remote(url: impl Into<String>) -> Self {
        ImageRef::Remote { url: url.into() }
    }

    /// Inline reference tagged as PNG.
    pub fn inline_png(data: Vec<u8>) -> Self {
        ImageRef::Inline {
            media_type: PNG_MEDIA_TYPE.to_string(),
            data,
        }
    }

    /// Parse the wire form back into a reference.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the string is neither an `http(s)` URL
    /// nor a base64 data URL, or if the payload is not valid base64.
    #[track_caller]
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| {
            ValidationError::new(ValidationErrorKind::InvalidImageRef(reason.to_string()))
        };

        if let Some(rest) = value.strip_prefix("data:") {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| invalid("data URL has no payload separator"))?;
            let media_type = header
                .strip_suffix(";base64")
                .ok_or_else(|| invalid("data URL is not base64 encoded"))?;
            if media_type.is_empty() {
                return Err(invalid("data URL has no media type"));
            }
            let data = STANDARD
                .decode(payload)
                .map_err(|e| invalid(&format!("bad base64 payload: {}", e)))?;
            return Ok(ImageRef::Inline {
                media_type: media_type.to_string(),
                data,
            });
        }

        if value.starts_with("https://") || value.starts_with("http://") {
            return Ok(ImageRef::remote(value));
        }

        Err(invalid("expected an http(s) URL or a data URL"))
    }

    /// Whether the image must be fetched to obtain its bytes.
    pub fn is_remote(&self) -> bool {
        matches!(self, ImageRef::Remote { .. })
    }

    /// The raw bytes, if carried inline.
    pub fn inline_bytes(&self) -> Option<&[u8]> {
        match self {
            ImageRef::Inline { data, .. } => Some(data.as_slice()),
            ImageRef::Remote { .. } => None,
        }
    }

    /// The declared media type, if carried inline.
    pub fn media_type(&self) -> Option<&str> {
        match self {
            ImageRef::Inline { media_type, .. } => Some(media_type.as_str()),
            ImageRef::Remote { .. } => None,
        }
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageRef::Remote { url } => write!(f, "{}", url),
            ImageRef::Inline { media_type, data } => {
                write!(f, "data:{};base64,{}", media_type, STANDARD.encode(data))
            }
        }
    }
}

impl From<ImageRef> for String {
    fn from(image: ImageRef) -> Self {
        image.to_string()
    }
}

impl TryFrom<String> for ImageRef {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ImageRef::parse(&value)
    }
}
