use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

pub const MAX_TEXT_CHARS: usize = 5000;
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter some text to analyze")]
    EmptyText,
    #[error("Text must be at most {max} characters, got {len}")]
    TextTooLong { len: usize, max: usize },
    #[error("Please upload an image first")]
    EmptyImage,
    #[error("Image must be less than 10MB")]
    ImageTooLarge { size: usize },
    #[error("Please upload a JPG, PNG, WEBP, or GIF image (got {0})")]
    UnsupportedMediaType(String),
    #[error("Please enter a URL to analyze")]
    EmptyUrl,
    #[error("Please enter a valid URL")]
    InvalidUrl,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ImageMediaType {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/webp")]
    Webp,
    #[serde(rename = "image/gif")]
    Gif,
}

impl ImageMediaType {
    pub fn as_mime(self) -> &'static str {
        match self {
            ImageMediaType::Jpeg => "image/jpeg",
            ImageMediaType::Png => "image/png",
            ImageMediaType::Webp => "image/webp",
            ImageMediaType::Gif => "image/gif",
        }
    }

    /// Parameters such as `; charset=...` are ignored.
    pub fn from_mime(mime: &str) -> Result<Self, InputError> {
        let lowered = mime
            .split(';')
            .next()
            .unwrap_or(mime)
            .trim()
            .to_ascii_lowercase();
        match lowered.as_str() {
            "image/jpeg" | "image/jpg" => Ok(ImageMediaType::Jpeg),
            "image/png" => Ok(ImageMediaType::Png),
            "image/webp" => Ok(ImageMediaType::Webp),
            "image/gif" => Ok(ImageMediaType::Gif),
            _ => Err(InputError::UnsupportedMediaType(mime.to_string())),
        }
    }

    pub fn from_extension(ext: &str) -> Result<Self, InputError> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(ImageMediaType::Jpeg),
            "png" => Ok(ImageMediaType::Png),
            "webp" => Ok(ImageMediaType::Webp),
            "gif" => Ok(ImageMediaType::Gif),
            _ => Err(InputError::UnsupportedMediaType(ext.to_string())),
        }
    }
}

impl fmt::Display for ImageMediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mime())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Text,
    Image,
    Url,
}

impl Modality {
    pub fn as_str(self) -> &'static str {
        match self {
            Modality::Text => "text",
            Modality::Image => "image",
            Modality::Url => "url",
        }
    }
}

/// One piece of user content to assess.
///
/// The variants are public and unchecked. Callers holding raw user input
/// should go through [`AnalysisInput::text`], [`AnalysisInput::image`] or
/// [`AnalysisInput::url`], which enforce the size and format limits; the
/// analyzer does not re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    Text(String),
    Image {
        bytes: Vec<u8>,
        media_type: ImageMediaType,
    },
    Url(String),
}

impl AnalysisInput {
    pub fn text(text: impl Into<String>) -> Result<Self, InputError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(InputError::EmptyText);
        }
        let len = text.chars().count();
        if len > MAX_TEXT_CHARS {
            return Err(InputError::TextTooLong {
                len,
                max: MAX_TEXT_CHARS,
            });
        }
        Ok(AnalysisInput::Text(text))
    }

    pub fn image(bytes: Vec<u8>, media_type: ImageMediaType) -> Result<Self, InputError> {
        if bytes.is_empty() {
            return Err(InputError::EmptyImage);
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(InputError::ImageTooLarge { size: bytes.len() });
        }
        Ok(AnalysisInput::Image { bytes, media_type })
    }

    pub fn url(raw: &str) -> Result<Self, InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyUrl);
        }
        let full = with_default_scheme(trimmed);
        let parsed = Url::parse(&full).map_err(|_| InputError::InvalidUrl)?;
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(InputError::InvalidUrl);
        }
        Ok(AnalysisInput::Url(full))
    }

    pub fn modality(&self) -> Modality {
        match self {
            AnalysisInput::Text(_) => Modality::Text,
            AnalysisInput::Image { .. } => Modality::Image,
            AnalysisInput::Url(_) => Modality::Url,
        }
    }
}

fn with_default_scheme(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}
