//! OpenAI Images API data transfer objects.

use serde::{Deserialize, Serialize};

/// Body of `POST /v1/images/generations`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ImageGenerationRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub size: &'a str,
    pub n: u8,
}

/// One generated image. Only `url` is requested.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ImageData {
    #[serde(default)]
    pub url: Option<String>,
}

/// Response of `POST /v1/images/generations`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ImageGenerationResponse {
    #[serde(default)]
    pub data: Vec<ImageData>,
}
