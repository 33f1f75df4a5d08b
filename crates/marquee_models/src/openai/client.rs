//! OpenAI image client returning hosted URLs.

use super::dto::{ImageGenerationRequest, ImageGenerationResponse};
use crate::http::{build_client, require_credential, status_error, transport_error};
use async_trait::async_trait;
use marquee_core::ImageRef;
use marquee_error::{MarqueeResult, ProviderError, ProviderErrorKind};
use marquee_interface::ImageBackend;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Default OpenAI API base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
/// Default OpenAI image model.
pub const DEFAULT_OPENAI_IMAGE_MODEL: &str = "dall-e-3";
/// Default requested image size.
pub const DEFAULT_OPENAI_IMAGE_SIZE: &str = "1024x1024";

const PROVIDER: &str = "openai";

/// OpenAI Images API client.
///
/// Requests a single image per prompt and returns its hosted URL as
/// [`ImageRef::Remote`].
#[derive(Clone)]
pub struct OpenAiImageClient {
    client: Client,
    api_key: String,
    model: String,
    size: String,
    base_url: String,
}

impl std::fmt::Debug for OpenAiImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiImageClient")
            .field("model", &self.model)
            .field("size", &self.size)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenAiImageClient {
    /// Creates a client for `model` with the default size and base URL.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `api_key` is absent or blank.
    #[instrument(skip_all, fields(model = %model.as_ref()))]
    pub fn new(api_key: Option<String>, model: impl AsRef<str>) -> MarqueeResult<Self> {
        let api_key = require_credential(api_key, "OPENAI_API_KEY", PROVIDER)?;
        let client = build_client(None)?;

        debug!("Created OpenAI image client");

        Ok(Self {
            client,
            api_key,
            model: model.as_ref().to_string(),
            size: DEFAULT_OPENAI_IMAGE_SIZE.to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        })
    }

    /// Sets the requested image size (e.g. `1792x1024`).
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Sets the API base URL, without the `/v1` suffix.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Applies a per-call timeout.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be rebuilt.
    pub fn with_timeout(mut self, timeout: Duration) -> MarqueeResult<Self> {
        self.client = build_client(Some(timeout))?;
        Ok(self)
    }

    /// Requested image size.
    pub fn size(&self) -> &str {
        &self.size
    }
}

#[async_trait]
impl ImageBackend for OpenAiImageClient {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> MarqueeResult<ImageRef> {
        let url = format!("{}/v1/images/generations", self.base_url);
        let body = ImageGenerationRequest {
            model: &self.model,
            prompt,
            size: &self.size,
            n: 1,
        };

        debug!(url = %url, size = %self.size, "Sending image request to OpenAI");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        if !response.status().is_success() {
            return Err(status_error(PROVIDER, response).await.into());
        }

        let parsed: ImageGenerationResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse OpenAI response");
            ProviderError::new(
                PROVIDER,
                ProviderErrorKind::UnexpectedResponse(format!("Failed to parse JSON: {}", e)),
            )
        })?;

        let image_url = parsed
            .data
            .into_iter()
            .next()
            .and_then(|image| image.url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                error!("OpenAI response carried no image URL");
                ProviderError::new(
                    PROVIDER,
                    ProviderErrorKind::UnexpectedResponse("Missing data[0].url".to_string()),
                )
            })?;

        debug!("Received image URL");
        Ok(ImageRef::remote(image_url))
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
