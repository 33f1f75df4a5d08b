//! HuggingFace Inference client returning encoded image bytes.

use crate::http::{build_client, require_credential, status_error, transport_error};
use async_trait::async_trait;
use marquee_core::ImageRef;
use marquee_error::{MarqueeResult, ProviderError, ProviderErrorKind};
use marquee_interface::ImageBackend;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Default HuggingFace Inference base URL.
pub const DEFAULT_HF_BASE_URL: &str = "https://router.huggingface.co/hf-inference";
/// Default text-to-image model.
pub const DEFAULT_HF_MODEL: &str = "stabilityai/stable-diffusion-xl-base-1.0";

const PROVIDER: &str = "huggingface";

/// HuggingFace text-to-image client.
#[derive(Clone)]
pub struct HuggingFaceImageClient {
    client: Client,
    api_token: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for HuggingFaceImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceImageClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HuggingFaceImageClient {
    /// Creates a client for `model` against the default router.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `api_token` is absent or blank.
    #[instrument(skip_all, fields(model = %model.as_ref()))]
    pub fn new(api_token: Option<String>, model: impl AsRef<str>) -> MarqueeResult<Self> {
        let api_token = require_credential(api_token, "HF_API_KEY", PROVIDER)?;
        let client = build_client(None)?;

        debug!("Created HuggingFace image client");

        Ok(Self {
            client,
            api_token,
            model: model.as_ref().to_string(),
            base_url: DEFAULT_HF_BASE_URL.to_string(),
        })
    }

    /// Sets the inference base URL; requests go to `{base}/models/{model}`.
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
}

#[async_trait]
impl ImageBackend for HuggingFaceImageClient {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> MarqueeResult<ImageRef> {
        let url = format!("{}/models/{}", self.base_url, self.model);

        debug!(url = %url, "Sending text-to-image request to HuggingFace");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .header(ACCEPT, "image/png")
            .json(&json!({ "inputs": prompt }))
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        if !response.status().is_success() {
            return Err(status_error(PROVIDER, response).await.into());
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));
        if is_json {
            let body = response.text().await.unwrap_or_default();
            error!(body = %body, "Expected image bytes, got JSON");
            return Err(ProviderError::new(
                PROVIDER,
                ProviderErrorKind::UnexpectedResponse(format!("Expected image bytes: {}", body)),
            )
            .into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;
        if bytes.is_empty() {
            error!("HuggingFace returned an empty body");
            return Err(ProviderError::new(
                PROVIDER,
                ProviderErrorKind::UnexpectedResponse("Empty image body".to_string()),
            )
            .into());
        }

        debug!(bytes = bytes.len(), "Received image bytes");
        Ok(ImageRef::inline_png(bytes.to_vec()))
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
