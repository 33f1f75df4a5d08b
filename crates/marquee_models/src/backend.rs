//! Provider selection.

use crate::{
    DEFAULT_HF_BASE_URL, DEFAULT_HF_MODEL, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_IMAGE_MODEL,
    DEFAULT_OPENAI_IMAGE_SIZE, HuggingFaceImageClient, OpenAiImageClient,
};
use derive_builder::Builder;
use derive_getters::Getters;
use marquee_error::MarqueeResult;
use marquee_interface::ImageBackend;
use std::time::Duration;
use tracing::{info, instrument};

/// Supported image-generation providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum ImageProvider {
    /// OpenAI Images API (hosted URLs)
    #[default]
    #[display("openai")]
    OpenAi,
    /// HuggingFace Inference (encoded bytes)
    #[display("huggingface")]
    HuggingFace,
}

impl ImageProvider {
    /// Interpret a configured provider name.
    ///
    /// `huggingface` (any case) selects HuggingFace; every other value
    /// selects OpenAI.
    ///
    /// ```
    /// use marquee_models::ImageProvider;
    ///
    /// assert_eq!(ImageProvider::from_setting("HuggingFace"), ImageProvider::HuggingFace);
    /// assert_eq!(ImageProvider::from_setting("dall-e"), ImageProvider::OpenAi);
    /// ```
    pub fn from_setting(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("huggingface") {
            ImageProvider::HuggingFace
        } else {
            ImageProvider::OpenAi
        }
    }
}

/// Everything needed to construct the selected backend.
#[derive(Clone, Builder, Getters)]
#[builder(setter(into))]
pub struct ImageBackendConfig {
    /// Which provider to use
    #[builder(default)]
    provider: ImageProvider,
    /// OpenAI credential
    #[builder(default)]
    openai_api_key: Option<String>,
    /// HuggingFace credential
    #[builder(default)]
    hf_api_key: Option<String>,
    /// OpenAI image model
    #[builder(default = "DEFAULT_OPENAI_IMAGE_MODEL.to_string()")]
    image_model: String,
    /// OpenAI image size
    #[builder(default = "DEFAULT_OPENAI_IMAGE_SIZE.to_string()")]
    image_size: String,
    /// HuggingFace model id
    #[builder(default = "DEFAULT_HF_MODEL.to_string()")]
    hf_model: String,
    /// OpenAI API base URL
    #[builder(default = "DEFAULT_OPENAI_BASE_URL.to_string()")]
    openai_base_url: String,
    /// HuggingFace Inference base URL
    #[builder(default = "DEFAULT_HF_BASE_URL.to_string()")]
    hf_base_url: String,
    /// Per-call timeout
    #[builder(default)]
    request_timeout: Option<Duration>,
}

impl ImageBackendConfig {
    /// Creates a new builder for `ImageBackendConfig`.
    pub fn builder() -> ImageBackendConfigBuilder {
        ImageBackendConfigBuilder::default()
    }
}

impl std::fmt::Debug for ImageBackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "<redacted>");
        f.debug_struct("ImageBackendConfig")
            .field("provider", &self.provider)
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("hf_api_key", &redact(&self.hf_api_key))
            .field("image_model", &self.image_model)
            .field("image_size", &self.image_size)
            .field("hf_model", &self.hf_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("hf_base_url", &self.hf_base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Construct the configured backend.
///
/// # Errors
///
/// Returns a configuration error if the selected provider's credential is
/// absent or blank. No request is sent in that case.
#[instrument(skip_all, fields(provider = %config.provider))]
pub fn select_backend(config: &ImageBackendConfig) -> MarqueeResult<Box<dyn ImageBackend>> {
    let backend: Box<dyn ImageBackend> = match config.provider {
        ImageProvider::OpenAi => {
            let mut client =
                OpenAiImageClient::new(config.openai_api_key.clone(), &config.image_model)?
                    .with_size(config.image_size.as_str())
                    .with_base_url(config.openai_base_url.as_str());
            if let Some(timeout) = config.request_timeout {
                client = client.with_timeout(timeout)?;
            }
            Box::new(client)
        }
        ImageProvider::HuggingFace => {
            let mut client =
                HuggingFaceImageClient::new(config.hf_api_key.clone(), &config.hf_model)?
                    .with_base_url(config.hf_base_url.as_str());
            if let Some(timeout) = config.request_timeout {
                client = client.with_timeout(timeout)?;
            }
            Box::new(client)
        }
    };

    info!(
        provider = backend.provider_name(),
        model = backend.model_name(),
        "Selected image backend"
    );
    Ok(backend)
}
