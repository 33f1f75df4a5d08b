//! Layered configuration.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (include_str! from marquee.toml)
//! - `~/.config/marquee/marquee.toml`
//! - `./marquee.toml`
//! - Environment variables, unprefixed (`IMAGE_PROVIDER`, `OPENAI_API_KEY`, ...),
//!   after loading `.env`

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use marquee_campaign::GenerationOptions;
use marquee_error::{ConfigError, MarqueeResult};
use marquee_models::{ImageBackendConfig, ImageProvider};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../marquee.toml");

/// Application configuration.
#[derive(Clone, Deserialize, Getters)]
pub struct MarqueeConfig {
    /// `openai` or `huggingface`
    image_provider: String,
    /// OpenAI credential
    #[serde(default)]
    openai_api_key: Option<String>,
    /// HuggingFace credential
    #[serde(default)]
    hf_api_key: Option<String>,
    /// OpenAI image model
    image_model: String,
    /// OpenAI image size
    image_size: String,
    /// HuggingFace model id
    hf_model: String,
    /// OpenAI API base URL
    openai_base_url: String,
    /// HuggingFace Inference base URL
    hf_base_url: String,
    /// Per-call provider timeout in seconds
    #[serde(default)]
    request_timeout_secs: Option<u64>,
    /// Variant generations allowed in flight at once
    max_in_flight: usize,
    /// Classifier artifact directory
    classifier_dir: PathBuf,
    /// HTTP listen address
    bind_address: String,
}

impl std::fmt::Debug for MarqueeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "<redacted>");
        f.debug_struct("MarqueeConfig")
            .field("image_provider", &self.image_provider)
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("hf_api_key", &redact(&self.hf_api_key))
            .field("image_model", &self.image_model)
            .field("image_size", &self.image_size)
            .field("hf_model", &self.hf_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("hf_base_url", &self.hf_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_in_flight", &self.max_in_flight)
            .field("classifier_dir", &self.classifier_dir)
            .field("bind_address", &self.bind_address)
            .finish()
    }
}

impl MarqueeConfig {
    /// Load configuration from every source, reading the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a file cannot be parsed or a value
    /// has the wrong type.
    #[instrument]
    pub fn load() -> MarqueeResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        dotenvy::dotenv().ok();
        let home = dirs::home_dir().map(|home| home.join(".config/marquee/marquee.toml"));
        Self::load_from(home.as_deref(), Path::new("marquee.toml"), None)
    }

    /// Load configuration from explicit sources.
    ///
    /// `env` replaces the process environment when given.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a file cannot be parsed or a value
    /// has the wrong type.
    #[instrument(skip(env))]
    pub fn load_from(
        home_file: Option<&Path>,
        local_file: &Path,
        env: Option<HashMap<String, String>>,
    ) -> MarqueeResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home_file) = home_file {
            builder = builder.add_source(File::from(home_file).required(false));
        }

        builder = builder
            .add_source(File::from(local_file).required(false))
            .add_source(Environment::default().source(env));

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        debug!(config = ?config, "Configuration loaded");
        Ok(config)
    }

    /// Provider settings for backend selection.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the backend configuration cannot be
    /// assembled.
    pub fn backend_config(&self) -> MarqueeResult<ImageBackendConfig> {
        let config = ImageBackendConfig::builder()
            .provider(ImageProvider::from_setting(&self.image_provider))
            .openai_api_key(self.openai_api_key.clone())
            .hf_api_key(self.hf_api_key.clone())
            .image_model(self.image_model.as_str())
            .image_size(self.image_size.as_str())
            .hf_model(self.hf_model.as_str())
            .openai_base_url(self.openai_base_url.as_str())
            .hf_base_url(self.hf_base_url.as_str())
            .request_timeout(self.request_timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid backend configuration: {}", e)))?;
        Ok(config)
    }

    /// Generation stage tuning.
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions::builder()
            .max_in_flight(self.max_in_flight)
            .build()
            .unwrap_or_default()
    }
}
