//! Marquee: movie poster campaign generator.
//!
//! Turns a short plot summary into creative metadata (genre, mood, palette,
//! style keywords, title, tagline), one image prompt per creative variant,
//! and the generated images.
//!
//! This crate wires the pipeline to the outside world:
//!
//! - [`MarqueeConfig`]: layered configuration
//! - [`create_router`] / [`serve`]: the HTTP API
//! - [`save_image`] / [`save_campaign`]: writing results to disk
//! - [`init_tracing`]: logging, with OpenTelemetry behind the
//!   `observability` feature
//!
//! # Example
//!
//! ```no_run
//! use marquee::{MarqueeConfig, build_pipeline};
//! use marquee_core::CampaignRequest;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MarqueeConfig::load()?;
//! let pipeline = build_pipeline(&config)?;
//! pipeline.classifier().load()?;
//!
//! let request = CampaignRequest::new("A legendary Jedi rises to confront a new Sith empire.", None)?;
//! let campaign = pipeline.run_campaign(&request).await?;
//! println!("{}", serde_json::to_string_pretty(&campaign)?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod observability;
mod save;

pub use api::{ApiError, PosterRequestBody, create_router, serve};
pub use config::MarqueeConfig;
pub use observability::{ObservabilityConfig, init_tracing};
pub use save::{save_campaign, save_image, variant_file_name};

use marquee_campaign::CampaignPipeline;
use marquee_classifier::LazyClassifier;
use marquee_error::MarqueeResult;
use marquee_interface::ImageBackend;
use marquee_models::select_backend;
use std::sync::Arc;

/// Pipeline as assembled from configuration.
pub type MarqueePipeline = CampaignPipeline<LazyClassifier, Box<dyn ImageBackend>>;

/// Assemble the pipeline described by `config`.
///
/// The image backend is selected here, so a missing credential fails now.
/// The classifier is not loaded; call `pipeline.classifier().load()` to
/// surface a missing artifact before serving.
///
/// # Errors
///
/// Returns a configuration error if the selected provider is unusable.
pub fn build_pipeline(config: &MarqueeConfig) -> MarqueeResult<MarqueePipeline> {
    let backend = select_backend(&config.backend_config()?)?;
    let classifier = Arc::new(LazyClassifier::new(config.classifier_dir().clone()));
    Ok(CampaignPipeline::new(classifier, backend).with_options(config.generation_options()))
}
