//! Server command handler.

use marquee::{MarqueeConfig, build_pipeline, serve};
use marquee_error::MarqueeResult;
use std::sync::Arc;
use tracing::info;

/// Preload the classifier, select the backend and serve the HTTP API.
pub async fn run_server(config: &MarqueeConfig, bind: Option<String>) -> MarqueeResult<()> {
    let pipeline = build_pipeline(config)?;
    pipeline.classifier().load()?;
    info!(
        provider = pipeline.backend().provider_name(),
        model = pipeline.backend().model_name(),
        "Pipeline ready"
    );

    let address = bind.unwrap_or_else(|| config.bind_address().clone());
    serve(Arc::new(pipeline), &address).await
}
