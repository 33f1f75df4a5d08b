//! Campaign orchestration.

use crate::{analyze, compose, single_prompt};
use derive_builder::Builder;
use derive_getters::Getters;
use futures::{StreamExt, TryStreamExt, stream};
use marquee_core::{AnalysisResult, Campaign, CampaignRequest, GeneratedImage, SinglePoster};
use marquee_error::{ArtifactError, ArtifactErrorKind, MarqueeError, MarqueeResult};
use marquee_interface::{GenreClassifier, ImageBackend};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Tuning for the generation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerationOptions {
    /// Variant generations allowed in flight at once. `1` runs them one
    /// after another; `0` is treated as `1`.
    #[builder(default = "1")]
    max_in_flight: usize,
}

impl GenerationOptions {
    /// Creates a new builder for `GenerationOptions`.
    pub fn builder() -> GenerationOptionsBuilder {
        GenerationOptionsBuilder::default()
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self { max_in_flight: 1 }
    }
}

/// Runs summaries through analysis, composition and generation.
///
/// The classifier is shared by `Arc` and called on the blocking pool, since
/// inference is CPU-bound. The backend is owned; pass a `Box<dyn ImageBackend>`
/// to hold whichever provider was selected at startup.
pub struct CampaignPipeline<C, B>
where
    C: GenreClassifier + 'static,
    B: ImageBackend,
{
    classifier: Arc<C>,
    backend: B,
    options: GenerationOptions,
}

impl<C, B> CampaignPipeline<C, B>
where
    C: GenreClassifier + 'static,
    B: ImageBackend,
{
    /// Creates a pipeline with sequential generation.
    pub fn new(classifier: Arc<C>, backend: B) -> Self {
        Self {
            classifier,
            backend,
            options: GenerationOptions::default(),
        }
    }

    /// Replaces the generation options.
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// The shared classifier.
    pub fn classifier(&self) -> &Arc<C> {
        &self.classifier
    }

    /// The image backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Generation options in effect.
    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Produce a full campaign: one image per variant, numbered `0..N`.
    ///
    /// Variants keep their fixed order and ids whatever `max_in_flight` is.
    /// The first failure aborts the run and nothing partial is returned.
    ///
    /// # Errors
    ///
    /// Returns the first classifier, validation or provider error.
    #[instrument(
        skip(self, request),
        fields(
            provider = self.backend.provider_name(),
            summary_len = request.summary().len(),
            max_in_flight = self.options.max_in_flight
        )
    )]
    pub async fn run_campaign(&self, request: &CampaignRequest) -> MarqueeResult<Campaign> {
        debug!("Stage: analysis");
        let analysis = self.analyze(request).await?;

        debug!(genre = %analysis.genre(), "Stage: composition");
        let prompts = compose(request.summary(), &analysis, request.style_hint());

        debug!(variants = prompts.len(), "Stage: generation");
        let images: Vec<GeneratedImage> = stream::iter(prompts)
            .map(|prompt| async move {
                let image_ref = self.backend.generate(prompt.prompt_text()).await?;
                debug!(variant = %prompt.variant_name(), "Generated variant");
                Ok::<_, MarqueeError>(GeneratedImage::new(
                    *prompt.variant_name(),
                    prompt.prompt_text().as_str(),
                    image_ref,
                ))
            })
            .buffered(self.options.max_in_flight.max(1))
            .try_collect()
            .await?;

        debug!("Stage: aggregation");
        let campaign = Campaign::assemble(analysis, images);

        info!(
            title = %campaign.analysis().title(),
            variants = campaign.variants().len(),
            "Campaign generated"
        );
        Ok(campaign)
    }

    /// Produce one poster from an ad-hoc prompt, skipping analysis.
    ///
    /// # Errors
    ///
    /// Returns the provider error if generation fails.
    #[instrument(
        skip(self, request),
        fields(provider = self.backend.provider_name(), summary_len = request.summary().len())
    )]
    pub async fn run_single(&self, request: &CampaignRequest) -> MarqueeResult<SinglePoster> {
        let prompt = single_prompt(request.summary(), request.style_hint());
        debug!("Stage: generation");
        let image_ref = self.backend.generate(&prompt).await?;
        info!("Poster generated");
        Ok(SinglePoster::new(prompt, image_ref))
    }

    async fn analyze(&self, request: &CampaignRequest) -> MarqueeResult<AnalysisResult> {
        let classifier = Arc::clone(&self.classifier);
        let summary = request.summary().to_string();
        let style_hint = request.style_hint().map(str::to_string);

        tokio::task::spawn_blocking(move || {
            analyze(classifier.as_ref(), &summary, style_hint.as_deref())
        })
        .await
        .map_err(|e| {
            ArtifactError::new(ArtifactErrorKind::Inference(format!(
                "classifier task failed: {}",
                e
            )))
        })?
    }
}
