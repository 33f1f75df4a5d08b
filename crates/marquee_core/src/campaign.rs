//! Generated images and the aggregated campaign.

use crate::{AnalysisResult, ImageRef, VariantKind};
use serde::{Deserialize, Serialize};

/// An image generated for one prompt variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GeneratedImage {
    /// Variant the image renders
    variant_name: VariantKind,
    /// Prompt sent to the provider
    prompt_text: String,
    /// Where the image lives
    image_ref: ImageRef,
}

impl GeneratedImage {
    /// Create a generated image record.
    pub fn new(
        variant_name: VariantKind,
        prompt_text: impl Into<String>,
        image_ref: ImageRef,
    ) -> Self {
        Self {
            variant_name,
            prompt_text: prompt_text.into(),
            image_ref,
        }
    }
}

/// One entry of a campaign, numbered by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CampaignVariant {
    /// Dense zero-based position in the campaign
    id: usize,
    /// Variant name
    variant: VariantKind,
    /// Prompt sent to the provider
    prompt: String,
    /// Generated image
    image_ref: ImageRef,
}

/// The aggregate result: shared analysis plus the ordered variants.
///
/// # Examples
///
/// ```
/// use marquee_core::{AnalysisResult, Campaign, GeneratedImage, ImageRef, VariantKind};
///
/// let analysis = AnalysisResult::builder()
///     .title("Night City")
///     .tagline("A dramatic story.")
///     .genre("Drama")
///     .mood("dramatic")
///     .color_palette("balanced warm and cool tones")
///     .visual_style_keywords(vec!["cinematic".to_string()])
///     .build()
///     .unwrap();
/// let images = vec![
///     GeneratedImage::new(VariantKind::TheatricalPoster, "p0", ImageRef::remote("https://a/0.png")),
///     GeneratedImage::new(VariantKind::StreamingThumbnail, "p1", ImageRef::remote("https://a/1.png")),
/// ];
/// let campaign = Campaign::assemble(analysis, images);
/// let ids: Vec<usize> = campaign.variants().iter().map(|v| *v.id()).collect();
/// assert_eq!(ids, vec![0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Campaign {
    /// Shared creative metadata
    #[serde(flatten)]
    analysis: AnalysisResult,
    /// Variants in campaign order
    variants: Vec<CampaignVariant>,
}

impl Campaign {
    /// Aggregate generated images, assigning ids by position.
    pub fn assemble(analysis: AnalysisResult, images: Vec<GeneratedImage>) -> Self {
        let variants = images
            .into_iter()
            .enumerate()
            .map(|(id, image)| CampaignVariant {
                id,
                variant: image.variant_name,
                prompt: image.prompt_text,
                image_ref: image.image_ref,
            })
            .collect();
        Self { analysis, variants }
    }
}

/// Result of a single ad-hoc poster run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SinglePoster {
    /// Prompt sent to the provider
    prompt: String,
    /// Generated image
    image_ref: ImageRef,
}

impl SinglePoster {
    /// Create a single poster result.
    pub fn new(prompt: impl Into<String>, image_ref: ImageRef) -> Self {
        Self {
            prompt: prompt.into(),
            image_ref,
        }
    }
}
