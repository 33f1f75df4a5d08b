//! Creative variants and their prompts.

use serde::{Deserialize, Serialize};

/// The fixed, ordered set of creative renderings in a campaign.
///
/// Iteration order (`VariantKind::iter()`) is declaration order and defines
/// campaign order. The `strum` name is the single source for prompts, JSON
/// and file names.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumCount,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
#[serde(into = "&'static str", try_from = "String")]
pub enum VariantKind {
    /// Full-size theatrical one-sheet
    #[strum(serialize = "theatrical poster")]
    TheatricalPoster,
    /// Streaming catalogue thumbnail
    #[strum(serialize = "streaming thumbnail")]
    StreamingThumbnail,
    /// Social media teaser
    #[strum(serialize = "social media teaser")]
    SocialMediaTeaser,
}

impl VariantKind {
    /// Name used in prompts and responses.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

impl TryFrom<String> for VariantKind {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One prompt for one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PromptVariant {
    /// Which rendering the prompt is for
    variant_name: VariantKind,
    /// Full prompt text
    prompt_text: String,
}

impl PromptVariant {
    /// Pair a variant with its prompt.
    pub fn new(variant_name: VariantKind, prompt_text: impl Into<String>) -> Self {
        Self {
            variant_name,
            prompt_text: prompt_text.into(),
        }
    }
}
