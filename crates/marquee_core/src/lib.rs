//! Core data types for the Marquee poster campaign generator.
//!
//! Every record here is created fresh for one pipeline run and never mutated
//! afterwards. Constructors validate the invariants the pipeline relies on.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod campaign;
mod image;
mod request;
mod variant;

pub use analysis::{AnalysisResult, AnalysisResultBuilder, MAX_TITLE_CHARS};
pub use campaign::{Campaign, CampaignVariant, GeneratedImage, SinglePoster};
pub use image::{ImageRef, PNG_MEDIA_TYPE};
pub use request::CampaignRequest;
pub use variant::{PromptVariant, VariantKind};
