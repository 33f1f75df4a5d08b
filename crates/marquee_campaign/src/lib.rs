//! Campaign generation pipeline for Marquee.
//!
//! A summary flows through four stages:
//!
//! 1. **Analysis**: the genre classifier predicts a label and the rule
//!    tables in [`rules`] derive mood, palette, style keywords, title and
//!    tagline from it.
//! 2. **Composition**: [`compose`] writes one prompt per [`VariantKind`].
//! 3. **Generation**: the selected image backend renders every prompt.
//! 4. **Aggregation**: images are numbered by position into a [`Campaign`].
//!
//! [`CampaignPipeline`] drives the stages; every error aborts the run.
//!
//! [`VariantKind`]: marquee_core::VariantKind
//! [`Campaign`]: marquee_core::Campaign

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod pipeline;
mod prompt;
pub mod rules;

pub use analysis::analyze;
pub use pipeline::{CampaignPipeline, GenerationOptions, GenerationOptionsBuilder};
pub use prompt::{compose, single_prompt};
