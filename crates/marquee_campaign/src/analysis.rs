//! Text analysis: classifier inference plus rule derivation.

use crate::rules;
use marquee_core::AnalysisResult;
use marquee_error::MarqueeResult;
use marquee_interface::GenreClassifier;
use tracing::{debug, instrument};

/// Derive the creative metadata for a summary.
///
/// The classifier is called once; everything else follows from its label.
/// `style_hint` is accepted for symmetry with prompt composition and does not
/// influence the analysis.
///
/// # Errors
///
/// Classifier errors propagate unchanged. A result that violates the
/// [`AnalysisResult`] invariants is a validation error.
#[instrument(skip_all, fields(summary_len = summary.len()))]
pub fn analyze<C>(
    classifier: &C,
    summary: &str,
    _style_hint: Option<&str>,
) -> MarqueeResult<AnalysisResult>
where
    C: GenreClassifier + ?Sized,
{
    let genre = classifier.infer(summary)?;
    debug!(genre = %genre, "Classified summary");

    let mood = rules::mood(&genre);
    let analysis = AnalysisResult::builder()
        .title(rules::title(summary, &genre))
        .tagline(rules::tagline(&genre, mood))
        .mood(mood)
        .color_palette(rules::color_palette(&genre))
        .visual_style_keywords(rules::visual_style_keywords(&genre))
        .genre(genre)
        .build()?;

    Ok(analysis)
}
