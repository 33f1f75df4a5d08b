//! Prompt composition.

use marquee_core::{AnalysisResult, PromptVariant, VariantKind};
use strum::IntoEnumIterator;

/// One prompt per variant, in [`VariantKind`] declaration order.
pub fn compose(
    summary: &str,
    analysis: &AnalysisResult,
    style_hint: Option<&str>,
) -> Vec<PromptVariant> {
    VariantKind::iter()
        .map(|variant| {
            PromptVariant::new(
                variant,
                variant_prompt(summary, analysis, variant, style_hint),
            )
        })
        .collect()
}

fn variant_prompt(
    summary: &str,
    analysis: &AnalysisResult,
    variant: VariantKind,
    style_hint: Option<&str>,
) -> String {
    let mut prompt = format!(
        "Movie poster, {variant} key art, cinematic composition, dramatic lighting, high detail, 4k. \
         Genre: {genre}. Mood: {mood}. \
         Color palette: {palette}. \
         Visual style: {keywords}. \
         Title text on poster: \"{title}\". \
         Tagline on the poster: \"{tagline}\". \
         Design a poster for the following movie summary: {summary}. ",
        variant = variant,
        genre = analysis.genre(),
        mood = analysis.mood(),
        palette = analysis.color_palette(),
        keywords = analysis.visual_style_keywords().join(", "),
        title = analysis.title(),
        tagline = analysis.tagline(),
        summary = summary,
    );
    if let Some(hint) = style_hint {
        prompt.push_str(&format!("The overall style should feel {}.", hint));
    }
    prompt
}

/// Prompt for a single ad-hoc poster, skipping analysis.
pub fn single_prompt(summary: &str, style_hint: Option<&str>) -> String {
    let mut prompt = format!(
        "Movie poster, cinematic composition, dramatic lighting, high detail, 4k. \
         Design a poster for a movie with the following description: \"{}\". \
         Include a central character and bold typography.",
        summary
    );
    if let Some(hint) = style_hint {
        prompt.push_str(&format!(" The style should feel {}.", hint));
    }
    prompt
}
