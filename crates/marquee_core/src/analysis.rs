//! Creative metadata derived from a summary.

use marquee_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Maximum title length in characters.
pub const MAX_TITLE_CHARS: usize = 60;

/// Result of text analysis: genre plus the metadata derived from it.
///
/// Every field is non-empty and the title is at most [`MAX_TITLE_CHARS`]
/// characters; [`AnalysisResultBuilder::build`] enforces both.
///
/// # Examples
///
/// ```
/// use marquee_core::AnalysisResult;
///
/// let analysis = AnalysisResult::builder()
///     .title("A Legendary Jedi Rises")
///     .tagline("A dynamic and energetic mission you'll never forget.")
///     .genre("Action")
///     .mood("dynamic and energetic")
///     .color_palette("high-contrast oranges and blues")
///     .visual_style_keywords(vec!["epic scale".to_string()])
///     .build()
///     .unwrap();
/// assert_eq!(analysis.genre(), "Action");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(private, name = "build_fields"))]
pub struct AnalysisResult {
    /// Heuristic poster title
    title: String,
    /// One-line tagline
    tagline: String,
    /// Classifier label, as returned
    genre: String,
    /// Mood phrase
    mood: String,
    /// Free-text colour palette
    color_palette: String,
    /// Ordered style keywords
    visual_style_keywords: Vec<String>,
}

impl AnalysisResult {
    /// Start building an analysis result.
    pub fn builder() -> AnalysisResultBuilder {
        AnalysisResultBuilder::default()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("title", &self.title),
            ("tagline", &self.tagline),
            ("genre", &self.genre),
            ("mood", &self.mood),
            ("color_palette", &self.color_palette),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::new(ValidationErrorKind::EmptyField(
                (*name).to_string(),
            )));
        }
        if self.visual_style_keywords.is_empty()
            || self.visual_style_keywords.iter().any(|k| k.trim().is_empty())
        {
            return Err(ValidationError::new(ValidationErrorKind::EmptyField(
                "visual_style_keywords".to_string(),
            )));
        }
        let length = self.title.chars().count();
        if length > MAX_TITLE_CHARS {
            return Err(ValidationError::new(ValidationErrorKind::TitleTooLong {
                length,
                max: MAX_TITLE_CHARS,
            }));
        }
        Ok(())
    }
}

impl AnalysisResultBuilder {
    /// Build and validate the analysis result.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a field is missing or empty, or the
    /// title is too long.
    pub fn build(&self) -> Result<AnalysisResult, ValidationError> {
        let analysis = self
            .build_fields()
            .map_err(|e| ValidationError::new(ValidationErrorKind::EmptyField(e.to_string())))?;
        analysis.validate()?;
        Ok(analysis)
    }
}
