//! Inbound campaign request.

use marquee_error::{ValidationError, ValidationErrorKind};
use serde::Serialize;

/// A movie summary with an optional style hint.
///
/// # Examples
///
/// ```
/// use marquee_core::CampaignRequest;
///
/// let request = CampaignRequest::new("A lone hero walks through a neon city.", Some("  ".to_string())).unwrap();
/// assert_eq!(request.style_hint(), None);
///
/// assert!(CampaignRequest::new("   ", None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignRequest {
    summary: String,
    style_hint: Option<String>,
}

impl CampaignRequest {
    /// Create a request, rejecting a blank summary.
    ///
    /// A blank style hint is treated as absent.
    #[track_caller]
    pub fn new(
        summary: impl Into<String>,
        style_hint: Option<String>,
    ) -> Result<Self, ValidationError> {
        let summary = summary.into();
        if summary.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptySummary));
        }
        let style_hint = style_hint.filter(|hint| !hint.trim().is_empty());
        Ok(Self {
            summary,
            style_hint,
        })
    }

    /// The raw movie summary.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// The style hint, if one was given.
    pub fn style_hint(&self) -> Option<&str> {
        self.style_hint.as_deref()
    }
}
