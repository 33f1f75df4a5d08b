//! Validation error types.

/// Invariant violations on requests and pipeline records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Summary is empty or whitespace only
    #[display("Summary must not be empty")]
    EmptySummary,
    /// A required field is empty
    #[display("Field '{}' must not be empty", _0)]
    EmptyField(String),
    /// Title exceeds the maximum length
    #[display("Title is {} characters, maximum is {}", length, max)]
    TitleTooLong {
        /// Actual length in characters
        length: usize,
        /// Maximum allowed length
        max: usize,
    },
    /// String cannot be parsed as an image reference
    #[display("Invalid image reference: {}", _0)]
    InvalidImageRef(String),
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use marquee_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::EmptySummary);
/// assert_eq!(err.kind(), &ValidationErrorKind::EmptySummary);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}
