//! Classifier artifact error types.

/// Specific error conditions for the classifier artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ArtifactErrorKind {
    /// Artifact directory or one of its files does not exist
    #[display("Classifier artifact not found: {}", _0)]
    NotFound(String),
    /// Artifact exists but cannot be parsed or loaded
    #[display("Classifier artifact is malformed: {}", _0)]
    Malformed(String),
    /// Forward pass failed on a loaded artifact
    #[display("Classifier inference failed: {}", _0)]
    Inference(String),
}

/// Classifier artifact error with location tracking.
///
/// # Examples
///
/// ```
/// use marquee_error::{ArtifactError, ArtifactErrorKind};
///
/// let err = ArtifactError::new(ArtifactErrorKind::NotFound("models/genre".to_string()));
/// assert!(err.is_missing());
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Artifact Error: {} at line {} in {}", kind, line, file)]
pub struct ArtifactError {
    /// The kind of error that occurred
    pub kind: ArtifactErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ArtifactError {
    /// Create a new artifact error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ArtifactErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the artifact could not be loaded at all (absent or malformed).
    pub fn is_missing(&self) -> bool {
        matches!(
            self.kind,
            ArtifactErrorKind::NotFound(_) | ArtifactErrorKind::Malformed(_)
        )
    }
}
