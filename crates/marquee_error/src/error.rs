//! Top-level error wrapper types.

use crate::{ArtifactError, ConfigError, ProviderError, ValidationError};

/// Every failure the campaign pipeline can surface.
///
/// # Examples
///
/// ```
/// use marquee_error::{MarqueeError, MarqueeErrorKind, ConfigError};
///
/// let err: MarqueeError = ConfigError::new("missing key").into();
/// assert!(matches!(err.kind(), MarqueeErrorKind::Config(_)));
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MarqueeErrorKind {
    /// Classifier artifact error
    #[from(ArtifactError)]
    Artifact(ArtifactError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Image provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Validation error
    #[from(ValidationError)]
    Validation(ValidationError),
}

/// Marquee error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Marquee Error: {}", _0)]
pub struct MarqueeError(Box<MarqueeErrorKind>);

impl MarqueeError {
    /// Create a new error from a kind.
    pub fn new(kind: MarqueeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MarqueeErrorKind {
        &self.0
    }

    /// Whether this is an artifact load failure (`ArtifactMissing`).
    pub fn is_artifact_missing(&self) -> bool {
        matches!(self.kind(), MarqueeErrorKind::Artifact(e) if e.is_missing())
    }

    /// Whether this is a configuration failure.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind(), MarqueeErrorKind::Config(_))
    }

    /// Whether this is an external service failure.
    pub fn is_external_service(&self) -> bool {
        matches!(self.kind(), MarqueeErrorKind::Provider(_))
    }

    /// Whether this is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), MarqueeErrorKind::Validation(_))
    }
}

// Generic From implementation for any type that converts to MarqueeErrorKind
impl<T> From<T> for MarqueeError
where
    T: Into<MarqueeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Marquee operations.
pub type MarqueeResult<T> = std::result::Result<T, MarqueeError>;
