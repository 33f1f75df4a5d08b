//! Image provider error types.

/// Error conditions raised while talking to an image-generation service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// HTTP transport failed before a response arrived
    #[display("Request failed: {}", _0)]
    Transport(String),
    /// Service answered with a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },
    /// Service answered with a body of the wrong shape
    #[display("Unexpected response: {}", _0)]
    UnexpectedResponse(String),
    /// Request exceeded the configured timeout
    #[display("Request timed out: {}", _0)]
    Timeout(String),
}

/// Image provider error with location tracking.
///
/// # Examples
///
/// ```
/// use marquee_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(
///     "openai",
///     ProviderErrorKind::Api { status: 401, message: "bad key".to_string() },
/// );
/// assert!(format!("{}", err).contains("openai"));
/// assert!(format!("{}", err).contains("401"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error ({}): {} at line {} in {}", provider, kind, line, file)]
pub struct ProviderError {
    /// Provider that produced the error
    pub provider: &'static str,
    /// The specific error kind
    pub kind: ProviderErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new provider error.
    #[track_caller]
    pub fn new(provider: &'static str, kind: ProviderErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            provider,
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
