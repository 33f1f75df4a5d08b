//! Error types for the Marquee campaign generator.
//!
//! This crate provides the error types shared by every Marquee crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! The four families map onto the pipeline's failure modes:
//!
//! | Family | Raised when |
//! |---|---|
//! | [`ArtifactError`] | the classifier artifact is absent, malformed, or fails to run |
//! | [`ConfigError`] | a provider credential or setting is missing |
//! | [`ProviderError`] | an image-generation service call fails |
//! | [`ValidationError`] | a request or record violates its invariants |
//!
//! # Examples
//!
//! ```
//! use marquee_error::{MarqueeResult, ConfigError};
//!
//! fn select() -> MarqueeResult<()> {
//!     Err(ConfigError::new("OPENAI_API_KEY not set"))?
//! }
//!
//! assert!(select().unwrap_err().to_string().contains("OPENAI_API_KEY"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod config;
mod error;
mod provider;
mod validation;

pub use artifact::{ArtifactError, ArtifactErrorKind};
pub use config::ConfigError;
pub use error::{MarqueeError, MarqueeErrorKind, MarqueeResult};
pub use provider::{ProviderError, ProviderErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
