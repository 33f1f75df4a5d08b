//! Trait definitions for the Marquee poster campaign generator.
//!
//! The pipeline talks to its two external collaborators only through these
//! traits: a text classifier that names a genre, and an image backend that
//! turns a prompt into an image.

mod traits;

pub use traits::{GenreClassifier, ImageBackend};
