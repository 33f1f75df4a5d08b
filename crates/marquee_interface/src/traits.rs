//! Trait definitions for the classifier and image backends.

use async_trait::async_trait;
use marquee_core::ImageRef;
use marquee_error::MarqueeResult;
use std::sync::Arc;

/// Core trait that all image-generation backends must implement.
///
/// One backend is selected at startup and shared by every request; the
/// pipeline never branches on which provider it holds.
#[async_trait]
pub trait ImageBackend: Send + Sync {
    /// Generate one image for the prompt.
    async fn generate(&self, prompt: &str) -> MarqueeResult<ImageRef>;

    /// Provider name (e.g., "openai", "huggingface").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "dall-e-3").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: ImageBackend + ?Sized> ImageBackend for Box<T> {
    async fn generate(&self, prompt: &str) -> MarqueeResult<ImageRef> {
        (**self).generate(prompt).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: ImageBackend + ?Sized> ImageBackend for Arc<T> {
    async fn generate(&self, prompt: &str) -> MarqueeResult<ImageRef> {
        (**self).generate(prompt).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Single-label text classifier.
///
/// Implementations return the highest-scoring label for the text; no scores
/// or alternatives are exposed.
pub trait GenreClassifier: Send + Sync {
    /// Predict the genre label for a summary.
    fn infer(&self, text: &str) -> MarqueeResult<String>;
}

impl<T: GenreClassifier + ?Sized> GenreClassifier for Box<T> {
    fn infer(&self, text: &str) -> MarqueeResult<String> {
        (**self).infer(text)
    }
}

impl<T: GenreClassifier + ?Sized> GenreClassifier for Arc<T> {
    fn infer(&self, text: &str) -> MarqueeResult<String> {
        (**self).infer(text)
    }
}
