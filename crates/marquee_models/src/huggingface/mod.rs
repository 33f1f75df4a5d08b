//! HuggingFace Inference text-to-image integration.

mod client;

pub use client::{DEFAULT_HF_BASE_URL, DEFAULT_HF_MODEL, HuggingFaceImageClient};
