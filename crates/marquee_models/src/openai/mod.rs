//! OpenAI Images API integration.

mod client;
mod dto;

pub use client::{
    DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_IMAGE_MODEL, DEFAULT_OPENAI_IMAGE_SIZE,
    OpenAiImageClient,
};
