//! Image-generation provider integrations for Marquee.
//!
//! Two providers implement [`ImageBackend`](marquee_interface::ImageBackend):
//!
//! - **OpenAI** ([`OpenAiImageClient`]) returns a hosted image URL.
//! - **HuggingFace** ([`HuggingFaceImageClient`]) returns the encoded image
//!   bytes, carried inline as a PNG data URL.
//!
//! One backend is chosen at startup with [`select_backend`]. Selection fails
//! with a configuration error before any network call if the chosen
//! provider's credential is missing.
//!
//! # Example
//!
//! ```no_run
//! use marquee_models::{ImageBackendConfig, ImageProvider, select_backend};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ImageBackendConfig::builder()
//!     .provider(ImageProvider::OpenAi)
//!     .openai_api_key(std::env::var("OPENAI_API_KEY").ok())
//!     .build()?;
//! let backend = select_backend(&config)?;
//! let image = backend.generate("Movie poster, a lone astronaut on Mars").await?;
//! println!("{}", image);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod http;
mod huggingface;
mod openai;

pub use backend::{ImageBackendConfig, ImageBackendConfigBuilder, ImageProvider, select_backend};
pub use huggingface::{DEFAULT_HF_BASE_URL, DEFAULT_HF_MODEL, HuggingFaceImageClient};
pub use openai::{
    DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_IMAGE_MODEL, DEFAULT_OPENAI_IMAGE_SIZE,
    OpenAiImageClient,
};
