//! Genre classifier artifact adapter for Marquee.
//!
//! Loads the DistilBERT sequence-classification artifact produced by the
//! offline training job and predicts a single genre label for a summary.
//!
//! # Artifact layout
//!
//! ```text
//! models/genre_classifier_distilbert/
//! ├── config.json         # hyper-parameters and id2label
//! ├── tokenizer.json      # fast tokenizer
//! └── model.safetensors   # encoder and classification head weights
//! ```
//!
//! # Example
//!
//! ```no_run
//! use marquee_classifier::LazyClassifier;
//! use marquee_interface::GenreClassifier;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier = LazyClassifier::new("models/genre_classifier_distilbert");
//! classifier.load()?; // surface a missing artifact at startup
//! let genre = classifier.infer("A legendary Jedi rises to confront a new Sith empire.")?;
//! println!("{}", genre);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod distilbert;
mod lazy;

pub use artifact::{
    ArtifactConfig, ArtifactFiles, CONFIG_FILE, DEFAULT_ARTIFACT_DIR, TOKENIZER_FILE, WEIGHTS_FILE,
};
pub use distilbert::{DistilBertClassifier, MAX_INPUT_TOKENS};
pub use lazy::{LazyClassifier, Loader};
