//! Artifact directory layout and metadata.

use marquee_error::{ArtifactError, ArtifactErrorKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Default artifact location, relative to the working directory.
pub const DEFAULT_ARTIFACT_DIR: &str = "models/genre_classifier_distilbert";
/// Model configuration file name.
pub const CONFIG_FILE: &str = "config.json";
/// Tokenizer file name.
pub const TOKENIZER_FILE: &str = "tokenizer.json";
/// Weights file name.
pub const WEIGHTS_FILE: &str = "model.safetensors";

/// Paths of the files making up an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFiles {
    /// `config.json`
    pub config: PathBuf,
    /// `tokenizer.json`
    pub tokenizer: PathBuf,
    /// `model.safetensors`
    pub weights: PathBuf,
}

impl ArtifactFiles {
    /// Resolve and check the artifact files under `location`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the directory or any file is absent.
    #[instrument(skip_all, fields(location = %location.display()))]
    pub fn locate(location: &Path) -> Result<Self, ArtifactError> {
        if !location.is_dir() {
            return Err(ArtifactError::new(ArtifactErrorKind::NotFound(format!(
                "{} is not a directory; run the training job first",
                location.display()
            ))));
        }

        let files = Self {
            config: location.join(CONFIG_FILE),
            tokenizer: location.join(TOKENIZER_FILE),
            weights: location.join(WEIGHTS_FILE),
        };
        for path in [&files.config, &files.tokenizer, &files.weights] {
            if !path.is_file() {
                return Err(ArtifactError::new(ArtifactErrorKind::NotFound(
                    path.display().to_string(),
                )));
            }
        }

        debug!("Artifact files present");
        Ok(files)
    }
}

#[derive(Deserialize)]
struct RawConfig {
    dim: usize,
    id2label: HashMap<String, String>,
}

/// The parts of `config.json` the classification head needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactConfig {
    dim: usize,
    labels: Vec<String>,
}

impl ArtifactConfig {
    /// Parse `config.json` contents.
    ///
    /// Label keys are stringified indices (`"0"`, `"1"`, ...) and must cover
    /// `0..N` without gaps.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` if the JSON is invalid, has no labels, or the label
    /// indices are not dense.
    pub fn parse(json: &str) -> Result<Self, ArtifactError> {
        let malformed =
            |reason: String| ArtifactError::new(ArtifactErrorKind::Malformed(reason));

        let raw: RawConfig = serde_json::from_str(json)
            .map_err(|e| malformed(format!("{}: {}", CONFIG_FILE, e)))?;

        if raw.id2label.is_empty() {
            return Err(malformed(format!("{} has no id2label entries", CONFIG_FILE)));
        }

        let mut indexed = raw
            .id2label
            .into_iter()
            .map(|(key, label)| {
                key.parse::<usize>()
                    .map(|index| (index, label))
                    .map_err(|_| malformed(format!("label key '{}' is not an index", key)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        indexed.sort_by_key(|(index, _)| *index);

        if indexed
            .iter()
            .enumerate()
            .any(|(position, (index, _))| position != *index)
        {
            return Err(malformed(format!(
                "{} label indices are not dense",
                CONFIG_FILE
            )));
        }

        Ok(Self {
            dim: raw.dim,
            labels: indexed.into_iter().map(|(_, label)| label).collect(),
        })
    }

    /// Hidden size of the encoder.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Labels ordered by class index.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label for a class index.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}
