//! DistilBERT sequence classifier running on candle.

use crate::{ArtifactConfig, ArtifactFiles};
use candle_core::{D, DType, Device, IndexOp, Module, Tensor};
use candle_nn::{Linear, VarBuilder, linear};
use candle_transformers::models::distilbert::{Config as DistilBertConfig, DistilBertModel};
use marquee_error::{ArtifactError, ArtifactErrorKind, MarqueeResult};
use marquee_interface::GenreClassifier;
use std::path::Path;
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{debug, info, instrument};

/// Inputs longer than this many tokens are truncated.
pub const MAX_INPUT_TOKENS: usize = 256;

/// A loaded DistilBERT genre classifier.
///
/// The head mirrors `DistilBertForSequenceClassification`: the hidden state
/// of the first token goes through `pre_classifier`, ReLU, then `classifier`.
pub struct DistilBertClassifier {
    model: DistilBertModel,
    pre_classifier: Linear,
    classifier: Linear,
    tokenizer: Tokenizer,
    config: ArtifactConfig,
    device: Device,
}

impl std::fmt::Debug for DistilBertClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistilBertClassifier")
            .field("labels", &self.config.labels())
            .field("dim", &self.config.dim())
            .finish_non_exhaustive()
    }
}

fn malformed(what: &str, err: impl std::fmt::Display) -> ArtifactError {
    ArtifactError::new(ArtifactErrorKind::Malformed(format!("{}: {}", what, err)))
}

fn inference(err: impl std::fmt::Display) -> ArtifactError {
    ArtifactError::new(ArtifactErrorKind::Inference(err.to_string()))
}

impl DistilBertClassifier {
    /// Load the artifact in `location` onto the CPU.
    ///
    /// # Errors
    ///
    /// Returns an artifact error (`NotFound` or `Malformed`) if the directory
    /// is absent or any file cannot be parsed or loaded.
    #[instrument(skip_all, fields(location = %location.display()))]
    pub fn load(location: &Path) -> MarqueeResult<Self> {
        let files = ArtifactFiles::locate(location)?;

        let config_json = std::fs::read_to_string(&files.config)
            .map_err(|e| malformed(&files.config.display().to_string(), e))?;
        let config = ArtifactConfig::parse(&config_json)?;
        let model_config: DistilBertConfig = serde_json::from_str(&config_json)
            .map_err(|e| malformed(&files.config.display().to_string(), e))?;

        let mut tokenizer = Tokenizer::from_file(&files.tokenizer)
            .map_err(|e| malformed(&files.tokenizer.display().to_string(), e))?;
        tokenizer
            .with_padding(None)
            .with_truncation(Some(TruncationParams {
                max_length: MAX_INPUT_TOKENS,
                ..Default::default()
            }))
            .map_err(|e| malformed(&files.tokenizer.display().to_string(), e))?;

        let device = Device::Cpu;
        let weights = std::fs::read(&files.weights)
            .map_err(|e| malformed(&files.weights.display().to_string(), e))?;
        let vb = VarBuilder::from_buffered_safetensors(weights, DType::F32, &device)
            .map_err(|e| malformed(&files.weights.display().to_string(), e))?;

        // Sequence-classification checkpoints nest the encoder under `distilbert.`.
        let model = DistilBertModel::load(vb.pp("distilbert"), &model_config)
            .or_else(|_| DistilBertModel::load(vb.clone(), &model_config))
            .map_err(|e| malformed("distilbert encoder", e))?;
        let dim = config.dim();
        let pre_classifier = linear(dim, dim, vb.pp("pre_classifier"))
            .map_err(|e| malformed("pre_classifier", e))?;
        let classifier = linear(dim, config.labels().len(), vb.pp("classifier"))
            .map_err(|e| malformed("classifier", e))?;

        info!(labels = config.labels().len(), "Loaded genre classifier");

        Ok(Self {
            model,
            pre_classifier,
            classifier,
            tokenizer,
            config,
            device,
        })
    }

    /// Labels the classifier can predict, ordered by class index.
    pub fn labels(&self) -> &[String] {
        self.config.labels()
    }

    fn logits(&self, text: &str) -> Result<Tensor, ArtifactError> {
        let encoding = self.tokenizer.encode(text, true).map_err(inference)?;
        let ids = encoding.get_ids();
        let seq_len = ids.len();
        debug!(tokens = seq_len, "Encoded summary");

        let input_ids = Tensor::new(ids, &self.device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(inference)?;
        // Nonzero marks positions the encoder must ignore.
        let ignore: Vec<u8> = encoding
            .get_attention_mask()
            .iter()
            .map(|&attend| u8::from(attend == 0))
            .collect();
        let mask = Tensor::from_vec(ignore, (1, 1, 1, seq_len), &self.device).map_err(inference)?;

        let hidden = self.model.forward(&input_ids, &mask).map_err(inference)?;
        let first_token = hidden.i((.., 0)).map_err(inference)?;
        let pooled = self
            .pre_classifier
            .forward(&first_token)
            .and_then(|t| t.relu())
            .map_err(inference)?;
        self.classifier.forward(&pooled).map_err(inference)
    }
}

impl GenreClassifier for DistilBertClassifier {
    #[instrument(skip_all, fields(chars = text.len()))]
    fn infer(&self, text: &str) -> MarqueeResult<String> {
        let logits = self.logits(text)?;
        let index = logits
            .argmax(D::Minus1)
            .and_then(|t| t.squeeze(0))
            .and_then(|t| t.to_scalar::<u32>())
            .map_err(inference)? as usize;

        let label = self.config.label(index).ok_or_else(|| {
            ArtifactError::new(ArtifactErrorKind::Malformed(format!(
                "class index {} has no label",
                index
            )))
        })?;
        debug!(label, index, "Predicted genre");
        Ok(label.to_string())
    }
}
