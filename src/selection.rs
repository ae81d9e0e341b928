//! Model selection: pick and train the classifier a configuration names.
//!
//! # Example
//!
//! ```
//! use polarity::classifier::SentimentClassifier;
//! use polarity::data::{Label, SentimentExample};
//! use polarity::selection::{ModelConfig, train_model};
//!
//! # fn main() -> polarity::error::Result<()> {
//! let examples = vec![
//!     SentimentExample::from_sentence("a great film", Label::Positive),
//!     SentimentExample::from_sentence("a terrible film", Label::Negative),
//! ];
//!
//! let config = ModelConfig::from_names("LR", "UNIGRAM")?;
//! let model = train_model(&config, &examples)?;
//! assert_eq!(model.classifier.predict(&["great".to_string()]), Label::Positive);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::classifier::{Classifier, TrivialSentimentClassifier};
use crate::data::SentimentExample;
use crate::error::{PolarityError, Result};
use crate::features::{NgramFeatureExtractor, NgramOrder};
use crate::trainer::{LogisticRegressionTrainer, PerceptronTrainer, TrainerConfig, TrainingStats};

/// The kind of model to train.
///
/// Deserialization goes through [`FromStr`], so names are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum ModelKind {
    /// Always predicts positive.
    Trivial,
    /// Mistake-driven perceptron.
    Perceptron,
    /// Logistic regression.
    #[serde(rename = "LR")]
    LogisticRegression,
}

impl ModelKind {
    /// Configuration name of this model.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::Trivial => "TRIVIAL",
            ModelKind::Perceptron => "PERCEPTRON",
            ModelKind::LogisticRegression => "LR",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = PolarityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "TRIVIAL" => Ok(ModelKind::Trivial),
            "PERCEPTRON" => Ok(ModelKind::Perceptron),
            "LR" => Ok(ModelKind::LogisticRegression),
            _ => Err(PolarityError::config(format!(
                "Unknown model '{s}': pass in TRIVIAL, PERCEPTRON, or LR"
            ))),
        }
    }
}

impl TryFrom<String> for ModelKind {
    type Error = PolarityError;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

/// Which model to train, on which features, with which hyper-parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model kind.
    pub model: ModelKind,
    /// Feature set.
    pub feats: NgramOrder,
    /// Perceptron hyper-parameters.
    #[serde(default = "TrainerConfig::perceptron")]
    pub perceptron: TrainerConfig,
    /// Logistic regression hyper-parameters.
    #[serde(default = "TrainerConfig::logistic_regression")]
    pub logistic_regression: TrainerConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::new(ModelKind::Perceptron, NgramOrder::Unigram)
    }
}

impl ModelConfig {
    /// Create a configuration with default hyper-parameters.
    pub fn new(model: ModelKind, feats: NgramOrder) -> Self {
        Self {
            model,
            feats,
            perceptron: TrainerConfig::perceptron(),
            logistic_regression: TrainerConfig::logistic_regression(),
        }
    }

    /// Create a configuration from model and feature set names.
    pub fn from_names(model: &str, feats: &str) -> Result<Self> {
        Ok(Self::new(model.parse()?, feats.parse()?))
    }

    /// Load a configuration from a JSON file.
    ///
    /// Well-formed JSON holding an unknown name or a mistyped value is a
    /// configuration error; malformed JSON stays a JSON error.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ModelConfig = serde_json::from_str(&content).map_err(|e| match e.classify() {
            Category::Data => PolarityError::config(e.to_string()),
            _ => PolarityError::Json(e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the hyper-parameters of the selected model.
    pub fn validate(&self) -> Result<()> {
        match self.model {
            ModelKind::Trivial => Ok(()),
            ModelKind::Perceptron => self.perceptron.validate(),
            ModelKind::LogisticRegression => self.logistic_regression.validate(),
        }
    }
}

/// A trained classifier and, for learned models, its training statistics.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    pub classifier: Classifier,
    pub stats: Option<TrainingStats>,
}

/// Train the model `config` selects on `examples`.
pub fn train_model(config: &ModelConfig, examples: &[SentimentExample]) -> Result<TrainedModel> {
    config.validate()?;
    log::info!(
        "Training {} model on {} features over {} examples",
        config.model,
        config.feats,
        examples.len()
    );

    match config.model {
        ModelKind::Trivial => Ok(TrainedModel {
            classifier: TrivialSentimentClassifier::new().into(),
            stats: None,
        }),
        ModelKind::Perceptron => {
            let output = PerceptronTrainer::new(config.perceptron.clone())
                .train(examples, NgramFeatureExtractor::new(config.feats))?;
            Ok(TrainedModel {
                classifier: output.classifier.into(),
                stats: Some(output.stats),
            })
        }
        ModelKind::LogisticRegression => {
            let output = LogisticRegressionTrainer::new(config.logistic_regression.clone())
                .train(examples, NgramFeatureExtractor::new(config.feats))?;
            Ok(TrainedModel {
                classifier: output.classifier.into(),
                stats: Some(output.stats),
            })
        }
    }
}
