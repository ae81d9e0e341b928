//! Online trainers for the linear sentiment classifiers.
//!
//! Both trainers make a fixed number of passes over a privately shuffled
//! copy of the training set and update one example at a time. Features are
//! extracted in growth mode, and the weight vector is extended to the new
//! vocabulary size before any weight at a new index is touched.
//!
//! Shuffling uses a generator owned by the trainer. [`PerceptronTrainer::new`]
//! and [`LogisticRegressionTrainer::new`] seed a `StdRng` from the
//! configuration; `with_rng` accepts any other generator.
//!
//! # Example
//!
//! ```
//! use polarity::data::{Label, SentimentExample};
//! use polarity::features::NgramFeatureExtractor;
//! use polarity::classifier::SentimentClassifier;
//! use polarity::trainer;
//!
//! # fn main() -> polarity::error::Result<()> {
//! let examples = vec![
//!     SentimentExample::from_sentence("a great film", Label::Positive),
//!     SentimentExample::from_sentence("a terrible film", Label::Negative),
//! ];
//!
//! let classifier = trainer::train_perceptron(&examples, NgramFeatureExtractor::unigram())?;
//! assert_eq!(classifier.predict(&["great".to_string()]), Label::Positive);
//! # Ok(())
//! # }
//! ```

pub mod logistic;
pub mod perceptron;

pub use logistic::LogisticRegressionTrainer;
pub use perceptron::PerceptronTrainer;

use serde::{Deserialize, Serialize};

use crate::classifier::{LogisticRegressionClassifier, PerceptronClassifier};
use crate::data::SentimentExample;
use crate::error::{PolarityError, Result};
use crate::features::NgramFeatureExtractor;

/// Hyper-parameters of an online trainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Step size of each update.
    pub learning_rate: f64,
    /// Number of passes over the training set.
    pub epochs: usize,
    /// Seed of the shuffling generator.
    pub seed: u64,
}

impl TrainerConfig {
    /// Defaults for the perceptron.
    pub fn perceptron() -> Self {
        Self {
            learning_rate: 0.05,
            epochs: 50,
            seed: 10,
        }
    }

    /// Defaults for logistic regression.
    pub fn logistic_regression() -> Self {
        Self {
            learning_rate: 0.1,
            epochs: 15,
            seed: 2324,
        }
    }

    /// Check that the hyper-parameters are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(PolarityError::config(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(PolarityError::config("epochs must be at least 1"));
        }
        Ok(())
    }
}

/// Statistics for one pass over the training set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// Zero-based epoch number.
    pub epoch: usize,
    /// Examples misclassified before their update.
    pub mistakes: usize,
    /// Vocabulary size at the end of the epoch.
    pub vocabulary_size: usize,
}

/// Training statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Per-epoch statistics, in order.
    pub epochs: Vec<EpochStats>,
    /// Number of training examples.
    pub examples: usize,
    /// Final vocabulary size (equal to the weight vector length).
    pub vocabulary_size: usize,
    /// Training time in milliseconds.
    pub training_time_ms: u64,
    /// Training timestamp.
    pub trained_at: chrono::DateTime<chrono::Utc>,
}

impl TrainingStats {
    /// Mistakes made during the last epoch.
    pub fn final_mistakes(&self) -> usize {
        self.epochs.last().map_or(0, |epoch| epoch.mistakes)
    }
}

/// A trained classifier together with its training statistics.
#[derive(Debug, Clone)]
pub struct TrainingOutput<C> {
    pub classifier: C,
    pub stats: TrainingStats,
}

/// Train a perceptron with the default configuration.
pub fn train_perceptron(
    examples: &[SentimentExample],
    extractor: NgramFeatureExtractor,
) -> Result<PerceptronClassifier> {
    Ok(PerceptronTrainer::default()
        .train(examples, extractor)?
        .classifier)
}

/// Train a logistic regression model with the default configuration.
pub fn train_logistic_regression(
    examples: &[SentimentExample],
    extractor: NgramFeatureExtractor,
) -> Result<LogisticRegressionClassifier> {
    Ok(LogisticRegressionTrainer::default()
        .train(examples, extractor)?
        .classifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let config = TrainerConfig::perceptron();
        assert_eq!(config.learning_rate, 0.05);
        assert_eq!(config.epochs, 50);

        let config = TrainerConfig::logistic_regression();
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.epochs, 15);
    }

    #[test]
    fn test_validate() {
        assert!(TrainerConfig::perceptron().validate().is_ok());

        let mut config = TrainerConfig::perceptron();
        config.epochs = 0;
        assert!(matches!(config.validate(), Err(PolarityError::Config(_))));

        let mut config = TrainerConfig::logistic_regression();
        config.learning_rate = f64::NAN;
        assert!(config.validate().is_err());
        config.learning_rate = -0.1;
        assert!(config.validate().is_err());
    }
}
