//! Online logistic regression training.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::classifier::{
    LinearModel, LogisticRegressionClassifier, negative_probability, positive_probability,
};
use crate::data::{Label, SentimentExample};
use crate::error::{PolarityError, Result};
use crate::features::{FeatureExtractor, NgramFeatureExtractor};
use crate::trainer::{EpochStats, TrainerConfig, TrainingOutput, TrainingStats};

/// Online logistic regression trainer.
///
/// Every example is extracted in growth mode, even when it ends up needing no
/// update, so the vocabulary covers the whole training set after the first
/// epoch. Correctly classified examples then skip the numeric update.
/// Otherwise a positive example adds `learning_rate * (1 - P(1|x))` and a
/// negative example subtracts `learning_rate * (1 - P(0|x))` on each active
/// weight, with both probabilities taken from the weights before the update.
#[derive(Debug, Clone)]
pub struct LogisticRegressionTrainer<R = StdRng> {
    config: TrainerConfig,
    rng: R,
}

impl LogisticRegressionTrainer<StdRng> {
    /// Create a trainer whose generator is seeded from `config.seed`.
    pub fn new(config: TrainerConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }
}

impl Default for LogisticRegressionTrainer<StdRng> {
    fn default() -> Self {
        Self::new(TrainerConfig::logistic_regression())
    }
}

impl<R: Rng> LogisticRegressionTrainer<R> {
    /// Create a trainer that shuffles with `rng`; `config.seed` is ignored.
    pub fn with_rng(config: TrainerConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Train a logistic regression model on `examples`, growing
    /// `extractor`'s vocabulary.
    pub fn train(
        &mut self,
        examples: &[SentimentExample],
        extractor: NgramFeatureExtractor,
    ) -> Result<TrainingOutput<LogisticRegressionClassifier>> {
        self.config.validate()?;
        let start = Instant::now();
        let alpha = self.config.learning_rate;

        let mut classifier = LogisticRegressionClassifier::new(LinearModel::new(extractor));
        let mut order: Vec<&SentimentExample> = examples.iter().collect();
        let mut epochs = Vec::with_capacity(self.config.epochs);

        for epoch in 0..self.config.epochs {
            order.shuffle(&mut self.rng);
            let mut mistakes = 0;

            for example in &order {
                let model = classifier.model_mut();
                let features = model.extract_and_grow(&example.words);

                // Every active feature is known now, so this is the score the
                // classifier itself would compute for the sentence.
                let score = model.score_features(&features);
                let p_1_x = positive_probability(score);
                let p_1_neg_x = negative_probability(score);
                if !p_1_x.is_finite() || !p_1_neg_x.is_finite() {
                    return Err(PolarityError::training(format!(
                        "probability is not finite for score {score} in epoch {}; \
                         lower the learning rate ({alpha})",
                        epoch + 1
                    )));
                }
                let predicted = if p_1_x > 0.5 {
                    Label::Positive
                } else {
                    Label::Negative
                };

                if predicted != example.label {
                    mistakes += 1;
                    let step = match example.label {
                        Label::Positive => alpha * (1.0 - p_1_x),
                        Label::Negative => -(alpha * (1.0 - p_1_neg_x)),
                    };
                    model.update(&features, step);
                }

                debug_assert_eq!(model.weights().len(), model.extractor().indexer().len());
            }

            let vocabulary_size = classifier.model().extractor().indexer().len();
            log::debug!(
                "logistic regression epoch {}/{}: {} mistakes, vocabulary size {}",
                epoch + 1,
                self.config.epochs,
                mistakes,
                vocabulary_size
            );
            epochs.push(EpochStats {
                epoch,
                mistakes,
                vocabulary_size,
            });
        }

        let vocabulary_size = classifier.model().weights().len();
        let training_time_ms = start.elapsed().as_millis() as u64;
        log::info!(
            "Trained logistic regression on {} examples in {}ms ({} features)",
            examples.len(),
            training_time_ms,
            vocabulary_size
        );

        Ok(TrainingOutput {
            classifier,
            stats: TrainingStats {
                epochs,
                examples: examples.len(),
                vocabulary_size,
                training_time_ms,
                trained_at: chrono::Utc::now(),
            },
        })
    }
}
