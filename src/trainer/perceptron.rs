//! Mistake-driven perceptron training.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::classifier::{LinearModel, PerceptronClassifier, SentimentClassifier};
use crate::data::{Label, SentimentExample};
use crate::error::Result;
use crate::features::{FeatureExtractor, NgramFeatureExtractor};
use crate::trainer::{EpochStats, TrainerConfig, TrainingOutput, TrainingStats};

/// Online perceptron trainer.
///
/// Correctly classified examples are skipped without touching the
/// vocabulary. A mistake extracts features in growth mode, grows the weights
/// and moves every active weight by `learning_rate` toward the gold label.
#[derive(Debug, Clone)]
pub struct PerceptronTrainer<R = StdRng> {
    config: TrainerConfig,
    rng: R,
}

impl PerceptronTrainer<StdRng> {
    /// Create a trainer whose generator is seeded from `config.seed`.
    pub fn new(config: TrainerConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }
}

impl Default for PerceptronTrainer<StdRng> {
    fn default() -> Self {
        Self::new(TrainerConfig::perceptron())
    }
}

impl<R: Rng> PerceptronTrainer<R> {
    /// Create a trainer that shuffles with `rng`; `config.seed` is ignored.
    pub fn with_rng(config: TrainerConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Train a perceptron on `examples`, growing `extractor`'s vocabulary.
    pub fn train(
        &mut self,
        examples: &[SentimentExample],
        extractor: NgramFeatureExtractor,
    ) -> Result<TrainingOutput<PerceptronClassifier>> {
        self.config.validate()?;
        let start = Instant::now();
        let alpha = self.config.learning_rate;

        let mut classifier = PerceptronClassifier::new(LinearModel::new(extractor));
        let mut order: Vec<&SentimentExample> = examples.iter().collect();
        let mut epochs = Vec::with_capacity(self.config.epochs);

        for epoch in 0..self.config.epochs {
            order.shuffle(&mut self.rng);
            let mut mistakes = 0;

            for example in &order {
                if classifier.predict(&example.words) == example.label {
                    continue;
                }
                mistakes += 1;

                let model = classifier.model_mut();
                let features = model.extract_and_grow(&example.words);
                let step = match example.label {
                    Label::Positive => alpha,
                    Label::Negative => -alpha,
                };
                model.update(&features, step);

                debug_assert_eq!(model.weights().len(), model.extractor().indexer().len());
            }

            let vocabulary_size = classifier.model().extractor().indexer().len();
            log::debug!(
                "perceptron epoch {}/{}: {} mistakes, vocabulary size {}",
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
            "Trained perceptron on {} examples in {}ms ({} features)",
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
