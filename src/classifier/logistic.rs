//! Logistic regression sentiment classifier.

use crate::classifier::SentimentClassifier;
use crate::classifier::linear::LinearModel;
use crate::data::Label;

/// `P(y = 1 | x)` for a score `s`, computed as `e^s / (1 + e^s)`.
pub fn positive_probability(score: f64) -> f64 {
    score.exp() / (1.0 + score.exp())
}

/// `P(y = 0 | x)` for a score `s`, computed as `1 / (1 + e^s)`.
///
/// This is its own formula rather than `1 - positive_probability(s)`; the two
/// agree mathematically but not always bit for bit, and training reads this
/// exact value.
pub fn negative_probability(score: f64) -> f64 {
    1.0 / (1.0 + score.exp())
}

/// Linear classifier that thresholds the logistic probability at 0.5.
#[derive(Debug, Clone)]
pub struct LogisticRegressionClassifier {
    model: LinearModel,
}

impl LogisticRegressionClassifier {
    pub fn new(model: LinearModel) -> Self {
        Self { model }
    }

    /// Raw score of a sentence.
    pub fn score(&self, words: &[String]) -> f64 {
        self.model.score(words)
    }

    /// Probability that the sentence is positive.
    pub fn p_1_x(&self, words: &[String]) -> f64 {
        positive_probability(self.score(words))
    }

    /// Probability that the sentence is negative.
    pub fn p_1_neg_x(&self, words: &[String]) -> f64 {
        negative_probability(self.score(words))
    }

    /// The underlying weights and vocabulary.
    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    pub(crate) fn model_mut(&mut self) -> &mut LinearModel {
        &mut self.model
    }
}

impl SentimentClassifier for LogisticRegressionClassifier {
    fn predict(&self, words: &[String]) -> Label {
        if self.p_1_x(words) > 0.5 {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}
