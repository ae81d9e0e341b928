//! Sentiment classifiers.
//!
//! # Architecture
//!
//! - `SentimentClassifier` trait: common interface for all classifiers
//! - `TrivialSentimentClassifier`: always predicts positive
//! - `PerceptronClassifier`: thresholds a linear score at zero
//! - `LogisticRegressionClassifier`: thresholds the logistic probability at 0.5
//! - `Classifier`: the trained model, one of the above

pub mod linear;
pub mod logistic;
pub mod perceptron;
pub mod trivial;

pub use linear::LinearModel;
pub use logistic::{LogisticRegressionClassifier, negative_probability, positive_probability};
pub use perceptron::PerceptronClassifier;
pub use trivial::TrivialSentimentClassifier;

use crate::data::Label;

/// Sentiment classifier trait.
pub trait SentimentClassifier: Send + Sync {
    /// Predict the label of a tokenized sentence.
    ///
    /// # Panics
    ///
    /// Linear classifiers panic if their weight vector does not cover the
    /// vocabulary, which can only happen when a model is assembled by hand
    /// with too few weights.
    fn predict(&self, words: &[String]) -> Label;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}

/// A trained classifier of any supported kind.
#[derive(Debug, Clone)]
pub enum Classifier {
    Trivial(TrivialSentimentClassifier),
    Perceptron(PerceptronClassifier),
    LogisticRegression(LogisticRegressionClassifier),
}

impl Classifier {
    /// The linear model behind this classifier, if it has one.
    pub fn linear_model(&self) -> Option<&LinearModel> {
        match self {
            Classifier::Trivial(_) => None,
            Classifier::Perceptron(classifier) => Some(classifier.model()),
            Classifier::LogisticRegression(classifier) => Some(classifier.model()),
        }
    }
}

impl SentimentClassifier for Classifier {
    fn predict(&self, words: &[String]) -> Label {
        match self {
            Classifier::Trivial(classifier) => classifier.predict(words),
            Classifier::Perceptron(classifier) => classifier.predict(words),
            Classifier::LogisticRegression(classifier) => classifier.predict(words),
        }
    }

    fn name(&self) -> &str {
        match self {
            Classifier::Trivial(classifier) => classifier.name(),
            Classifier::Perceptron(classifier) => classifier.name(),
            Classifier::LogisticRegression(classifier) => classifier.name(),
        }
    }
}

impl From<TrivialSentimentClassifier> for Classifier {
    fn from(classifier: TrivialSentimentClassifier) -> Self {
        Classifier::Trivial(classifier)
    }
}

impl From<PerceptronClassifier> for Classifier {
    fn from(classifier: PerceptronClassifier) -> Self {
        Classifier::Perceptron(classifier)
    }
}

impl From<LogisticRegressionClassifier> for Classifier {
    fn from(classifier: LogisticRegressionClassifier) -> Self {
        Classifier::LogisticRegression(classifier)
    }
}
