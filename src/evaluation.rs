//! Accuracy, precision, recall and F1 of a classifier on labeled data.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::classifier::SentimentClassifier;
use crate::data::{Label, SentimentExample};

/// Binary classification metrics, with positive as the target class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl EvaluationMetrics {
    /// Tally one prediction.
    pub fn record(&mut self, gold: Label, predicted: Label) {
        match (gold, predicted) {
            (Label::Positive, Label::Positive) => self.true_positives += 1,
            (Label::Negative, Label::Positive) => self.false_positives += 1,
            (Label::Negative, Label::Negative) => self.true_negatives += 1,
            (Label::Positive, Label::Negative) => self.false_negatives += 1,
        }
    }

    /// Combine two tallies.
    pub fn merge(mut self, other: EvaluationMetrics) -> Self {
        self.true_positives += other.true_positives;
        self.false_positives += other.false_positives;
        self.true_negatives += other.true_negatives;
        self.false_negatives += other.false_negatives;
        self
    }

    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    pub fn correct(&self) -> usize {
        self.true_positives + self.true_negatives
    }

    pub fn accuracy(&self) -> f64 {
        ratio(self.correct(), self.total())
    }

    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    pub fn f1(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        }
    }
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Accuracy: {} / {} = {:.6}",
            self.correct(),
            self.total(),
            self.accuracy()
        )?;
        writeln!(
            f,
            "Precision (fraction of predicted positives that are correct): {} / {} = {:.6}; \
             Recall (fraction of true positives predicted correctly): {} / {} = {:.6}",
            self.true_positives,
            self.true_positives + self.false_positives,
            self.precision(),
            self.true_positives,
            self.true_positives + self.false_negatives,
            self.recall()
        )?;
        write!(f, "F1 (harmonic mean of precision and recall): {:.6}", self.f1())
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Evaluate `classifier` on `examples`.
///
/// Predictions are read-only, so they are computed in parallel.
pub fn evaluate<C>(classifier: &C, examples: &[SentimentExample]) -> EvaluationMetrics
where
    C: SentimentClassifier + ?Sized,
{
    examples
        .par_iter()
        .map(|example| {
            let mut metrics = EvaluationMetrics::default();
            metrics.record(example.label, classifier.predict(&example.words));
            metrics
        })
        .reduce(EvaluationMetrics::default, EvaluationMetrics::merge)
}
