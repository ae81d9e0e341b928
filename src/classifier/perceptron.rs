//! Perceptron sentiment classifier.

use crate::classifier::SentimentClassifier;
use crate::classifier::linear::LinearModel;
use crate::data::Label;

/// Linear classifier predicting positive when the score is strictly above
/// zero. A zero score (including a sentence with no known features) is
/// negative.
#[derive(Debug, Clone)]
pub struct PerceptronClassifier {
    model: LinearModel,
}

impl PerceptronClassifier {
    pub fn new(model: LinearModel) -> Self {
        Self { model }
    }

    /// Raw score of a sentence.
    pub fn score(&self, words: &[String]) -> f64 {
        self.model.score(words)
    }

    /// The underlying weights and vocabulary.
    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    pub(crate) fn model_mut(&mut self) -> &mut LinearModel {
        &mut self.model
    }
}

impl SentimentClassifier for PerceptronClassifier {
    fn predict(&self, words: &[String]) -> Label {
        if self.score(words) > 0.0 {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    fn name(&self) -> &str {
        "perceptron"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{FeatureExtractor, NgramFeatureExtractor};
    use crate::weights::WeightVector;

    fn words(sentence: &str) -> Vec<String> {
        sentence.split_whitespace().map(str::to_string).collect()
    }

    fn classifier(weights: Vec<f64>) -> PerceptronClassifier {
        let mut extractor = NgramFeatureExtractor::unigram();
        extractor.extract_features(&words("great terrible plot"), true);
        PerceptronClassifier::new(LinearModel::with_weights(
            WeightVector::from(weights),
            extractor,
        ))
    }

    #[test]
    fn test_predict_by_score_sign() {
        let classifier = classifier(vec![0.1, -0.2, 0.0]);

        assert_eq!(classifier.predict(&words("great plot")), Label::Positive);
        assert_eq!(classifier.predict(&words("terrible plot")), Label::Negative);
        assert_eq!(classifier.name(), "perceptron");
    }

    #[test]
    fn test_zero_score_is_negative() {
        let classifier = classifier(vec![0.1, -0.1, 0.0]);

        assert_eq!(classifier.score(&words("plot")), 0.0);
        assert_eq!(classifier.predict(&words("plot")), Label::Negative);
        assert_eq!(classifier.predict(&words("unseen words only")), Label::Negative);
        assert_eq!(classifier.predict(&[]), Label::Negative);
    }

    #[test]
    #[should_panic]
    fn test_short_weight_vector_panics() {
        let classifier = classifier(vec![0.1]);
        classifier.predict(&words("terrible"));
    }
}
