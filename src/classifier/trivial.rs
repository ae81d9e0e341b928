//! Baseline classifier.

use crate::classifier::SentimentClassifier;
use crate::data::Label;

/// Sentiment classifier that always predicts the positive class.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrivialSentimentClassifier;

impl TrivialSentimentClassifier {
    pub fn new() -> Self {
        TrivialSentimentClassifier
    }
}

impl SentimentClassifier for TrivialSentimentClassifier {
    fn predict(&self, _words: &[String]) -> Label {
        Label::Positive
    }

    fn name(&self) -> &str {
        "trivial"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_positive() {
        let classifier = TrivialSentimentClassifier::new();
        let words = vec!["a".to_string(), "dreadful".to_string(), "mess".to_string()];

        assert_eq!(classifier.predict(&words), Label::Positive);
        assert_eq!(classifier.predict(&[]), Label::Positive);
    }
}
