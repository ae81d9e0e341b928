//! Weight vector and extractor pair shared by the linear classifiers.

use std::cmp::Ordering;

use crate::features::{FeatureExtractor, NgramFeatureExtractor, SparseFeatureVector};
use crate::weights::WeightVector;

/// A linear model over sparse n-gram features.
#[derive(Debug, Clone)]
pub struct LinearModel {
    weights: WeightVector,
    extractor: NgramFeatureExtractor,
}

impl LinearModel {
    /// Create a model sized to the extractor's current vocabulary.
    pub fn new(extractor: NgramFeatureExtractor) -> Self {
        let weights = WeightVector::zeros(extractor.indexer().len());
        Self { weights, extractor }
    }

    /// Create a model from existing weights.
    pub fn with_weights(weights: WeightVector, extractor: NgramFeatureExtractor) -> Self {
        Self { weights, extractor }
    }

    /// Score a sentence against the frozen vocabulary.
    pub fn score(&self, words: &[String]) -> f64 {
        self.score_features(&self.extractor.lookup_features(words))
    }

    /// Dot product of already-extracted features with the weights.
    pub fn score_features(&self, features: &SparseFeatureVector) -> f64 {
        self.weights.score(features)
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    pub fn extractor(&self) -> &NgramFeatureExtractor {
        &self.extractor
    }

    /// Extract features in growth mode, then extend the weights to cover
    /// every index the vocabulary now holds.
    pub(crate) fn extract_and_grow(&mut self, words: &[String]) -> SparseFeatureVector {
        let features = self.extractor.extract_features(words, true);
        self.weights.grow_to(self.extractor.indexer().len());
        features
    }

    /// Add `step * value` to the weight of every active feature.
    pub(crate) fn update(&mut self, features: &SparseFeatureVector, step: f64) {
        self.weights.add_scaled(features, step);
    }

    /// The `k` features with the largest weights, highest first.
    pub fn top_features(&self, k: usize) -> Vec<(&str, f64)> {
        self.ranked_features(k, |a, b| b.total_cmp(a))
    }

    /// The `k` features with the smallest weights, lowest first.
    pub fn bottom_features(&self, k: usize) -> Vec<(&str, f64)> {
        self.ranked_features(k, |a, b| a.total_cmp(b))
    }

    fn ranked_features<F>(&self, k: usize, compare: F) -> Vec<(&str, f64)>
    where
        F: Fn(&f64, &f64) -> Ordering,
    {
        let mut ranked: Vec<(&str, f64)> = self
            .extractor
            .indexer()
            .iter()
            .filter_map(|(index, key)| self.weights.get(index).map(|weight| (key, weight)))
            .collect();
        ranked.sort_by(|a, b| compare(&a.1, &b.1));
        ranked.truncate(k);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(sentence: &str) -> Vec<String> {
        sentence.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_extract_and_grow_keeps_weights_in_step() {
        let mut model = LinearModel::new(NgramFeatureExtractor::unigram());
        assert!(model.weights().is_empty());

        let features = model.extract_and_grow(&words("a sharp script"));
        assert_eq!(features.len(), 3);
        assert_eq!(model.weights().len(), model.extractor().indexer().len());

        model.extract_and_grow(&words("a sharp cast"));
        assert_eq!(model.weights().len(), 4);
    }

    #[test]
    fn test_score_ignores_unknown_words() {
        let mut model = LinearModel::new(NgramFeatureExtractor::unigram());
        let features = model.extract_and_grow(&words("witty"));
        model.update(&features, 0.5);

        assert_eq!(model.score(&words("witty")), 0.5);
        assert_eq!(model.score(&words("witty and unseen")), 0.5);
        assert_eq!(model.score(&[]), 0.0);
    }

    #[test]
    fn test_ranked_features() {
        let mut model = LinearModel::new(NgramFeatureExtractor::unigram());
        let good = model.extract_and_grow(&words("good"));
        model.update(&good, 1.0);
        let bad = model.extract_and_grow(&words("bad"));
        model.update(&bad, -1.0);
        model.extract_and_grow(&words("film"));

        assert_eq!(model.top_features(1), vec![("good", 1.0)]);
        assert_eq!(model.bottom_features(2), vec![("bad", -1.0), ("film", 0.0)]);
    }
}
