//! Dense weight vector addressed by vocabulary indices.

use crate::features::SparseFeatureVector;

/// Weights of a linear model, one per known feature index.
///
/// The vector only ever grows. New positions start at zero, so a feature
/// that has just entered the vocabulary contributes nothing until updated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightVector {
    weights: Vec<f64>,
}

impl WeightVector {
    /// Create an empty weight vector.
    pub fn new() -> Self {
        Self {
            weights: Vec::new(),
        }
    }

    /// Create a zero vector of length `len`.
    pub fn zeros(len: usize) -> Self {
        Self {
            weights: vec![0.0; len],
        }
    }

    /// Extend with zeros until the vector holds `len` weights.
    ///
    /// A `len` at or below the current length leaves the vector unchanged.
    pub fn grow_to(&mut self, len: usize) {
        if len > self.weights.len() {
            self.weights.resize(len, 0.0);
        }
    }

    /// Dot product with a sparse feature vector.
    pub fn score(&self, features: &SparseFeatureVector) -> f64 {
        features.dot(&self.weights)
    }

    /// Add `step * value` to the weight of every active feature.
    ///
    /// # Panics
    ///
    /// Panics if `features` references an index the vector has not been grown
    /// to cover.
    pub fn add_scaled(&mut self, features: &SparseFeatureVector, step: f64) {
        if let Some(max_index) = features.max_index() {
            assert!(
                max_index < self.weights.len(),
                "weight vector of length {} does not cover feature index {}; grow it before updating",
                self.weights.len(),
                max_index
            );
        }

        for (index, value) in features.iter() {
            self.weights[index] += step * value;
        }
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.weights.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }
}

impl From<Vec<f64>> for WeightVector {
    fn from(weights: Vec<f64>) -> Self {
        Self { weights }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(indices: &[usize]) -> SparseFeatureVector {
        let mut features = SparseFeatureVector::new();
        for &index in indices {
            features.set(index, 1.0);
        }
        features
    }

    #[test]
    fn test_grow_is_monotonic() {
        let mut weights = WeightVector::new();
        weights.grow_to(3);
        assert_eq!(weights.as_slice(), &[0.0, 0.0, 0.0]);

        weights.add_scaled(&features(&[1]), 0.5);
        weights.grow_to(2);
        assert_eq!(weights.len(), 3);
        weights.grow_to(4);
        assert_eq!(weights.as_slice(), &[0.0, 0.5, 0.0, 0.0]);
    }

    #[test]
    fn test_add_scaled_and_score() {
        let mut weights = WeightVector::zeros(3);
        weights.add_scaled(&features(&[0, 2]), 0.05);
        weights.add_scaled(&features(&[2]), -0.05);

        assert_eq!(weights.get(0), Some(0.05));
        assert_eq!(weights.get(2), Some(0.0));
        assert_eq!(weights.score(&features(&[0, 1])), 0.05);
    }

    #[test]
    #[should_panic(expected = "grow it before updating")]
    fn test_update_before_growth_panics() {
        let mut weights = WeightVector::zeros(2);
        weights.add_scaled(&features(&[2]), 0.1);
    }
}
