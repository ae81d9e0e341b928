//! Sparse feature vector produced by feature extraction.

use std::collections::BTreeMap;

/// A sparse mapping from feature index to value.
///
/// Entries iterate in ascending index order, which keeps dot products
/// reproducible bit for bit across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseFeatureVector {
    entries: BTreeMap<usize, f64>,
}

impl SparseFeatureVector {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Set the value at `index`, replacing any previous value.
    pub fn set(&mut self, index: usize, value: f64) {
        self.entries.insert(index, value);
    }

    /// Get the value at `index`, if present.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.entries.get(&index).copied()
    }

    /// Number of non-zero entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(index, value)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().map(|(&index, &value)| (index, value))
    }

    /// Largest index referenced, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.entries.keys().next_back().copied()
    }

    /// Dot product with a dense weight slice.
    ///
    /// # Panics
    ///
    /// Panics if an index lies outside `weights`; the weight vector must have
    /// been grown to cover every index the extractor produced.
    pub fn dot(&self, weights: &[f64]) -> f64 {
        let mut score = 0.0;
        for (index, value) in self.iter() {
            score += value * weights[index];
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_iterate_in_order() {
        let mut features = SparseFeatureVector::new();
        features.set(4, 1.0);
        features.set(1, 1.0);
        features.set(4, 1.0);

        assert_eq!(features.len(), 2);
        assert_eq!(features.get(1), Some(1.0));
        assert_eq!(features.get(2), None);
        assert_eq!(features.max_index(), Some(4));
        assert_eq!(features.iter().collect::<Vec<_>>(), vec![(1, 1.0), (4, 1.0)]);
    }

    #[test]
    fn test_dot() {
        let mut features = SparseFeatureVector::new();
        features.set(0, 1.0);
        features.set(2, 1.0);

        assert_eq!(features.dot(&[0.5, 10.0, -0.25]), 0.25);
        assert_eq!(SparseFeatureVector::new().dot(&[]), 0.0);
    }

    #[test]
    #[should_panic]
    fn test_dot_with_short_weights_panics() {
        let mut features = SparseFeatureVector::new();
        features.set(3, 1.0);
        features.dot(&[0.0, 0.0]);
    }
}
