//! Sparse feature extraction over a growable vocabulary.
//!
//! Extractors turn a tokenized sentence into a [`SparseFeatureVector`] keyed
//! by indices from the extractor's own [`Indexer`]. During training they run
//! in growth mode and add unseen features to the vocabulary; at inference the
//! vocabulary is frozen and unseen features are silently dropped, so they
//! contribute nothing to a score.
//!
//! # Architecture
//!
//! - `FeatureExtractor` trait: common interface for all extractors
//! - `NgramFeatureExtractor`: lowercased unigram/bigram/trigram presence features
//! - `SparseFeatureVector`: index -> value map produced per extraction

pub mod ngram;
pub mod sparse;

pub use ngram::{NgramFeatureExtractor, NgramOrder};
pub use sparse::SparseFeatureVector;

use crate::indexer::Indexer;

/// Feature extractor trait.
///
/// Implementations map a token sequence to sparse features indexed by the
/// vocabulary returned from [`FeatureExtractor::indexer`].
pub trait FeatureExtractor: Send + Sync {
    /// The vocabulary backing the produced feature indices.
    fn indexer(&self) -> &Indexer;

    /// Extract features from `words`.
    ///
    /// # Arguments
    /// * `words` - The tokens of one sentence
    /// * `add_to_indexer` - Grow the vocabulary with unseen features (training);
    ///   when false, unseen features are dropped
    fn extract_features(&mut self, words: &[String], add_to_indexer: bool) -> SparseFeatureVector;

    /// Extract features against the frozen vocabulary.
    ///
    /// Equivalent to `extract_features(words, false)` without requiring
    /// mutable access.
    fn lookup_features(&self, words: &[String]) -> SparseFeatureVector;
}
