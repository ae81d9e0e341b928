//! N-gram feature extractor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};
use crate::features::sparse::SparseFeatureVector;
use crate::features::FeatureExtractor;
use crate::indexer::Indexer;

/// The n-gram order an extractor works with.
///
/// Deserialization goes through [`FromStr`], so names are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum NgramOrder {
    /// Single tokens.
    Unigram,
    /// Consecutive token pairs.
    Bigram,
    /// Consecutive token triples (the "better" feature set).
    #[serde(rename = "BETTER")]
    Trigram,
}

impl NgramOrder {
    /// Number of tokens in one n-gram.
    pub fn n(self) -> usize {
        match self {
            NgramOrder::Unigram => 1,
            NgramOrder::Bigram => 2,
            NgramOrder::Trigram => 3,
        }
    }

    /// Configuration name of this feature set.
    pub fn as_str(self) -> &'static str {
        match self {
            NgramOrder::Unigram => "UNIGRAM",
            NgramOrder::Bigram => "BIGRAM",
            NgramOrder::Trigram => "BETTER",
        }
    }
}

impl fmt::Display for NgramOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NgramOrder {
    type Err = PolarityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "UNIGRAM" => Ok(NgramOrder::Unigram),
            "BIGRAM" => Ok(NgramOrder::Bigram),
            "BETTER" | "TRIGRAM" => Ok(NgramOrder::Trigram),
            _ => Err(PolarityError::config(format!(
                "Unknown feature set '{s}': pass in UNIGRAM, BIGRAM, or BETTER"
            ))),
        }
    }
}

impl TryFrom<String> for NgramOrder {
    type Error = PolarityError;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

/// Extracts lowercased n-gram presence features from a token sequence.
///
/// N-grams are built from consecutive tokens joined by a single space. A
/// sentence shorter than the order yields no features.
///
/// # Examples
///
/// ```
/// use polarity::features::{FeatureExtractor, NgramFeatureExtractor, NgramOrder};
///
/// let mut extractor = NgramFeatureExtractor::new(NgramOrder::Bigram);
/// let words: Vec<String> = ["I", "love", "it"].iter().map(|w| w.to_string()).collect();
/// let features = extractor.extract_features(&words, true);
///
/// assert_eq!(features.len(), 2);
/// assert_eq!(extractor.indexer().get_object(0), Some("i love"));
/// assert_eq!(extractor.indexer().get_object(1), Some("love it"));
/// ```
#[derive(Debug, Clone)]
pub struct NgramFeatureExtractor {
    order: NgramOrder,
    indexer: Indexer,
}

impl NgramFeatureExtractor {
    /// Create an extractor with an empty vocabulary.
    pub fn new(order: NgramOrder) -> Self {
        Self::with_indexer(order, Indexer::new())
    }

    /// Create an extractor around an existing vocabulary.
    pub fn with_indexer(order: NgramOrder, indexer: Indexer) -> Self {
        Self { order, indexer }
    }

    pub fn unigram() -> Self {
        Self::new(NgramOrder::Unigram)
    }

    pub fn bigram() -> Self {
        Self::new(NgramOrder::Bigram)
    }

    pub fn trigram() -> Self {
        Self::new(NgramOrder::Trigram)
    }

    /// The n-gram order of this extractor.
    pub fn order(&self) -> NgramOrder {
        self.order
    }
}

/// Lowercased n-grams of `words`, in sentence order.
fn ngrams(n: usize, words: &[String]) -> impl Iterator<Item = String> + '_ {
    words
        .windows(n)
        .map(|window| window.join(" ").to_lowercase())
}

impl FeatureExtractor for NgramFeatureExtractor {
    fn indexer(&self) -> &Indexer {
        &self.indexer
    }

    fn extract_features(&mut self, words: &[String], add_to_indexer: bool) -> SparseFeatureVector {
        if !add_to_indexer {
            return self.lookup_features(words);
        }

        let mut features = SparseFeatureVector::new();
        for ngram in ngrams(self.order.n(), words) {
            let index = self.indexer.add_and_get_index(&ngram);
            features.set(index, 1.0);
        }
        features
    }

    fn lookup_features(&self, words: &[String]) -> SparseFeatureVector {
        let mut features = SparseFeatureVector::new();
        for ngram in ngrams(self.order.n(), words) {
            // Unseen n-grams are dropped at inference time.
            if let Ok(index) = self.indexer.index_of(&ngram) {
                features.set(index, 1.0);
            }
        }
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(sentence: &str) -> Vec<String> {
        sentence.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_extractor_arity() {
        let sentence = words("I love it");

        let mut unigram = NgramFeatureExtractor::unigram();
        let features = unigram.extract_features(&sentence, true);
        assert_eq!(features.len(), 3);
        assert!(features.iter().all(|(_, value)| value == 1.0));

        let mut bigram = NgramFeatureExtractor::bigram();
        let features = bigram.extract_features(&sentence, true);
        assert_eq!(features.len(), 2);
        assert_eq!(bigram.indexer().index_of("i love").unwrap(), 0);
        assert_eq!(bigram.indexer().index_of("love it").unwrap(), 1);

        let mut trigram = NgramFeatureExtractor::trigram();
        let features = trigram.extract_features(&sentence, true);
        assert_eq!(features.len(), 1);
        assert!(trigram.indexer().contains("i love it"));
    }

    #[test]
    fn test_short_sentences_yield_no_features() {
        let one_word = words("great");

        let mut bigram = NgramFeatureExtractor::bigram();
        assert!(bigram.extract_features(&one_word, true).is_empty());
        assert!(bigram.indexer().is_empty());

        let mut trigram = NgramFeatureExtractor::trigram();
        assert!(trigram.extract_features(&words("so good"), true).is_empty());
        assert!(trigram.extract_features(&[], true).is_empty());
    }

    #[test]
    fn test_case_normalization() {
        let mut extractor = NgramFeatureExtractor::unigram();
        let upper = extractor.extract_features(&words("The The"), true);
        let lower = extractor.extract_features(&words("the the"), true);

        assert_eq!(extractor.indexer().len(), 1);
        assert_eq!(upper, lower);
        assert_eq!(upper.get(0), Some(1.0));
    }

    #[test]
    fn test_repeated_ngrams_are_binary() {
        let mut extractor = NgramFeatureExtractor::bigram();
        let features = extractor.extract_features(&words("very good very good"), true);

        // "very good", "good very"
        assert_eq!(features.len(), 2);
        assert_eq!(features.get(0), Some(1.0));
    }

    #[test]
    fn test_unknown_features_are_dropped() {
        let mut extractor = NgramFeatureExtractor::unigram();
        extractor.extract_features(&words("a fine film"), true);
        assert_eq!(extractor.indexer().len(), 3);

        let features = extractor.extract_features(&words("a dreadful film"), false);
        assert_eq!(extractor.indexer().len(), 3);
        assert!(!extractor.indexer().contains("dreadful"));
        assert_eq!(features.iter().collect::<Vec<_>>(), vec![(0, 1.0), (2, 1.0)]);

        assert_eq!(extractor.lookup_features(&words("a dreadful film")), features);
    }

    #[test]
    fn test_order_from_str() {
        assert_eq!("UNIGRAM".parse::<NgramOrder>().unwrap(), NgramOrder::Unigram);
        assert_eq!("bigram".parse::<NgramOrder>().unwrap(), NgramOrder::Bigram);
        assert_eq!("BETTER".parse::<NgramOrder>().unwrap(), NgramOrder::Trigram);
        assert_eq!(NgramOrder::Trigram.to_string(), "BETTER");

        match "FOURGRAM".parse::<NgramOrder>() {
            Err(PolarityError::Config(msg)) => assert!(msg.contains("FOURGRAM")),
            other => panic!("Expected config error, got {other:?}"),
        }
    }
}
