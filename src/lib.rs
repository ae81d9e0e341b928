//! # Polarity
//!
//! Online linear sentiment classifiers over sparse n-gram features.
//!
//! ## Features
//!
//! - Lowercased unigram, bigram and trigram presence features
//! - A vocabulary that grows during training and is frozen at inference
//! - Mistake-driven perceptron and online logistic regression trainers
//! - Reproducible training through an explicitly seeded shuffler
//! - Corpus I/O, evaluation metrics and a command line front end

pub mod classifier;
pub mod cli;
pub mod data;
pub mod error;
pub mod evaluation;
pub mod features;
pub mod indexer;
pub mod selection;
pub mod trainer;
pub mod weights;

pub mod prelude {
    pub use crate::classifier::{Classifier, SentimentClassifier};
    pub use crate::data::{Label, SentimentExample};
    pub use crate::error::{PolarityError, Result};
    pub use crate::features::{FeatureExtractor, NgramFeatureExtractor, NgramOrder};
    pub use crate::selection::{ModelConfig, ModelKind, train_model};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
