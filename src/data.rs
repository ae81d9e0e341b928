//! Sentiment examples and corpus I/O.

pub mod corpus;
pub mod example;

pub use corpus::{read_blind_examples, read_sentiment_examples, tokenize, write_sentiment_examples};
pub use example::{Label, SentimentExample};
