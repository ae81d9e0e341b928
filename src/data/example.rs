//! Labeled training examples.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};

/// Binary sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Label {
    /// Negative sentiment (0).
    Negative = 0,
    /// Positive sentiment (1).
    Positive = 1,
}

impl Label {
    pub fn is_positive(self) -> bool {
        self == Label::Positive
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label as u8
    }
}

impl TryFrom<u8> for Label {
    type Error = PolarityError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Label::Negative),
            1 => Ok(Label::Positive),
            _ => Err(PolarityError::invalid_data(format!(
                "Invalid label {value}: expected 0 or 1"
            ))),
        }
    }
}

impl FromStr for Label {
    type Err = PolarityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "0" => Ok(Label::Negative),
            "1" => Ok(Label::Positive),
            other => Err(PolarityError::invalid_data(format!(
                "Invalid label '{other}': expected 0 or 1"
            ))),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// A tokenized sentence paired with its gold label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentExample {
    /// Sentence tokens.
    pub words: Vec<String>,
    /// Gold label.
    pub label: Label,
}

impl SentimentExample {
    /// Create a new example.
    pub fn new(words: Vec<String>, label: Label) -> Self {
        Self { words, label }
    }

    /// Create an example from a space-separated sentence.
    pub fn from_sentence(sentence: &str, label: Label) -> Self {
        Self::new(
            sentence.split_whitespace().map(str::to_string).collect(),
            label,
        )
    }
}

impl fmt::Display for SentimentExample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; label={}", self.words.join(" "), self.label)
    }
}
