//! Reading and writing tab-separated sentiment corpora.
//!
//! Labeled files hold one example per line, `label<TAB>sentence`, where the
//! sentence is already tokenized and space separated. Blind files hold just
//! the sentence.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use unicode_segmentation::UnicodeSegmentation;

use crate::data::example::{Label, SentimentExample};
use crate::error::{PolarityError, Result};

/// Read labeled examples from `path`.
///
/// Blank lines are skipped. A line without exactly one tab falls back to
/// splitting on all whitespace, with the first field as the label.
pub fn read_sentiment_examples<P: AsRef<Path>>(path: P) -> Result<Vec<SentimentExample>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut examples = Vec::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        examples.push(parse_labeled_line(&line, line_number + 1)?);
    }

    log::debug!(
        "Read {} examples from {}",
        examples.len(),
        path.as_ref().display()
    );
    Ok(examples)
}

/// Read unlabeled, pre-tokenized sentences from `path`.
pub fn read_blind_examples<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut sentences = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        sentences.push(split_tokens(&line));
    }

    Ok(sentences)
}

/// Write examples to `path` in the labeled corpus format.
pub fn write_sentiment_examples<P: AsRef<Path>>(
    path: P,
    examples: &[SentimentExample],
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    for example in examples {
        writeln!(writer, "{}\t{}", example.label, example.words.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}

/// Split raw text into word and punctuation tokens.
///
/// Uses Unicode word boundaries, so `"Great, fun!"` becomes
/// `["Great", ",", "fun", "!"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_labeled_line(line: &str, line_number: usize) -> Result<SentimentExample> {
    let (label_field, words): (&str, Vec<String>) = match line.split_once('\t') {
        Some((label, sentence)) if !sentence.contains('\t') => (label, split_tokens(sentence)),
        _ => {
            let mut fields = line.split_whitespace();
            let label = fields.next().unwrap_or_default();
            (label, fields.map(str::to_string).collect())
        }
    };

    let label: Label = label_field
        .parse()
        .map_err(|_| PolarityError::parse(line_number, format!("invalid label '{label_field}'")))?;

    Ok(SentimentExample::new(words, label))
}

fn split_tokens(sentence: &str) -> Vec<String> {
    sentence
        .trim_end()
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
