//! Integration tests for corpus reading and writing.

use std::fs;

use polarity::data::{read_blind_examples, read_sentiment_examples, write_sentiment_examples};
use polarity::prelude::*;
use tempfile::TempDir;

#[test]
fn test_read_labeled_corpus() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("train.txt");
    fs::write(
        &path,
        "1\tA warm , funny film .\n\n0\tTedious and  overlong\n1 charming\n",
    )?;

    let examples = read_sentiment_examples(&path)?;
    assert_eq!(examples.len(), 3);
    assert_eq!(examples[0].label, Label::Positive);
    assert_eq!(examples[0].words, vec!["A", "warm", ",", "funny", "film", "."]);
    assert_eq!(examples[1].words, vec!["Tedious", "and", "overlong"]);
    assert_eq!(examples[2], SentimentExample::from_sentence("charming", Label::Positive));
    Ok(())
}

#[test]
fn test_invalid_label_reports_line_number() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dev.txt");
    fs::write(&path, "1\tgood\n\n2\tmaybe\n").unwrap();

    match read_sentiment_examples(&path) {
        Err(PolarityError::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = read_sentiment_examples(temp_dir.path().join("absent.txt"));
    assert!(matches!(result, Err(PolarityError::Io(_))));
}

#[test]
fn test_write_then_read_predictions() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let blind_path = temp_dir.path().join("test-blind.txt");
    let output_path = temp_dir.path().join("test-blind.output.txt");
    fs::write(&blind_path, "a great ride\n\nterrible\n")?;

    let blind = read_blind_examples(&blind_path)?;
    assert_eq!(blind.len(), 2);

    let classifier = polarity::classifier::TrivialSentimentClassifier::new();
    let labeled: Vec<SentimentExample> = blind
        .into_iter()
        .map(|words| {
            let label = classifier.predict(&words);
            SentimentExample::new(words, label)
        })
        .collect();
    write_sentiment_examples(&output_path, &labeled)?;

    assert_eq!(
        fs::read_to_string(&output_path)?,
        "1\ta great ride\n1\tterrible\n"
    );
    assert_eq!(read_sentiment_examples(&output_path)?, labeled);
    Ok(())
}
