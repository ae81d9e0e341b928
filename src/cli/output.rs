//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, PolarityArgs};
use crate::data::Label;
use crate::error::Result;
use crate::evaluation::EvaluationMetrics;
use crate::trainer::TrainingStats;

/// A feature string with its learned weight.
#[derive(Debug, Serialize, Deserialize)]
pub struct FeatureWeight {
    pub feature: String,
    pub weight: f64,
}

/// Result structure for the train command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingReport {
    pub model: String,
    pub feats: String,
    pub train_examples: usize,
    pub dev_examples: usize,
    pub stats: Option<TrainingStats>,
    pub train_metrics: EvaluationMetrics,
    pub dev_metrics: EvaluationMetrics,
    pub top_features: Vec<FeatureWeight>,
    pub bottom_features: Vec<FeatureWeight>,
    pub test_output_path: Option<String>,
}

/// One classified sentence.
#[derive(Debug, Serialize, Deserialize)]
pub struct Prediction {
    pub sentence: String,
    pub tokens: Vec<String>,
    pub label: Label,
}

/// Result structure for the classify command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub model: String,
    pub predictions: Vec<Prediction>,
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model: {} ({} features)", self.model, self.feats)?;
        if let Some(stats) = &self.stats {
            writeln!(
                f,
                "Trained on {} examples in {}ms over {} epochs; vocabulary size {}",
                stats.examples,
                stats.training_time_ms,
                stats.epochs.len(),
                stats.vocabulary_size
            )?;
        }

        writeln!(f)?;
        writeln!(f, "=====Train Accuracy=====")?;
        writeln!(f, "{}", self.train_metrics)?;
        writeln!(f, "=====Dev Accuracy=====")?;
        writeln!(f, "{}", self.dev_metrics)?;

        if !self.top_features.is_empty() {
            writeln!(f)?;
            writeln!(f, "Most positive features:")?;
            for entry in &self.top_features {
                writeln!(f, "  {:>10.4}  {}", entry.weight, entry.feature)?;
            }
        }
        if !self.bottom_features.is_empty() {
            writeln!(f, "Most negative features:")?;
            for entry in &self.bottom_features {
                writeln!(f, "  {:>10.4}  {}", entry.weight, entry.feature)?;
            }
        }

        if let Some(path) = &self.test_output_path {
            writeln!(f)?;
            writeln!(f, "Wrote blind test predictions to {path}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for prediction in &self.predictions {
            writeln!(f, "{}\t{}", prediction.label, prediction.sentence)?;
        }
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &PolarityArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: fmt::Display>(message: &str, result: &T, args: &PolarityArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }
    print!("{result}");
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PolarityArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_report_display() {
        let report = ClassificationReport {
            model: "perceptron".to_string(),
            predictions: vec![Prediction {
                sentence: "Great fun".to_string(),
                tokens: vec!["Great".to_string(), "fun".to_string()],
                label: Label::Positive,
            }],
        };

        assert_eq!(report.to_string(), "1\tGreat fun\n");
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""label":1"#));
    }

    #[test]
    fn test_training_report_display() {
        let report = TrainingReport {
            model: "TRIVIAL".to_string(),
            feats: "UNIGRAM".to_string(),
            train_examples: 0,
            dev_examples: 0,
            stats: None,
            train_metrics: EvaluationMetrics::default(),
            dev_metrics: EvaluationMetrics::default(),
            top_features: vec![FeatureWeight {
                feature: "great".to_string(),
                weight: 0.5,
            }],
            bottom_features: Vec::new(),
            test_output_path: None,
        };

        let text = report.to_string();
        assert!(text.contains("=====Dev Accuracy====="));
        assert!(text.contains("great"));
        assert!(!text.contains("Wrote blind test predictions"));
    }
}
