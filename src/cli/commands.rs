//! Command implementations for Polarity CLI.

use anyhow::{Context, Result};

use crate::classifier::{Classifier, SentimentClassifier};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::data::{self, SentimentExample};
use crate::evaluation::evaluate;
use crate::selection::{ModelConfig, TrainedModel, train_model};

/// Execute a CLI command.
pub fn execute_command(args: PolarityArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args, &args),
        Command::Classify(classify_args) => classify(classify_args, &args),
    }
}

/// Train a model, evaluate it on the train and dev sets and optionally label
/// the blind test set.
fn train(args: &TrainArgs, cli_args: &PolarityArgs) -> Result<()> {
    let config = resolve_config(&args.model)?;
    let train_exs = load_examples(&args.model.train_path)?;
    let dev_exs = load_examples(&args.dev_path)?;
    log::info!(
        "{} train / {} dev examples",
        train_exs.len(),
        dev_exs.len()
    );

    let TrainedModel { classifier, stats } = train_model(&config, &train_exs)?;

    let train_metrics = evaluate(&classifier, &train_exs);
    let dev_metrics = evaluate(&classifier, &dev_exs);

    let (top_features, bottom_features) = ranked_features(&classifier, args.top_features);

    let test_output_path = if args.run_on_test {
        let blind = data::read_blind_examples(&args.blind_test_path).with_context(|| {
            format!(
                "failed to read blind test set {}",
                args.blind_test_path.display()
            )
        })?;
        let labeled: Vec<SentimentExample> = blind
            .into_iter()
            .map(|words| {
                let label = classifier.predict(&words);
                SentimentExample::new(words, label)
            })
            .collect();
        data::write_sentiment_examples(&args.test_output_path, &labeled).with_context(|| {
            format!(
                "failed to write predictions to {}",
                args.test_output_path.display()
            )
        })?;
        Some(args.test_output_path.to_string_lossy().to_string())
    } else {
        None
    };

    output_result(
        "Training complete",
        &TrainingReport {
            model: config.model.to_string(),
            feats: config.feats.to_string(),
            train_examples: train_exs.len(),
            dev_examples: dev_exs.len(),
            stats,
            train_metrics,
            dev_metrics,
            top_features,
            bottom_features,
            test_output_path,
        },
        cli_args,
    )?;

    Ok(())
}

/// Train a model and classify raw sentences.
fn classify(args: &ClassifyArgs, cli_args: &PolarityArgs) -> Result<()> {
    let config = resolve_config(&args.model)?;
    let train_exs = load_examples(&args.model.train_path)?;
    let TrainedModel { classifier, .. } = train_model(&config, &train_exs)?;

    let predictions = args
        .sentences
        .iter()
        .map(|sentence| {
            let tokens = data::tokenize(sentence);
            let label = classifier.predict(&tokens);
            Prediction {
                sentence: sentence.clone(),
                tokens,
                label,
            }
        })
        .collect();

    output_result(
        "Predictions",
        &ClassificationReport {
            model: classifier.name().to_string(),
            predictions,
        },
        cli_args,
    )?;

    Ok(())
}

/// Build the model configuration from an optional file plus overrides.
fn resolve_config(args: &ModelArgs) -> Result<ModelConfig> {
    let mut config = match &args.config {
        Some(path) => ModelConfig::from_json_file(path)
            .with_context(|| format!("failed to load model config {}", path.display()))?,
        None => ModelConfig::default(),
    };

    if let Some(model) = &args.model {
        config.model = model.parse()?;
    }
    if let Some(feats) = &args.feats {
        config.feats = feats.parse()?;
    }
    config.validate()?;

    Ok(config)
}

fn load_examples(path: &std::path::Path) -> Result<Vec<SentimentExample>> {
    data::read_sentiment_examples(path)
        .with_context(|| format!("failed to read examples from {}", path.display()))
}

fn ranked_features(classifier: &Classifier, k: usize) -> (Vec<FeatureWeight>, Vec<FeatureWeight>) {
    let Some(model) = classifier.linear_model() else {
        return (Vec::new(), Vec::new());
    };

    let collect = |features: Vec<(&str, f64)>| {
        features
            .into_iter()
            .map(|(feature, weight)| FeatureWeight {
                feature: feature.to_string(),
                weight,
            })
            .collect::<Vec<_>>()
    };

    (
        collect(model.top_features(k)),
        collect(model.bottom_features(k)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::NgramOrder;
    use crate::selection::ModelKind;

    fn model_args(model: Option<&str>, feats: Option<&str>) -> ModelArgs {
        ModelArgs {
            model: model.map(str::to_string),
            feats: feats.map(str::to_string),
            config: None,
            train_path: "data/train.txt".into(),
        }
    }

    #[test]
    fn test_resolve_config_overrides() {
        let config = resolve_config(&model_args(Some("lr"), Some("better"))).unwrap();
        assert_eq!(config.model, ModelKind::LogisticRegression);
        assert_eq!(config.feats, NgramOrder::Trigram);

        let config = resolve_config(&model_args(None, None)).unwrap();
        assert_eq!(config, ModelConfig::default());
    }

    #[test]
    fn test_resolve_config_rejects_unknown_model() {
        let error = resolve_config(&model_args(Some("FOREST"), None)).unwrap_err();
        assert!(error.to_string().contains("FOREST"));
    }
}
