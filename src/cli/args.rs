//! Command line argument parsing for Polarity CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Polarity - online linear sentiment classifiers
#[derive(Parser, Debug, Clone)]
#[command(name = "polarity")]
#[command(about = "Train and evaluate perceptron and logistic regression sentiment classifiers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Polarity Contributors")]
#[command(long_about = None)]
pub struct PolarityArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PolarityArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a model and report accuracy on the train and dev sets
    Train(TrainArgs),

    /// Train a model and classify the given sentences
    Classify(ClassifyArgs),
}

/// Model selection shared by all commands
#[derive(Parser, Debug, Clone)]
pub struct ModelArgs {
    /// Model to train (TRIVIAL, PERCEPTRON, LR)
    #[arg(short, long, env = "POLARITY_MODEL")]
    pub model: Option<String>,

    /// Feature set (UNIGRAM, BIGRAM, BETTER)
    #[arg(long, env = "POLARITY_FEATS")]
    pub feats: Option<String>,

    /// Model configuration file (JSON); --model and --feats override it
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Path to the labeled training set
    #[arg(long, default_value = "data/train.txt")]
    pub train_path: PathBuf,
}

/// Arguments for training and evaluation
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Path to the labeled development set
    #[arg(long, default_value = "data/dev.txt")]
    pub dev_path: PathBuf,

    /// Path to the unlabeled test set
    #[arg(long, default_value = "data/test-blind.txt")]
    pub blind_test_path: PathBuf,

    /// Where to write predictions for the unlabeled test set
    #[arg(long, default_value = "test-blind.output.txt")]
    pub test_output_path: PathBuf,

    /// Label the blind test set and write the predictions
    #[arg(long)]
    pub run_on_test: bool,

    /// Number of highest and lowest weighted features to report
    #[arg(long, default_value = "0")]
    pub top_features: usize,
}

/// Arguments for classifying raw sentences
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Sentences to classify
    #[arg(value_name = "SENTENCE", required = true)]
    pub sentences: Vec<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
