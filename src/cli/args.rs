//! Command line argument parsing for the textbayes CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// textbayes - Naive Bayes text classification with k-fold cross-validation
#[derive(Parser, Debug, Clone)]
#[command(name = "textbayes")]
#[command(about = "Cross-validate a Naive Bayes classifier over labeled text corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextBayesArgs {
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

    /// Evaluation config file (JSON); may be repeated
    #[arg(short, long = "config", value_name = "CONFIG_FILE")]
    pub configs: Vec<PathBuf>,

    /// Labeled corpus root, as LABEL=DIR; may be repeated
    #[arg(long = "corpus", value_name = "LABEL=DIR", value_parser = parse_corpus)]
    pub corpora: Vec<(String, PathBuf)>,

    /// Number of folds
    #[arg(long, default_value = "5")]
    pub folds: usize,

    /// Shuffle seed; drawn at random when omitted
    #[arg(long, env = "TEXTBAYES_SEED")]
    pub seed: Option<u64>,

    /// Additive smoothing constant
    #[arg(long, default_value = "1.0")]
    pub alpha: f64,

    /// Analyzer turning documents into words
    #[arg(short, long, default_value = "simple")]
    pub analyzer: AnalyzerKind,

    /// Base-form dictionary (JSON or TSV) for the base-form analyzer
    #[arg(long, value_name = "DICTIONARY_FILE")]
    pub dictionary: Option<PathBuf>,

    /// Only read files with this extension; may be repeated
    #[arg(short, long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Evaluate folds in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl TextBayesArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Analyzers selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerKind {
    /// Split on separators and lowercase
    Simple,
    /// Split on Unicode word boundaries and lowercase
    Unicode,
    /// Reduce words to base forms through --dictionary
    BaseForm,
    /// Reduce words to base forms by stripping English suffixes
    Suffix,
}

/// Parse a `LABEL=DIR` corpus argument.
pub fn parse_corpus(value: &str) -> std::result::Result<(String, PathBuf), String> {
    let (label, dir) = value
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=DIR, got '{value}'"))?;
    if label.is_empty() {
        return Err(format!("empty label in '{value}'"));
    }
    if dir.is_empty() {
        return Err(format!("empty directory in '{value}'"));
    }
    Ok((label.to_string(), PathBuf::from(dir)))
}
