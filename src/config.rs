//! Evaluation configuration.
//!
//! An evaluation names the corpus root of every label together with the
//! cross-validation and analysis settings. Evaluations are read from JSON
//! files, either one evaluation per file or several under `"evaluations"`:
//!
//! ```json
//! {
//!   "evaluations": [
//!     {
//!       "name": "finnish",
//!       "corpora": { "foo": "finnish/foo", "bar": "finnish/bar" },
//!       "analyzer": { "type": "base_form", "dictionary": "finnish/forms.tsv" }
//!     },
//!     {
//!       "name": "enron1",
//!       "corpora": { "ham": "enron1/ham", "spam": "enron1/spam" },
//!       "folds": 10,
//!       "seed": 42,
//!       "extensions": ["txt"]
//!     }
//!   ]
//! }
//! ```
//!
//! Relative paths are resolved against the directory of the config file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, BaseFormAnalyzer, SimpleAnalyzer, UnicodeAnalyzer};
use crate::analysis::lemmatizer::{DictionaryLemmatizer, SuffixLemmatizer};
use crate::corpus::{AcceptAll, ExtensionFilter, FileFilter};
use crate::error::{Result, TextBayesError};
use crate::ml::bayes::DEFAULT_ALPHA;
use crate::validation::{CrossValidationConfig, CrossValidationReport, CrossValidator, DEFAULT_FOLDS};

fn default_folds() -> usize {
    DEFAULT_FOLDS
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

/// Which analyzer turns documents into words.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyzerConfig {
    /// Locale-agnostic splitting and lowercasing.
    #[default]
    Simple,
    /// Unicode word boundaries and lowercasing.
    Unicode,
    /// Base-form reduction through a dictionary file (JSON or TSV).
    BaseForm { dictionary: PathBuf },
    /// Base-form reduction by suffix stripping.
    Suffix {
        #[serde(default)]
        suffixes: Option<Vec<String>>,
    },
}

/// One cross-validation evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Optional name shown in output.
    #[serde(default)]
    pub name: Option<String>,
    /// Corpus root directory of every label.
    pub corpora: BTreeMap<String, PathBuf>,
    #[serde(default = "default_folds")]
    pub folds: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    /// Only files with these extensions are documents; all files when unset.
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    Many { evaluations: Vec<EvaluationConfig> },
    One(Box<EvaluationConfig>),
}

impl EvaluationConfig {
    /// An evaluation of `corpora` with default settings.
    pub fn new(corpora: BTreeMap<String, PathBuf>) -> Self {
        EvaluationConfig {
            name: None,
            corpora,
            folds: DEFAULT_FOLDS,
            seed: None,
            alpha: DEFAULT_ALPHA,
            analyzer: AnalyzerConfig::default(),
            extensions: None,
            parallel: false,
        }
    }

    /// Parse a config file body, resolving relative paths against `base_dir`.
    pub fn parse(content: &str, base_dir: &Path) -> Result<Vec<EvaluationConfig>> {
        let file: ConfigFile = serde_json::from_str(content)?;
        let mut evaluations = match file {
            ConfigFile::Many { evaluations } => evaluations,
            ConfigFile::One(evaluation) => vec![*evaluation],
        };
        for evaluation in &mut evaluations {
            evaluation.resolve_paths(base_dir);
            evaluation.validate()?;
        }
        Ok(evaluations)
    }

    /// Load every evaluation of a config file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<EvaluationConfig>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TextBayesError::config(format!("Cannot read config {}: {e}", path.display()))
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&content, base_dir)
    }

    fn resolve_paths(&mut self, base_dir: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base_dir.join(&*path);
            }
        };
        for root in self.corpora.values_mut() {
            resolve(root);
        }
        if let AnalyzerConfig::BaseForm { dictionary } = &mut self.analyzer {
            resolve(dictionary);
        }
    }

    /// Check the settings that would otherwise fail mid-run.
    pub fn validate(&self) -> Result<()> {
        if self.corpora.is_empty() {
            return Err(TextBayesError::config("an evaluation needs at least one corpus"));
        }
        if self.folds < 2 {
            return Err(TextBayesError::config(format!(
                "folds must be at least 2, got {}",
                self.folds
            )));
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(TextBayesError::config(format!(
                "alpha must be positive, got {}",
                self.alpha
            )));
        }
        Ok(())
    }

    /// Display name: the configured name or the labels joined.
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.corpora.keys().cloned().collect::<Vec<_>>().join("/")
        })
    }

    pub fn build_analyzer(&self) -> Result<Arc<dyn Analyzer>> {
        Ok(match &self.analyzer {
            AnalyzerConfig::Simple => Arc::new(SimpleAnalyzer::new()),
            AnalyzerConfig::Unicode => Arc::new(UnicodeAnalyzer::new()),
            AnalyzerConfig::BaseForm { dictionary } => Arc::new(BaseFormAnalyzer::new(Arc::new(
                DictionaryLemmatizer::load(dictionary)?,
            ))),
            AnalyzerConfig::Suffix { suffixes } => {
                let lemmatizer = match suffixes {
                    Some(suffixes) => SuffixLemmatizer::with_suffixes(suffixes.clone()),
                    None => SuffixLemmatizer::new(),
                };
                Arc::new(BaseFormAnalyzer::new(Arc::new(lemmatizer)))
            }
        })
    }

    pub fn build_filter(&self) -> Arc<dyn FileFilter> {
        match &self.extensions {
            Some(extensions) => Arc::new(ExtensionFilter::new(extensions)),
            None => Arc::new(AcceptAll),
        }
    }

    pub fn cross_validation(&self) -> CrossValidationConfig {
        CrossValidationConfig {
            folds: self.folds,
            seed: self.seed,
            alpha: self.alpha,
            parallel: self.parallel,
        }
    }

    /// Validate the settings, load the corpora and cross-validate them.
    pub fn run(&self) -> Result<CrossValidationReport> {
        self.validate()?;
        let analyzer = self.build_analyzer()?;
        CrossValidator::new(self.cross_validation()).run(
            &self.corpora,
            analyzer,
            self.build_filter(),
        )
    }
}
