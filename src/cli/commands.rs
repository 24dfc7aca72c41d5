//! Command implementations for the textbayes CLI.

use std::collections::BTreeMap;

use crate::cli::args::{AnalyzerKind, TextBayesArgs};
use crate::cli::output::{EvaluationResult, output_result};
use crate::config::{AnalyzerConfig, EvaluationConfig};
use crate::error::{Result, TextBayesError};

/// Execute the evaluations named on the command line.
pub fn execute_command(args: TextBayesArgs) -> Result<()> {
    let evaluations = collect_evaluations(&args)?;

    for evaluation in &evaluations {
        let name = evaluation.display_name();
        log::info!("Running evaluation {name}");
        let report = evaluation.run()?;
        let result = EvaluationResult { name, report };
        output_result(&format!("Evaluation {}", result.name), &result, &args)?;
    }
    Ok(())
}

/// Evaluations from every `--config` file, then the one described by
/// `--corpus` and the tuning flags.
pub fn collect_evaluations(args: &TextBayesArgs) -> Result<Vec<EvaluationConfig>> {
    let mut evaluations = Vec::new();
    for path in &args.configs {
        log::debug!("Loading config {}", path.display());
        evaluations.extend(EvaluationConfig::load_from_file(path)?);
    }

    if !args.corpora.is_empty() {
        let evaluation = evaluation_from_args(args)?;
        evaluation.validate()?;
        evaluations.push(evaluation);
    }

    if evaluations.is_empty() {
        return Err(TextBayesError::config(
            "nothing to evaluate: pass --config FILE or --corpus LABEL=DIR",
        ));
    }
    Ok(evaluations)
}

fn evaluation_from_args(args: &TextBayesArgs) -> Result<EvaluationConfig> {
    let mut corpora = BTreeMap::new();
    for (label, dir) in &args.corpora {
        if corpora.insert(label.clone(), dir.clone()).is_some() {
            return Err(TextBayesError::config(format!(
                "corpus label '{label}' given more than once"
            )));
        }
    }

    let analyzer = match args.analyzer {
        AnalyzerKind::Simple => AnalyzerConfig::Simple,
        AnalyzerKind::Unicode => AnalyzerConfig::Unicode,
        AnalyzerKind::BaseForm => AnalyzerConfig::BaseForm {
            dictionary: args.dictionary.clone().ok_or_else(|| {
                TextBayesError::config("the base-form analyzer needs --dictionary")
            })?,
        },
        AnalyzerKind::Suffix => AnalyzerConfig::Suffix { suffixes: None },
    };

    let mut evaluation = EvaluationConfig::new(corpora);
    evaluation.folds = args.folds;
    evaluation.seed = args.seed;
    evaluation.alpha = args.alpha;
    evaluation.analyzer = analyzer;
    evaluation.extensions = (!args.extensions.is_empty()).then(|| args.extensions.clone());
    evaluation.parallel = args.parallel;
    Ok(evaluation)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    fn parse(argv: &[&str]) -> TextBayesArgs {
        TextBayesArgs::try_parse_from(std::iter::once("textbayes").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_evaluation_from_flags() {
        let args = parse(&[
            "--corpus",
            "spam=s",
            "--corpus",
            "ham=h",
            "--folds",
            "3",
            "--seed",
            "9",
            "--analyzer",
            "suffix",
            "-e",
            "txt",
            "--parallel",
        ]);
        let evaluations = collect_evaluations(&args).unwrap();

        assert_eq!(evaluations.len(), 1);
        let evaluation = &evaluations[0];
        assert_eq!(evaluation.corpora.keys().collect::<Vec<_>>(), vec!["ham", "spam"]);
        assert_eq!(evaluation.corpora["spam"], PathBuf::from("s"));
        assert_eq!(evaluation.folds, 3);
        assert_eq!(evaluation.seed, Some(9));
        assert_eq!(evaluation.analyzer, AnalyzerConfig::Suffix { suffixes: None });
        assert_eq!(evaluation.extensions, Some(vec!["txt".to_string()]));
        assert!(evaluation.parallel);
    }

    #[test]
    fn test_unicode_analyzer_flag() {
        let evaluations = collect_evaluations(&parse(&["--corpus", "a=x", "--analyzer", "unicode"])).unwrap();
        assert_eq!(evaluations[0].analyzer, AnalyzerConfig::Unicode);
    }

    #[test]
    fn test_config_files_come_first() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("eval.json");
        fs::write(
            &config,
            r#"{"evaluations": [{"name": "a", "corpora": {"x": "x"}}, {"name": "b", "corpora": {"y": "y"}}]}"#,
        )
        .unwrap();

        let args = parse(&["--config", config.to_str().unwrap(), "--corpus", "z=z"]);
        let names: Vec<String> = collect_evaluations(&args)
            .unwrap()
            .iter()
            .map(EvaluationConfig::display_name)
            .collect();
        assert_eq!(names, vec!["a", "b", "z"]);
    }

    #[test]
    fn test_invalid_invocations() {
        assert!(matches!(
            collect_evaluations(&parse(&[])),
            Err(TextBayesError::Config(_))
        ));
        assert!(matches!(
            collect_evaluations(&parse(&["--corpus", "a=x", "--corpus", "a=y"])),
            Err(TextBayesError::Config(_))
        ));
        assert!(matches!(
            collect_evaluations(&parse(&["--corpus", "a=x", "--analyzer", "base-form"])),
            Err(TextBayesError::Config(_))
        ));
        assert!(matches!(
            collect_evaluations(&parse(&["--corpus", "a=x", "--folds", "1"])),
            Err(TextBayesError::Config(_))
        ));
    }

    #[test]
    fn test_execute_command_runs_evaluation() {
        let dir = TempDir::new().unwrap();
        for (label, words) in [("spam", "cheap pills offer"), ("ham", "meeting notes agenda")] {
            let root = dir.path().join(label);
            fs::create_dir(&root).unwrap();
            for i in 0..4 {
                fs::write(root.join(format!("{i}.txt")), format!("{words} {i}")).unwrap();
            }
        }
        let spam = format!("spam={}", dir.path().join("spam").display());
        let ham = format!("ham={}", dir.path().join("ham").display());

        let args = parse(&["-q", "-f", "json", "--corpus", &spam, "--corpus", &ham, "--seed", "1"]);
        execute_command(args).unwrap();

        let missing = format!("spam={}", dir.path().join("missing").display());
        let args = parse(&["-q", "--corpus", &missing]);
        assert!(matches!(execute_command(args), Err(TextBayesError::Corpus(_))));
    }
}
