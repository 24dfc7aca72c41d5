//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, TextBayesArgs};
use crate::error::Result;
use crate::validation::CrossValidationReport;

/// Outcome of one evaluation.
#[derive(Debug, Serialize)]
pub struct EvaluationResult {
    pub name: String,
    pub report: CrossValidationReport,
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize + std::fmt::Display>(
    message: &str,
    result: &T,
    args: &TextBayesArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_human<T: std::fmt::Display>(message: &str, result: &T, args: &TextBayesArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }
    println!("{result}");
    Ok(())
}

fn output_json<T: Serialize>(result: &T, args: &TextBayesArgs) -> Result<()> {
    println!("{}", to_json(result, args.pretty)?);
    Ok(())
}

/// Serialize `result`, pretty-printed on request.
pub fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

impl std::fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.report)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::validation::FoldResult;

    fn result() -> EvaluationResult {
        let folds = vec![
            FoldResult::new(0, 1, 2, Duration::from_millis(3), Duration::from_millis(1)),
            FoldResult::new(1, 0, 2, Duration::from_millis(2), Duration::from_millis(1)),
        ];
        EvaluationResult {
            name: "enron1".to_string(),
            report: CrossValidationReport::new(4, 42, folds),
        }
    }

    #[test]
    fn test_json_output() {
        let json = to_json(&result(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "enron1");
        assert_eq!(value["report"]["seed"], 42);
        assert_eq!(value["report"]["documents"], 4);
        assert_eq!(value["report"]["fold_results"].as_array().unwrap().len(), 2);
        assert!(!json.contains('\n'));
        assert!(to_json(&result(), true).unwrap().contains('\n'));
    }

    #[test]
    fn test_human_output_is_report() {
        let result = result();
        assert_eq!(result.to_string(), result.report.to_string());
    }
}
