use crate::config::batch_config::{BatchConfig, Case};
use crate::core::{calc, palindrome, prefix, roman};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub index: usize,
    pub kind: &'static str,
    pub input: String,
    pub output: String,
    #[serde(skip)]
    pub faulted: bool,
}

impl CaseReport {
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub struct BatchRunner<'a> {
    config: &'a BatchConfig,
}

impl<'a> BatchRunner<'a> {
    pub fn new(config: &'a BatchConfig) -> Self {
        Self { config }
    }

    /// Runs every case in order. A faulting case is reported, not propagated.
    pub fn run(&self) -> Vec<CaseReport> {
        tracing::info!(
            "Running batch '{}' with {} cases",
            self.config.name(),
            self.config.cases.len()
        );

        let reports: Vec<CaseReport> = self
            .config
            .cases
            .iter()
            .enumerate()
            .map(|(index, case)| Self::run_case(index, case))
            .collect();

        let failed = reports.iter().filter(|r| r.faulted).count();
        if failed > 0 {
            tracing::warn!("{} of {} cases faulted", failed, reports.len());
        }
        reports
    }

    fn run_case(index: usize, case: &Case) -> CaseReport {
        let (input, result) = match case {
            Case::Prefix { words } => (
                words.join(" "),
                Ok(prefix::longest_common_prefix(words)),
            ),
            Case::Palindrome { number } => (
                number.to_string(),
                Ok(palindrome::is_palindrome_number(*number).to_string()),
            ),
            Case::Roman { numeral } => (
                numeral.clone(),
                roman::parse_roman(numeral).map(|v| v.to_string()),
            ),
            Case::Calc { line } => (
                line.clone(),
                calc::evaluate_line(line).map(|o| o.to_string()),
            ),
        };

        let (output, faulted) = match result {
            Ok(output) => (output, false),
            Err(e) => {
                tracing::debug!("Case {} ({}) faulted: {}", index, case.kind(), e);
                (format!("error: {}", e), true)
            }
        };

        CaseReport {
            index,
            kind: case.kind(),
            input,
            output,
            faulted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_reports_every_case() {
        let config = BatchConfig {
            batch: None,
            cases: vec![
                Case::Prefix {
                    words: vec!["dog".into(), "racecar".into(), "car".into()],
                },
                Case::Palindrome { number: 121 },
                Case::Roman {
                    numeral: "LVIII".into(),
                },
                Case::Calc {
                    line: "x 1 2".into(),
                },
            ],
        };

        let outputs: Vec<String> = BatchRunner::new(&config)
            .run()
            .into_iter()
            .map(|r| r.output)
            .collect();
        assert_eq!(outputs, vec!["", "true", "58", "Invalid operator x."]);
    }

    #[test]
    fn test_faults_do_not_stop_the_batch() {
        let config = BatchConfig {
            batch: None,
            cases: vec![
                Case::Calc {
                    line: "% 3 0".into(),
                },
                Case::Roman {
                    numeral: "ABC".into(),
                },
                Case::Calc {
                    line: "+ 3 4".into(),
                },
            ],
        };

        let reports = BatchRunner::new(&config).run();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].output, "error: Attempted to divide by zero");
        assert!(reports[1].output.starts_with("error: Invalid Roman numeral"));
        assert_eq!(reports[2].output, "7");
        assert_eq!(reports[2].index, 2);
        let faulted: Vec<bool> = reports.iter().map(|r| r.faulted).collect();
        assert_eq!(faulted, vec![true, true, false]);
    }

    #[test]
    fn test_error_like_output_is_not_a_fault() {
        let config = BatchConfig {
            batch: None,
            cases: vec![Case::Prefix {
                words: vec!["error: disk".into(), "error: dns".into()],
            }],
        };

        let reports = BatchRunner::new(&config).run();
        assert_eq!(reports[0].output, "error: d");
        assert!(!reports[0].faulted);
    }

    #[test]
    fn test_json_line() {
        let report = CaseReport {
            index: 0,
            kind: "palindrome",
            input: "10".into(),
            output: "false".into(),
            faulted: false,
        };
        assert_eq!(
            report.to_json_line().unwrap(),
            r#"{"index":0,"kind":"palindrome","input":"10","output":"false"}"#
        );
    }
}
