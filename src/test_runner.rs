use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow};
use colored::*;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{problem::Problem, solver};

const TEST_CASES_FILE: &str = "test_cases.json";

#[derive(Debug, Error)]
pub enum TestCaseError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCaseFile {
    pub problem_id: String,
    pub problem_title: String,
    pub test_cases: Vec<TestCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl TestCaseFile {
    pub fn load(path: &Path) -> Result<Self, TestCaseError> {
        let content = fs::read_to_string(path).map_err(|source| TestCaseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| TestCaseError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Passed,
    Failed { actual: Value },
    Error(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestReport {
    pub passed: usize,
    pub failed: usize,
}

impl TestReport {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn merge(&mut self, other: TestReport) {
        self.passed += other.passed;
        self.failed += other.failed;
    }
}

pub struct TestRunner {
    problem: &'static Problem,
    test_file: PathBuf,
}

impl TestRunner {
    pub fn new(problem_id: u32, test_file: Option<PathBuf>, workspace: &Path) -> Result<Self> {
        let problem = Problem::by_id(problem_id)
            .ok_or_else(|| anyhow!("problem not found: ID {problem_id}"))?;

        let test_file = match test_file {
            Some(file) => file,
            None => Self::find_problem_directory(problem, workspace)?.join(TEST_CASES_FILE),
        };

        Ok(Self { problem, test_file })
    }

    fn find_problem_directory(problem: &Problem, workspace: &Path) -> Result<PathBuf> {
        let expected = workspace.join(problem.dir_name());
        if expected.is_dir() {
            return Ok(expected);
        }

        // Fall back to any directory starting with the problem id
        for entry in fs::read_dir(workspace)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();

            if (name.starts_with(&format!("{:04}_", problem.id))
                || name.starts_with(&format!("{}_", problem.id)))
                && entry.file_type()?.is_dir()
            {
                return Ok(entry.path());
            }
        }

        Err(anyhow!(
            "Could not find problem directory for problem {} in {}. \
             Set the workspace with `leetcode config --workspace <PATH>`.",
            problem.id,
            workspace.display()
        ))
    }

    pub fn run(&self) -> Result<TestReport> {
        println!(
            "{}",
            format!(
                "Running tests for problem {}. {}...",
                self.problem.id, self.problem.title
            )
            .cyan()
        );
        info!("loading test cases from {}", self.test_file.display());

        let file = TestCaseFile::load(&self.test_file)?;
        if file.problem_id != self.problem.id.to_string() {
            warn!(
                "{} declares problem {} ({}), running it against problem {}",
                self.test_file.display(),
                file.problem_id,
                file.problem_title,
                self.problem.id
            );
        }

        let mut report = TestReport::default();
        for (i, case) in file.test_cases.iter().enumerate() {
            let outcome = self.evaluate(case);
            self.print_case(i + 1, case, &outcome);
            match outcome {
                Outcome::Passed => report.passed += 1,
                Outcome::Failed { .. } | Outcome::Error(_) => report.failed += 1,
            }
        }

        let summary = format!(
            "test result: {} passed; {} failed; {} total",
            report.passed,
            report.failed,
            report.total()
        );
        if report.all_passed() {
            println!("{}", summary.green());
        } else {
            println!("{}", summary.red());
        }

        Ok(report)
    }

    pub fn evaluate(&self, case: &TestCase) -> Outcome {
        let expected: Value = match serde_json::from_str(&case.expected) {
            Ok(value) => value,
            Err(e) => return Outcome::Error(format!("invalid expected value: {e}")),
        };

        match solver::solve(self.problem.id, &case.input) {
            Ok(actual) if actual == expected => Outcome::Passed,
            Ok(actual) => {
                debug!("expected {expected}, got {actual}");
                Outcome::Failed { actual }
            }
            Err(e) => Outcome::Error(e.to_string()),
        }
    }

    fn print_case(&self, number: usize, case: &TestCase, outcome: &Outcome) {
        let input = case.input.replace('\n', ", ");
        match outcome {
            Outcome::Passed => {
                println!("  {} {}", format!("test case #{number} ... ok").green(), input);
            }
            Outcome::Failed { actual } => {
                println!("  {} {}", format!("test case #{number} ... FAILED").red(), input);
                println!("    {} {}", "Expected:".bold(), case.expected);
                println!("    {} {}", "Actual:".bold(), actual);
                if let Some(ref explanation) = case.explanation {
                    println!("    {} {}", "Explanation:".italic(), explanation);
                }
            }
            Outcome::Error(message) => {
                println!("  {} {}", format!("test case #{number} ... ERROR").red(), input);
                println!("    {}", message.yellow());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn write_cases(dir: &Path, json: &str) -> PathBuf {
        let problem_dir = dir.join("0001_two_sum");
        fs::create_dir_all(&problem_dir).unwrap();
        let path = problem_dir.join(TEST_CASES_FILE);
        fs::write(&path, json).unwrap();
        path
    }

    const TWO_SUM_CASES: &str = r#"{
        "problem_id": "1",
        "problem_title": "Two Sum",
        "test_cases": [
            {"input": "[2,7,11,15]\n9", "expected": "[0,1]"},
            {"input": "[3,3]\n6", "expected": "[1,0]", "explanation": "wrong on purpose"},
            {"input": "[3,3]", "expected": "[0,1]"}
        ]
    }"#;

    #[test]
    fn test_test_runner_creation() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_cases(temp_dir.path(), TWO_SUM_CASES);

        let runner = TestRunner::new(1, None, temp_dir.path()).unwrap();
        assert_eq!(runner.test_file, path);
    }

    #[test]
    fn test_finds_directory_by_id_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let problem_dir = temp_dir.path().join("217_dups");
        fs::create_dir(&problem_dir).unwrap();

        let runner = TestRunner::new(217, None, temp_dir.path()).unwrap();
        assert_eq!(runner.test_file, problem_dir.join(TEST_CASES_FILE));
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(TestRunner::new(1, None, temp_dir.path()).is_err());
    }

    #[test]
    fn test_unknown_problem() {
        let temp_dir = TempDir::new().unwrap();
        assert!(TestRunner::new(9999, None, temp_dir.path()).is_err());
    }

    #[test]
    fn test_run_reports_pass_and_fail() {
        let temp_dir = TempDir::new().unwrap();
        write_cases(temp_dir.path(), TWO_SUM_CASES);

        let runner = TestRunner::new(1, None, temp_dir.path()).unwrap();
        let report = runner.run().unwrap();
        assert_eq!(
            report,
            TestReport {
                passed: 1,
                failed: 2
            }
        );
        assert!(!report.all_passed());
    }

    #[test]
    fn test_evaluate_outcomes() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_cases(temp_dir.path(), TWO_SUM_CASES);
        let runner = TestRunner::new(1, Some(path), temp_dir.path()).unwrap();

        let case = |input: &str, expected: &str| TestCase {
            input: input.to_string(),
            expected: expected.to_string(),
            explanation: None,
        };

        assert_eq!(runner.evaluate(&case("[1,2,3,4,5]\n9", "[3,4]")), Outcome::Passed);
        assert_eq!(runner.evaluate(&case("[1,2]\n10", "[]")), Outcome::Passed);
        assert_eq!(
            runner.evaluate(&case("[5,5]\n10", "[]")),
            Outcome::Failed {
                actual: serde_json::json!([0, 1])
            }
        );
        assert!(matches!(
            runner.evaluate(&case("[5,5]\n10", "not json")),
            Outcome::Error(_)
        ));
    }

    #[test]
    fn test_load_errors() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(
            TestCaseFile::load(&missing),
            Err(TestCaseError::Read { .. })
        ));

        let broken = temp_dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            TestCaseFile::load(&broken),
            Err(TestCaseError::Parse { .. })
        ));
    }

    #[test]
    fn test_workspace_test_cases_pass() {
        let workspace = Path::new(env!("CARGO_MANIFEST_DIR"));
        for problem in Problem::all() {
            let runner = TestRunner::new(problem.id, None, workspace).unwrap();
            let report = runner.run().unwrap();
            assert!(report.total() > 0);
            assert!(report.all_passed(), "problem {} failed", problem.id);
        }
    }

    #[test]
    fn test_test_case_file_serde_roundtrip() {
        let file = TestCaseFile {
            problem_id: "217".to_string(),
            problem_title: "Contains Duplicate".to_string(),
            test_cases: vec![
                TestCase {
                    input: "[1,2,3,1]".to_string(),
                    expected: "true".to_string(),
                    explanation: Some("1 repeats".to_string()),
                },
                TestCase {
                    input: "[]".to_string(),
                    expected: "false".to_string(),
                    explanation: None,
                },
            ],
        };

        let json = serde_json::to_string(&file).unwrap();
        let raw: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(raw["test_cases"][0]["explanation"], "1 repeats");
        assert!(raw["test_cases"][1].get("explanation").is_none());

        let deserialized: TestCaseFile = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.problem_id, file.problem_id);
        assert_eq!(deserialized.problem_title, file.problem_title);
        assert_eq!(deserialized.test_cases.len(), 2);
        assert_eq!(deserialized.test_cases[0].input, "[1,2,3,1]");
        assert_eq!(
            deserialized.test_cases[0].explanation.as_deref(),
            Some("1 repeats")
        );
        assert_eq!(deserialized.test_cases[1].expected, "false");
        assert!(deserialized.test_cases[1].explanation.is_none());
    }

    #[test]
    fn test_report_merge() {
        let mut report = TestReport {
            passed: 2,
            failed: 1,
        };
        report.merge(TestReport {
            passed: 3,
            failed: 0,
        });
        assert_eq!(report.total(), 6);
        assert_eq!(report.failed, 1);
    }
}
