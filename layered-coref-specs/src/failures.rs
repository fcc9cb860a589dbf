//! Expected failures tracking via TOML file.

use crate::errors::{SpecError, SpecResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Loaded expected failures configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Known failures (won't fix soon).
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Pending failures (awaiting fix).
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// A single expected failure entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture file name.
    pub fixture: String,
    /// Check reference (e.g., "george.labels" or "george.rewrite").
    pub assertion: String,
    /// Human-readable reason.
    #[serde(default)]
    pub reason: Option<String>,
    /// Date added (YYYY-MM-DD).
    #[serde(default)]
    pub added: Option<String>,
}

/// Failure lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    /// Known limitation, won't fix soon.
    Known,
    /// Awaiting fix, not blocking.
    Pending,
    /// Expected to pass - failure is a regression.
    Regression,
}

/// What a check compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Labels,
    Rewrite,
}

impl CheckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Labels => "labels",
            CheckKind::Rewrite => "rewrite",
        }
    }
}

impl ExpectedFailures {
    /// Load from a TOML file. A missing file means no expected failures.
    pub fn load(path: &Path) -> SpecResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SpecError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SpecError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Check if a failure is expected.
    pub fn is_expected(&self, fixture: &str, assertion_ref: &str) -> FailureState {
        if self.known.iter().any(|e| e.matches(fixture, assertion_ref)) {
            FailureState::Known
        } else if self.pending.iter().any(|e| e.matches(fixture, assertion_ref)) {
            FailureState::Pending
        } else {
            FailureState::Regression
        }
    }

    /// Format a check reference from a case name and what it compares.
    pub fn format_ref(case_name: &str, kind: CheckKind) -> String {
        format!("{}.{}", case_name, kind.as_str())
    }

    /// Count total expected failures.
    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }

    /// Get entry for a specific failure (if expected).
    pub fn get_entry(&self, fixture: &str, assertion_ref: &str) -> Option<&FailureEntry> {
        self.known
            .iter()
            .chain(self.pending.iter())
            .find(|e| e.matches(fixture, assertion_ref))
    }
}

impl FailureEntry {
    fn matches(&self, fixture: &str, assertion_ref: &str) -> bool {
        self.fixture == fixture && self.assertion == assertion_ref
    }
}

/// Result of running the harness.
#[derive(Debug, Clone, Default)]
pub struct HarnessResult {
    /// Total checks run.
    pub total: usize,
    pub passed: usize,
    /// Expected failures (known + pending).
    pub expected_failures: usize,
    /// Regressions (unexpected failures).
    pub regressions: usize,
    /// Checks listed as expected failures that now pass.
    pub unexpected_passes: Vec<String>,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the exit code (0 = pass, 1 = regressions).
    pub fn exit_code(&self) -> i32 {
        if self.regressions > 0 {
            1
        } else {
            0
        }
    }

    /// Check if all tests passed (no regressions).
    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    /// Record a failed check with its state.
    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => {
                self.expected_failures += 1;
            }
            FailureState::Regression => {
                self.regressions += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn entry(fixture: &str, assertion: &str) -> FailureEntry {
        FailureEntry {
            fixture: fixture.to_string(),
            assertion: assertion.to_string(),
            reason: None,
            added: None,
        }
    }

    #[test]
    fn test_is_expected() {
        let failures = ExpectedFailures {
            known: vec![entry("gender.toml", "girl.labels")],
            pending: vec![entry("gender.toml", "girl.rewrite")],
        };
        assert_eq!(
            failures.is_expected("gender.toml", "girl.labels"),
            FailureState::Known
        );
        assert_eq!(
            failures.is_expected("gender.toml", "girl.rewrite"),
            FailureState::Pending
        );
        assert_eq!(
            failures.is_expected("other.toml", "girl.labels"),
            FailureState::Regression
        );
    }

    #[test]
    fn test_format_ref() {
        assert_eq!(
            ExpectedFailures::format_ref("george", CheckKind::Labels),
            "george.labels"
        );
        assert_eq!(
            ExpectedFailures::format_ref("george", CheckKind::Rewrite),
            "george.rewrite"
        );
    }

    #[test]
    fn test_harness_result_record() {
        let mut result = HarnessResult::new();
        assert_eq!(result.exit_code(), 0);

        result.record_pass();
        result.record_failure(FailureState::Known);
        assert_eq!(result.total, 2);
        assert_eq!(result.expected_failures, 1);
        assert!(result.success());

        result.record_failure(FailureState::Regression);
        assert_eq!(result.regressions, 1);
        assert_eq!(result.exit_code(), 1);
        assert!(!result.success());
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[pending]]
fixture = "gender.toml"
assertion = "girl.rewrite"
reason = "Awaiting punctuation-aware joining"
added = "2026-10-19"

[[known]]
fixture = "plural.toml"
assertion = "cats.labels"
"#
        )
        .unwrap();

        let failures = ExpectedFailures::load(file.path()).unwrap();
        assert_eq!(failures.count(), 2);
        assert_eq!(
            failures.get_entry("gender.toml", "girl.rewrite").and_then(|e| e.reason.as_deref()),
            Some("Awaiting punctuation-aware joining")
        );
        assert!(failures.get_entry("gender.toml", "girl.labels").is_none());
    }

    #[test]
    fn test_load_nonexistent_returns_empty() {
        let failures = ExpectedFailures::load(Path::new("/nonexistent/path.toml")).unwrap();
        assert_eq!(failures.count(), 0);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[known]]\nfixture = 3").unwrap();
        assert!(matches!(
            ExpectedFailures::load(file.path()),
            Err(SpecError::Load { .. })
        ));
    }
}
