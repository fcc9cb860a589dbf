//! Runs fixtures through the tagging pipeline and compares the output.

use crate::failures::{CheckKind, ExpectedFailures, FailureState, HarnessResult};
use crate::fixture::{CorefFixture, FixtureCase};
use crate::formatter::format_failure;
use layered_coref::{CorefParser, Label};

/// A token whose label differs from the fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMismatch {
    pub idx: usize,
    pub text: String,
    pub expected: Label,
    pub actual: Label,
}

/// Outcome of one check on one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    LabelsDiffer(Vec<LabelMismatch>),
    RewriteDiffers { expected: String, actual: String },
}

impl CheckOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckOutcome::Passed)
    }
}

/// Everything checked for one case.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub name: String,
    pub sentence: String,
    pub labels: CheckOutcome,
    /// `None` when the case does not declare a rewrite
    pub rewrite: Option<CheckOutcome>,
}

impl CaseResult {
    /// Checks that ran, with the kind of each.
    pub fn checks(&self) -> impl Iterator<Item = (CheckKind, &CheckOutcome)> + '_ {
        std::iter::once((CheckKind::Labels, &self.labels))
            .chain(self.rewrite.iter().map(|outcome| (CheckKind::Rewrite, outcome)))
    }
}

/// Run a single case.
pub fn run_case(parser: &CorefParser, case: &FixtureCase) -> CaseResult {
    let line = parser.tag_line(case.tokens());

    let mismatches: Vec<LabelMismatch> = case
        .rows
        .iter()
        .enumerate()
        .filter(|(idx, row)| line.label(*idx) != row.label)
        .map(|(idx, row)| LabelMismatch {
            idx,
            text: row.text.clone(),
            expected: row.label,
            actual: line.label(idx),
        })
        .collect();
    let labels = if mismatches.is_empty() {
        CheckOutcome::Passed
    } else {
        CheckOutcome::LabelsDiffer(mismatches)
    };

    let rewrite = case.rewrite.as_ref().map(|expected| {
        let actual = parser.replace_corefs(case.tokens());
        if &actual == expected {
            CheckOutcome::Passed
        } else {
            CheckOutcome::RewriteDiffers {
                expected: expected.clone(),
                actual,
            }
        }
    });

    CaseResult {
        name: case.name.clone(),
        sentence: case.sentence(),
        labels,
        rewrite,
    }
}

/// Run every case of a fixture with a parser for the fixture's language.
pub fn run_fixture(fixture: &CorefFixture) -> Vec<CaseResult> {
    let parser = CorefParser::new(&fixture.lang);
    fixture
        .cases
        .iter()
        .map(|case| run_case(&parser, case))
        .collect()
}

/// Run all fixtures, classifying each failed check against the expected
/// failures. Returns the tally and a formatted report for every failure.
pub fn run_harness(
    fixtures: &[(String, CorefFixture)],
    expected: &ExpectedFailures,
) -> (HarnessResult, Vec<String>) {
    let mut result = HarnessResult::new();
    let mut reports = Vec::new();

    for (fixture_name, fixture) in fixtures {
        for case_result in run_fixture(fixture) {
            for (kind, outcome) in case_result.checks() {
                let assertion_ref = ExpectedFailures::format_ref(&case_result.name, kind);
                let state = expected.is_expected(fixture_name, &assertion_ref);

                if outcome.is_pass() {
                    result.record_pass();
                    if state != FailureState::Regression {
                        result
                            .unexpected_passes
                            .push(format!("{}:{}", fixture_name, assertion_ref));
                    }
                    continue;
                }

                tracing::debug!(fixture = %fixture_name, check = %assertion_ref, ?state, "check failed");
                result.record_failure(state);
                reports.push(format_failure(fixture_name, &case_result, outcome, state));
            }
        }
    }

    (result, reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_fixture;
    use crate::failures::FailureEntry;

    const FIXTURE: &str = r#"
title = "runner"

[[case]]
name = "book"
rewrite = "Here is the book now take the book"
rows = """
Here  ADV   O
is    AUX   O
the   DET   B-ENTITY-INANIMATE
book  NOUN  I-ENTITY-INANIMATE
now   ADV   O
take  VERB  O
it    PRON  B-COREF-INANIMATE
"""

[[case]]
name = "wrong"
rewrite = "she left"
rows = """
The   DET   O
girl  NOUN  O
said  VERB  O
she   PRON  B-COREF-FEMALE
left  VERB  O
"""
"#;

    #[test]
    fn test_run_fixture() {
        let fixture = parse_fixture(FIXTURE).unwrap();
        let results = run_fixture(&fixture);

        assert_eq!(results[0].labels, CheckOutcome::Passed);
        assert_eq!(results[0].rewrite, Some(CheckOutcome::Passed));

        match &results[1].labels {
            CheckOutcome::LabelsDiffer(mismatches) => {
                let idxs: Vec<usize> = mismatches.iter().map(|m| m.idx).collect();
                assert_eq!(idxs, vec![0, 1]);
                assert_eq!(mismatches[1].actual.to_string(), "I-ENTITY-FEMALE");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(
            results[1].rewrite,
            Some(CheckOutcome::RewriteDiffers {
                expected: "she left".to_string(),
                actual: "The girl said The girl left".to_string(),
            })
        );
    }

    #[test]
    fn test_run_harness_classifies_failures() {
        let fixtures = vec![("runner.toml".to_string(), parse_fixture(FIXTURE).unwrap())];

        let (result, reports) = run_harness(&fixtures, &ExpectedFailures::default());
        assert_eq!(result.total, 4);
        assert_eq!(result.passed, 2);
        assert_eq!(result.regressions, 2);
        assert_eq!(reports.len(), 2);

        let expected = ExpectedFailures {
            known: vec![FailureEntry {
                fixture: "runner.toml".to_string(),
                assertion: "wrong.labels".to_string(),
                reason: Some("fixture is deliberately wrong".to_string()),
                added: None,
            }],
            pending: vec![FailureEntry {
                fixture: "runner.toml".to_string(),
                assertion: "book.labels".to_string(),
                reason: None,
                added: None,
            }],
        };
        let (result, _) = run_harness(&fixtures, &expected);
        assert_eq!(result.expected_failures, 1);
        assert_eq!(result.regressions, 1);
        assert_eq!(result.unexpected_passes, vec!["runner.toml:book.labels".to_string()]);
    }
}
