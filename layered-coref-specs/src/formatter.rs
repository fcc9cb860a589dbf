//! Rich error formatting for failed checks.

use crate::failures::FailureState;
use crate::runner::{CaseResult, CheckOutcome, LabelMismatch};
use layered_coref::Label;
use std::fmt::{self, Write};

/// Format a failed check with the sentence and a marker under the first
/// differing token.
pub fn format_failure(
    fixture_name: &str,
    case: &CaseResult,
    outcome: &CheckOutcome,
    state: FailureState,
) -> String {
    let mut output = String::new();
    // writing into a String cannot fail
    let _ = write_failure(&mut output, fixture_name, case, outcome, state);
    output
}

fn write_failure(
    output: &mut String,
    fixture_name: &str,
    case: &CaseResult,
    outcome: &CheckOutcome,
    state: FailureState,
) -> fmt::Result {
    let status = match state {
        FailureState::Known => "KNOWN",
        FailureState::Pending => "PENDING",
        FailureState::Regression => "FAIL",
    };
    writeln!(output, "\n{}: {}:{}", status, fixture_name, case.name)?;
    writeln!(output)?;
    writeln!(output, "  {}", case.sentence)?;

    match outcome {
        CheckOutcome::LabelsDiffer(mismatches) => {
            if let Some(first) = mismatches.first() {
                let (offset, width) = token_columns(&case.sentence, first.idx);
                writeln!(output, "  {}{}", " ".repeat(offset), "^".repeat(width.max(1)))?;
            }
            writeln!(output)?;
            writeln!(output, "  labels differ:")?;
            for mismatch in mismatches {
                writeln!(
                    output,
                    "    \u{2717} [{}] {}: expected `{}`, found `{}`",
                    mismatch.idx, mismatch.text, mismatch.expected, mismatch.actual
                )?;
            }
            if let Some(hint) = generate_hint(mismatches) {
                writeln!(output)?;
                writeln!(output, "  hint: {}", hint)?;
            }
        }
        CheckOutcome::RewriteDiffers { expected, actual } => {
            writeln!(output)?;
            writeln!(output, "  rewrite differs:")?;
            writeln!(output, "    expected: {}", expected)?;
            writeln!(output, "    found:    {}", actual)?;
        }
        CheckOutcome::Passed => {
            writeln!(output, "  (passed)")?;
        }
    }
    Ok(())
}

/// Character offset and width of token `idx` in a space-joined sentence.
fn token_columns(sentence: &str, idx: usize) -> (usize, usize) {
    let mut offset = 0;
    for (i, word) in sentence.split(' ').enumerate() {
        let width = word.chars().count();
        if i == idx {
            return (offset, width);
        }
        offset += width + 1;
    }
    (offset, 0)
}

fn generate_hint(mismatches: &[LabelMismatch]) -> Option<&'static str> {
    for mismatch in mismatches {
        match (mismatch.expected, mismatch.actual) {
            (Label::Entity(..), Label::Outside) => {
                return Some(
                    "a mention was dropped - check that a later pronoun agrees with its category",
                )
            }
            (Label::Coref(_), Label::Outside) => {
                return Some("a pronoun was not recognized - is it in the lexicon bundle?")
            }
            (Label::Outside, Label::Entity(..)) => {
                return Some(
                    "an extra mention survived - check the span extenders and POS tags around it",
                )
            }
            _ => {}
        }
    }
    None
}

/// Format a summary of all results.
pub fn format_summary(
    name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let status = if regressions > 0 { "FAIL" } else { "PASS" };
    format!(
        "\n{}: {}\n  {} passed, {} failed ({} expected, {} regressions)\n",
        status, name, passed, failed, expected_failures, regressions
    )
}
