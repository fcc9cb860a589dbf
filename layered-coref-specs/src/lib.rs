#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Fixture-driven testing for layered-coref.
//!
//! Test sentences are written as TOML fixture files holding CoNLL-style
//! `text POS LABEL` rows and, optionally, the expected pronoun rewrite. The
//! harness runs each case through [`layered_coref::CorefParser`] and reports
//! every token whose label differs.
//!
//! ## Modules
//!
//! - [`parser`] - Parses fixture files and their row blocks
//! - [`fixture`] - Fixture types
//! - [`loader`] - Loading fixture files and directories
//! - [`runner`] - Running cases and tallying results
//! - [`errors`] - Error types for the harness
//! - [`formatter`] - Failure reports with the differing token marked
//! - [`failures`] - Expected failures tracking via TOML

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod parser;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{CheckKind, ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{CorefFixture, ExpectedRow, FixtureCase};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use parser::{parse_fixture, parse_rows};
pub use runner::{run_case, run_fixture, run_harness, CaseResult, CheckOutcome, LabelMismatch};

#[cfg(test)]
mod tests;
