//! Parser for TOML fixture files.
//!
//! ```toml
//! title = "Gendered nouns"
//! lang = "en"
//!
//! [[case]]
//! name = "girl"
//! rewrite = "The girl left because The girl was tired"
//! rows = """
//! The      DET    B-ENTITY-FEMALE
//! girl     NOUN   I-ENTITY-FEMALE
//! left     VERB   O
//! because  SCONJ  O
//! she      PRON   B-COREF-FEMALE
//! was      AUX    O
//! tired    ADJ    O
//! """
//! ```

use crate::errors::{SpecError, SpecResult};
use crate::fixture::{CorefFixture, ExpectedRow, FixtureCase, RawFixture};
use layered_coref::Label;

/// Count lines up to a byte position (for error messages).
fn count_lines(input: &str, byte_pos: usize) -> usize {
    input[..byte_pos.min(input.len())]
        .chars()
        .filter(|&c| c == '\n')
        .count()
        + 1
}

/// Parse a `rows` block: one `text POS LABEL` triple per line. Blank lines and
/// `#` comments are skipped.
pub fn parse_rows(input: &str) -> SpecResult<Vec<ExpectedRow>> {
    let mut rows = Vec::new();

    for (line_num, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let (text, pos, label) = match fields.as_slice() {
            [text, pos, label] => (*text, *pos, *label),
            _ => {
                return Err(SpecError::Parse {
                    line: line_num + 1,
                    message: format!(
                        "expected `text POS LABEL`, found {} field(s): {:?}",
                        fields.len(),
                        trimmed
                    ),
                })
            }
        };

        let label: Label = label.parse().map_err(|e| SpecError::Parse {
            line: line_num + 1,
            message: format!("{}", e),
        })?;

        rows.push(ExpectedRow {
            text: text.to_string(),
            pos: pos.to_string(),
            label,
            source_line: line_num + 1,
        });
    }

    Ok(rows)
}

/// Parse a full fixture file.
pub fn parse_fixture(input: &str) -> SpecResult<CorefFixture> {
    let raw: RawFixture = toml::from_str(input).map_err(|e| SpecError::Parse {
        line: e.span().map_or(0, |span| count_lines(input, span.start)),
        message: e.message().to_string(),
    })?;

    let mut cases = Vec::with_capacity(raw.cases.len());
    for raw_case in raw.cases {
        if cases.iter().any(|case: &FixtureCase| case.name == raw_case.name) {
            return Err(SpecError::Parse {
                line: 0,
                message: format!("duplicate case name `{}`", raw_case.name),
            });
        }
        let rows = parse_rows(&raw_case.rows).map_err(|e| match e {
            SpecError::Parse { line, message } => SpecError::Parse {
                line,
                message: format!("case `{}`: {}", raw_case.name, message),
            },
            other => other,
        })?;
        cases.push(FixtureCase {
            name: raw_case.name,
            rows,
            rewrite: raw_case.rewrite,
        });
    }

    Ok(CorefFixture {
        title: raw.title,
        lang: raw.lang,
        cases,
    })
}
