//! Core types for parsed fixture files.

use layered_coref::Label;
use serde::{Deserialize, Serialize};

/// A parsed fixture document: one language, many sentences.
#[derive(Debug, Clone)]
pub struct CorefFixture {
    pub title: Option<String>,
    /// Language code handed to the parser
    pub lang: String,
    pub cases: Vec<FixtureCase>,
}

impl CorefFixture {
    pub fn case_by_name(&self, name: &str) -> Option<&FixtureCase> {
        self.cases.iter().find(|case| case.name == name)
    }
}

/// One tagged sentence and what the pipeline should make of it.
#[derive(Debug, Clone)]
pub struct FixtureCase {
    pub name: String,
    pub rows: Vec<ExpectedRow>,
    /// Expected output of the pronoun rewrite, when the case checks it
    pub rewrite: Option<String>,
}

impl FixtureCase {
    /// The `(text, POS)` pairs fed to the pipeline.
    pub fn tokens(&self) -> Vec<(&str, &str)> {
        self.rows
            .iter()
            .map(|row| (row.text.as_str(), row.pos.as_str()))
            .collect()
    }

    /// Space-joined token text, for failure context.
    pub fn sentence(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One `text POS LABEL` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedRow {
    pub text: String,
    pub pos: String,
    pub label: Label,
    /// 1-based line within the case's `rows` block
    pub source_line: usize,
}

/// On-disk TOML shape, before the rows are parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawFixture {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default, rename = "case")]
    pub cases: Vec<RawCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawCase {
    pub name: String,
    pub rows: String,
    #[serde(default)]
    pub rewrite: Option<String>,
}

fn default_lang() -> String {
    "en".to_string()
}
