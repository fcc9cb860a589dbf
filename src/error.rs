//! Error types.
//!
//! The tagging pipeline itself never fails. Errors come from the edges:
//! the POS tagging collaborator and loading lexicon bundles from disk.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of the external POS tagging collaborator.
#[derive(Debug, Error)]
pub enum TaggingError {
    /// No tagger is configured, or the configured one cannot run.
    #[error("tagging unavailable: {0}")]
    Unavailable(String),

    /// The tagger ran and reported a failure.
    #[error("tagger backend failed: {message}")]
    Backend { message: String },

    /// Input bytes are not valid UTF-8.
    #[error("undecodable input text: {0}")]
    Undecodable(#[from] std::str::Utf8Error),
}

/// Failure loading a lexicon bundle.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Any error surfaced by this crate.
#[derive(Debug, Error)]
pub enum CorefError {
    #[error(transparent)]
    Tagging(#[from] TaggingError),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

/// Result type for fallible operations in this crate.
pub type CorefResult<T> = Result<T, CorefError>;
