//! Error types for the fixture harness.

use thiserror::Error;

/// Errors that can occur while loading or checking fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Error parsing a fixture file.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error loading a fixture file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// A case produced output that differs from its expectation.
    #[error("assertion failed: {message}")]
    Assertion { message: String },
}

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;
