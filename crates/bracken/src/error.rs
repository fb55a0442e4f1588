//! Error types for bracken operations.
//!
//! This module provides the main error type [`BrackenError`] which wraps
//! the error conditions that can occur while processing an input.

use std::io;

use thiserror::Error;

use bracken_parser::error::ParseError;

/// The main error type for bracken operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries structured diagnostics with source code
/// spans alongside the source text they point into, so callers can render
/// rich reports.
#[derive(Debug, Error)]
pub enum BrackenError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },
}

impl BrackenError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
