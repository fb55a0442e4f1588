//! Error codes for the bracken diagnostic system.
//!
//! The scanner has no lexing or validation phases, so all codes live in the
//! parser range (`E1xx`).

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unexpected closing parenthesis.
    ///
    /// A `)` was encountered at nesting depth zero, where no group is open.
    /// The permissive scan treats it as end-of-input and silently discards
    /// the rest of the source.
    E100,

    /// Unclosed group.
    ///
    /// A `(` opened a group whose matching `)` never appeared before
    /// end-of-input. The permissive scan implicitly closes the group at the
    /// input boundary.
    E101,
}

impl ErrorCode {
    /// A short human-readable description of the error class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "unexpected closing parenthesis",
            ErrorCode::E101 => "unclosed group",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::E100 => write!(f, "E100"),
            ErrorCode::E101 => write!(f, "E101"),
        }
    }
}
