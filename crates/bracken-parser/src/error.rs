//! Error and diagnostic system for the bracken scanner.
//!
//! The permissive [`scan`](crate::scan) entry point never fails; this module
//! only backs the opt-in strict mode. It provides:
//! - Error codes for documentation and searchability
//! - Labeled byte spans pointing at the offending parenthesis
//! - Severity levels
//! - A collector for accumulating every problem found in one pass
//!
//! # Overview
//!
//! The system is built around the [`Diagnostic`] type, a single error or
//! warning with an optional error code, source labels, and help text.
//! Strict scanning wraps all collected diagnostics in one [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use bracken_parser::error::{Diagnostic, ErrorCode};
//! # use bracken_parser::Span;
//!
//! let opener = Span::new(4..5);
//!
//! let diag = Diagnostic::error("unclosed group")
//!     .with_code(ErrorCode::E101)
//!     .with_label(opener, "group opened here")
//!     .with_help("add a matching `)` before the end of the input");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
