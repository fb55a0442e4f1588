//! Recursive descent bracket scanner for the bracken outliner.
//!
//! This crate converts a flat character sequence into a tree of
//! [`Node`]s reflecting its parenthesis nesting. Two entry points are
//! provided:
//!
//! - [`scan`] — the permissive default: it accepts any input, including
//!   unbalanced parentheses, and never fails.
//! - [`scan_strict`] — opt-in validation: the same tree-building pass, but
//!   unbalanced parentheses become [`error::ParseError`] with one
//!   [`error::Diagnostic`] per problem.
//!
//! The scanner visits each character once and recurses into every matched
//! `(`...`)` span; the parentheses themselves are consumed as structure and
//! never appear in the tree. Set the `trace` log level to watch each
//! character visit and group boundary as it happens.

pub mod error;

mod scanner;
mod span;

#[cfg(test)]
mod scanner_tests;

pub use span::Span;

use bracken_core::tree::Node;

use crate::{error::ParseError, scanner::Scanner};

/// Parses `source` into a bracket tree, accepting any input.
///
/// Unbalanced input degrades instead of failing: a stray `)` at nesting
/// depth zero ends the scan early, and a `(` with no matching `)` produces
/// a group implicitly closed at end-of-input.
///
/// # Examples
///
/// ```
/// use bracken_core::tree::Node;
/// use bracken_parser::scan;
///
/// let tree = scan("(a+(b+c))");
///
/// assert_eq!(
///     tree,
///     vec![Node::group(vec![
///         Node::leaf('a'),
///         Node::leaf('+'),
///         Node::group(vec![Node::leaf('b'), Node::leaf('+'), Node::leaf('c')]),
///     ])]
/// );
/// ```
pub fn scan(source: &str) -> Vec<Node> {
    let (nodes, _) = Scanner::new(source).run();
    nodes
}

/// Parses `source` into a bracket tree, rejecting unbalanced parentheses.
///
/// This runs the same pass as [`scan`] but collects a diagnostic for every
/// unmatched parenthesis found, so one call reports all of them.
///
/// # Errors
///
/// Returns [`ParseError`] when the input contains a `)` with no open group
/// ([`error::ErrorCode::E100`]) or a `(` whose matching `)` is missing
/// ([`error::ErrorCode::E101`]).
///
/// # Examples
///
/// ```
/// use bracken_parser::scan_strict;
///
/// assert!(scan_strict("(a + b)").is_ok());
/// assert!(scan_strict("(a + b").is_err());
/// ```
pub fn scan_strict(source: &str) -> Result<Vec<Node>, ParseError> {
    let (nodes, diagnostics) = Scanner::new(source).run();

    if diagnostics.is_empty() {
        Ok(nodes)
    } else {
        Err(ParseError::new(diagnostics))
    }
}
