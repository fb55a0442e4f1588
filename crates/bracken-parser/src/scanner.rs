//! The recursive descent bracket scanner.
//!
//! One pass over the source builds the whole tree: `(` descends into a
//! nested scan, `)` ends the current scan, and everything else becomes a
//! leaf. Recursion depth equals parenthesis nesting depth, so there is no
//! explicit stack, and each step consumes at least one character, so the
//! scan always terminates.

use log::trace;

use bracken_core::tree::Node;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    span::Span,
};

/// Single-use scanner over one source string.
///
/// Problems with unbalanced parentheses are recorded as diagnostics while
/// scanning continues; the caller decides whether they are fatal.
pub(crate) struct Scanner {
    /// Characters of the source, each with its byte offset.
    chars: Vec<(usize, char)>,
    /// Total source length in bytes, for end-of-input spans.
    src_len: usize,
    diagnostics: DiagnosticCollector,
}

impl Scanner {
    pub(crate) fn new(source: &str) -> Self {
        Self {
            chars: source.char_indices().collect(),
            src_len: source.len(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Scans the whole source, returning the tree and every diagnostic
    /// recorded along the way.
    pub(crate) fn run(mut self) -> (Vec<Node>, Vec<Diagnostic>) {
        let (nodes, consumed) = self.scan_nodes(0, None);
        debug_assert!(consumed <= self.chars.len());

        (nodes, self.diagnostics.into_diagnostics())
    }

    /// Scans nodes from character index `start` until a `)` or end-of-input.
    ///
    /// `opener` is the span of the `(` that triggered this call, `None` at
    /// the top level; nested calls resume one past their opening delimiter,
    /// never at a hard-coded offset. Returns the accumulated nodes together
    /// with the number of characters this call consumed, including the
    /// terminating `)` when one was found, so the caller advances its
    /// cursor by the authoritative count rather than re-deriving it from
    /// node counts.
    fn scan_nodes(&mut self, start: usize, opener: Option<Span>) -> (Vec<Node>, usize) {
        let mut nodes = Vec::new();
        let mut i = start;

        while let Some(&(_, c)) = self.chars.get(i) {
            trace!(index = i, character:? = c; "Visiting character");

            match c {
                '(' => {
                    trace!(index = i; "Opening group");
                    let opened = self.char_span(i);
                    let (children, consumed) = self.scan_nodes(i + 1, Some(opened));
                    nodes.push(Node::Group(children));
                    i += 1 + consumed;
                }
                ')' => {
                    trace!(index = i; "Closing group");
                    if opener.is_none() {
                        // Nothing is open at depth zero; the permissive scan
                        // treats this as end-of-input and drops the rest.
                        self.diagnostics.push(
                            Diagnostic::error("unexpected closing parenthesis")
                                .with_code(ErrorCode::E100)
                                .with_label(self.char_span(i), "no group is open here")
                                .with_help("remove this `)` or open a group before it"),
                        );
                    }
                    // The `)` itself is consumed but never stored.
                    return (nodes, i + 1 - start);
                }
                _ => {
                    nodes.push(Node::Leaf(c));
                    i += 1;
                }
            }
        }

        if let Some(opened) = opener {
            // End-of-input with a group still open: implicitly closed here.
            let input_end = Span::new(self.src_len..self.src_len);
            self.diagnostics.push(
                Diagnostic::error("unclosed group")
                    .with_code(ErrorCode::E101)
                    .with_label(opened, "group opened here")
                    .with_secondary_label(input_end, "input ends here")
                    .with_help("add a matching `)` before the end of the input"),
            );
        }

        (nodes, i - start)
    }

    /// Byte span of the single character at index `i`.
    fn char_span(&self, i: usize) -> Span {
        let (offset, c) = self.chars[i];
        Span::new(offset..offset + c.len_utf8())
    }
}
