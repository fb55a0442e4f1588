//! Labeled source spans attached to diagnostics.

use crate::span::Span;

/// A message anchored to a byte span of the scanned source.
///
/// Each diagnostic has exactly one primary label (the location being
/// reported) and any number of secondary labels giving extra context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    primary: bool,
}

impl Label {
    /// Creates a primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            primary: true,
        }
    }

    /// Creates a secondary (contextual) label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            primary: false,
        }
    }

    /// The span this label points at.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The label text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` for the diagnostic's primary label.
    pub fn is_primary(&self) -> bool {
        self.primary
    }
}
