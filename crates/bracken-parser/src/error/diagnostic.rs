//! The diagnostic type produced by strict scanning.

use thiserror::Error;

use crate::{
    error::{ErrorCode, Label, Severity},
    span::Span,
};

/// A single error or warning produced by a strict scan.
///
/// Built with a fluent API: start from [`Diagnostic::error`] or
/// [`Diagnostic::warning`], then attach a code, labels, and help text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{severity}: {message}")]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    code: Option<ErrorCode>,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Creates an error-severity diagnostic with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning-severity diagnostic with the given message.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            code: None,
            labels: Vec::new(),
            help: None,
        }
    }

    /// Attaches an error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attaches the primary label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Attaches a secondary label for extra context.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Attaches help text suggesting how to fix the problem.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// The diagnostic severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The main diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error code, if one was attached.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// All labels, primary first if present.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// The help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates_fields() {
        let diag = Diagnostic::error("unclosed group")
            .with_code(ErrorCode::E101)
            .with_label(Span::new(4..5), "group opened here")
            .with_secondary_label(Span::new(9..9), "input ends here")
            .with_help("add a matching `)`");

        assert!(diag.severity().is_error());
        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(!diag.labels()[1].is_primary());
        assert_eq!(diag.help(), Some("add a matching `)`"));
    }

    #[test]
    fn test_display_includes_severity() {
        let diag = Diagnostic::error("unexpected closing parenthesis");
        assert_eq!(diag.to_string(), "error: unexpected closing parenthesis");

        let diag = Diagnostic::warning("suspicious input");
        assert_eq!(diag.to_string(), "warning: suspicious input");
    }
}
