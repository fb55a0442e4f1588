//! Accumulates diagnostics over a whole scan.

use crate::error::Diagnostic;

/// Collects every diagnostic found during a single scan pass.
///
/// The scanner never aborts on the first problem; it records each one here
/// and keeps going, so a strict scan reports all unbalanced parentheses at
/// once.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if no diagnostics were recorded.
    pub(crate) fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consumes the collector, returning the recorded diagnostics in
    /// source order.
    pub(crate) fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
