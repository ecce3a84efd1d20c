//! Compiler diagnostics infrastructure.
//!
//! This module provides types for collecting and rendering diagnostic messages.

mod message;
mod printer;

#[cfg(test)]
mod tests;

use rowan::TextRange;

pub use message::Severity;
pub use printer::DiagnosticsPrinter;

use message::{DiagnosticMessage, Fix, RelatedInfo};

/// Collection of diagnostic messages from parsing and analysis.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

/// Builder for constructing a diagnostic message.
#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn error(&mut self, msg: impl Into<String>, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::error(range, msg),
        }
    }

    pub fn warning(&mut self, msg: impl Into<String>, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::warning(range, msg),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    pub fn printer<'a>(&'a self, source: &'a str) -> DiagnosticsPrinter<'a, 'a> {
        DiagnosticsPrinter::new(self, source)
    }

    pub(crate) fn messages(&self) -> &[DiagnosticMessage] {
        &self.messages
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }

    /// Records the current message count as a checkpoint. Diagnostics emitted after this
    /// call can be discarded in bulk with [`Suppression::restore`], which is how speculative
    /// parses (try-then-rollback) avoid leaking diagnostics from an abandoned attempt.
    pub fn suppress(&self) -> Suppression {
        Suppression {
            checkpoint: self.messages.len(),
        }
    }

    /// Convenience wrapper for a plain error diagnostic with no related info or fix.
    pub fn report_error(&mut self, message: impl Into<String>, range: TextRange) {
        self.error(message, range).emit();
    }

    /// Convenience wrapper for a plain warning diagnostic with no related info or fix.
    pub fn report_warning(&mut self, message: impl Into<String>, range: TextRange) {
        self.warning(message, range).emit();
    }
}

/// A checkpoint into a [`Diagnostics`] log, taken via [`Diagnostics::suppress`].
///
/// Restoring it truncates the log back to the length it had when the checkpoint was taken,
/// discarding every diagnostic emitted since. Used to back out of a speculative parse
/// without leaving its error messages behind.
#[derive(Debug, Clone, Copy)]
#[must_use = "a Suppression does nothing until restored"]
pub struct Suppression {
    checkpoint: usize,
}

impl Suppression {
    /// Truncates `diagnostics` back to the length recorded at suppression time.
    pub fn restore(self, diagnostics: &mut Diagnostics) {
        diagnostics.messages.truncate(self.checkpoint);
    }
}

impl<'a> DiagnosticBuilder<'a> {
    pub fn related_to(mut self, msg: impl Into<String>, range: TextRange) -> Self {
        self.message.related.push(RelatedInfo::new(range, msg));
        self
    }

    pub fn fix(mut self, description: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.message.fix = Some(Fix::new(replacement, description));
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
