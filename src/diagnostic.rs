//! Diagnostics emitted by the tolerant boundaries of the crate
//!
//! A tolerant operation never returns an [`Error`](crate::error::Error) to its
//! caller. It reports exactly one [`Diagnostic`] to a [`DiagnosticSink`] and
//! hands back `None` instead.

use std::fmt;

use crate::error::{Error, ErrorKind};

/// One human-readable failure line, qualified by operation and kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Operation that failed, e.g. `load`
    pub operation: &'static str,
    pub kind: ErrorKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(operation: &'static str, kind: ErrorKind, message: impl Into<String>) -> Self {
        Diagnostic {
            operation,
            kind,
            message: message.into(),
        }
    }

    pub fn from_error(operation: &'static str, err: &Error) -> Self {
        // Messages are kept on a single line
        let message = err.to_string().replace(['\n', '\r'], " ");
        Diagnostic::new(operation, err.kind(), message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.operation, self.kind, self.message)
    }
}

/// Destination for diagnostics
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Writes every diagnostic as one line on stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        eprintln!("{}", diagnostic);
    }
}

/// Collects diagnostics in memory
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Turns a strict result into the Absent sentinel, reporting the failure
pub fn absorb<T>(
    operation: &'static str,
    result: Result<T, Error>,
    sink: &mut dyn DiagnosticSink,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            let diagnostic = Diagnostic::from_error(operation, &err);
            log::debug!("{} failed with {}", operation, diagnostic.kind);
            sink.report(diagnostic);
            None
        }
    }
}
