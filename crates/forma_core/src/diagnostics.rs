//! Structured diagnostics channel
//!
//! Renderers and the token resolver never throw on malformed input; they
//! record a [`Diagnostic`] and degrade. Collecting diagnostics in a sink
//! (instead of writing to a global console) lets tests assert on exactly
//! what was reported. Every warning is mirrored to `tracing` so operators
//! still see it in logs.

use std::fmt;

/// Severity level for a reported diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The operation could not produce its primary output
    Error,
    /// The operation degraded but still produced output
    Warning,
    /// Informational message
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A single reported problem
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable machine-readable code, e.g. `token.malformed-ref`
    pub code: &'static str,
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)
    }
}

/// Ordered collection of diagnostics produced by one operation
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and mirror it to the tracing subscriber
    pub fn warn(&mut self, code: &'static str, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(code, "{message}");
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            code,
            message,
        });
    }

    /// Record an error and mirror it to the tracing subscriber
    pub fn error(&mut self, code: &'static str, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(code, "{message}");
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            code,
            message,
        });
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Append all entries from another sink
    pub fn merge(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
