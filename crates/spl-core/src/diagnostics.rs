//! Diagnostic log for one analysis pass.
//!
//! Checkers never fail: every finding becomes a [`Diagnostic`] reported to a
//! [`DiagnosticSink`]. [`Diagnostics`] is the standard sink, a per-unit log
//! that accumulates for the whole pass and is read by the caller at the end.
//!
//! # Examples
//!
//! ```
//! use spl_core::{Diagnostic, DiagnosticCode, DiagnosticSink, Diagnostics, Span};
//!
//! let mut log = Diagnostics::new();
//! log.report(Diagnostic::error(
//!     DiagnosticCode::FunctionDoesNotExist,
//!     "The function 'foo' is not defined with the signature ''",
//!     Span::point(3, 5),
//! ));
//!
//! assert!(log.has_errors());
//! assert_eq!(log.error_count(), 1);
//! assert_eq!(
//!     log.to_string(),
//!     "3:5: error: [FUNCTION_DOES_NOT_EXIST] The function 'foo' is not defined with the signature ''\n"
//! );
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::Span;

/// Stable diagnostic codes emitted by the context-condition checkers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// A call does not resolve to any user or builtin function.
    FunctionDoesNotExist,
    /// An expression has a type that is not allowed at its position.
    IllegalExpression,
}

impl DiagnosticCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::FunctionDoesNotExist => "FUNCTION_DOES_NOT_EXIST",
            DiagnosticCode::IllegalExpression => "ILLEGAL_EXPRESSION",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A semantic error; blocks code generation.
    Error,
    /// A note that a check was skipped; never blocks code generation.
    Warning,
}

/// A single finding of a checker. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,
    /// Start of the node the diagnostic is anchored at.
    pub span: Span,
}

impl Diagnostic {
    pub fn error(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            severity: Severity::Error,
            message: message.into(),
            span,
        }
    }

    pub fn warning(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            message: message.into(),
            span,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    /// Format: `line:col: severity: [CODE] message`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(
            f,
            "{}: {}: [{}] {}",
            self.span, severity, self.code, self.message
        )
    }
}

/// The single sink all checkers write to.
///
/// Reporting must never fail and must never halt the reporting checker.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Accumulated diagnostics of one compilation unit.
///
/// Not meant to be shared between units analysed concurrently; give each
/// unit its own log.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    diagnostics: VecDeque<Diagnostic>,
    has_errors: bool,
}

impl Diagnostics {
    /// Creates a new, empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the log contains any error.
    ///
    /// Tracked on insertion, so this does not iterate.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Removes all diagnostics and resets the error flag.
    pub fn clear(&mut self) {
        self.diagnostics.clear();
        self.has_errors = false;
    }

    /// All diagnostics in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Diagnostics carrying the given code, any severity.
    pub fn with_code(&self, code: DiagnosticCode) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }

    pub fn count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Writes every diagnostic on its own line.
    pub fn emit<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for diagnostic in &self.diagnostics {
            writeln!(writer, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push_back(diagnostic);
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}
