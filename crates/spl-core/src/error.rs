//! Error types for the SPL analysis core.
//!
//! ```text
//! RegistryError     - building the type/function registries
//! CompilationError  - unexpected failures while computing expression types
//! ```
//!
//! Neither is a user-facing diagnostic by itself: checkers convert a
//! `CompilationError` into an `ILLEGAL_EXPRESSION` diagnostic at the node
//! they were checking, and hosts surface a `RegistryError` when a session
//! cannot be set up.

use thiserror::Error;

use crate::Span;

/// Errors that occur while building or querying the registries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A type name was never registered.
    #[error("unknown type '{name}'")]
    UnknownType { name: String },

    /// A type name was registered twice.
    #[error("type '{name}' is already registered")]
    DuplicateType { name: String },

    /// A unit name is empty or contains whitespace.
    #[error("invalid type name '{name}'")]
    InvalidTypeName { name: String },
}

/// Failures raised while computing the type of an expression.
///
/// These are distinct from an *indeterminate* type (an unresolved name),
/// which is an ordinary result and not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompilationError {
    /// A referenced type could not be found.
    #[error("at {span}: unknown type '{name}'")]
    UnknownType {
        /// The type name that wasn't found.
        name: String,
        /// Where the type was referenced.
        span: Span,
    },

    /// An operator was applied to operands it does not accept.
    #[error("at {span}: {message}")]
    InvalidOperation {
        /// Description of what's invalid.
        message: String,
        /// Where the operation occurred.
        span: Span,
    },

    /// Internal calculator error.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl CompilationError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            CompilationError::UnknownType { span, .. } => *span,
            CompilationError::InvalidOperation { span, .. } => *span,
            CompilationError::Internal { .. } => Span::default(),
        }
    }

    /// Lift a registry lookup failure to the node that triggered it.
    pub fn from_registry(err: RegistryError, span: Span) -> Self {
        match err {
            RegistryError::UnknownType { name } => CompilationError::UnknownType { name, span },
            other => CompilationError::Internal {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compilation_error_display() {
        let err = CompilationError::UnknownType {
            name: "mV".to_string(),
            span: Span::new(10, 5, 2),
        };
        assert_eq!(err.to_string(), "at 10:5: unknown type 'mV'");
        assert_eq!(err.span(), Span::new(10, 5, 2));
    }

    #[test]
    fn registry_error_lifts_with_span() {
        let err = CompilationError::from_registry(
            RegistryError::UnknownType { name: "nS".into() },
            Span::point(2, 3),
        );
        assert_eq!(
            err,
            CompilationError::UnknownType {
                name: "nS".into(),
                span: Span::point(2, 3)
            }
        );

        let internal = CompilationError::from_registry(
            RegistryError::DuplicateType { name: "ms".into() },
            Span::point(1, 1),
        );
        assert!(matches!(internal, CompilationError::Internal { .. }));
        assert_eq!(internal.span(), Span::default());
    }
}
