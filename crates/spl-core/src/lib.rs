//! Core types shared by every SPL analysis crate.
//!
//! - [`Span`]: source positions of nodes and diagnostics
//! - [`TypeHash`], [`SplType`], [`TypeKind`]: type identity
//! - [`QualifiedName`], [`FunctionSignature`]: function identity
//! - [`Diagnostic`], [`Diagnostics`], [`DiagnosticSink`]: the reporting boundary
//! - [`RegistryError`], [`CompilationError`]: error types

mod diagnostics;
mod error;
mod qualified_name;
mod span;
mod type_hash;
mod types;

pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Diagnostics, Severity};
pub use error::{CompilationError, RegistryError};
pub use qualified_name::QualifiedName;
pub use span::Span;
pub use type_hash::{TypeHash, primitives};
pub use types::{FunctionOrigin, FunctionSignature, SplType, TypeKind};
