//! Static semantic analysis for SPL.
//!
//! Given a scoped AST and the session registries, this crate:
//!
//! - relates types ([`is_compatible`], [`promote_numeric`])
//! - computes expression types ([`TypeCalculator`])
//! - resolves calls against user and builtin functions ([`MethodResolver`])
//! - runs the context conditions over a block ([`CheckerRegistry`])
//!
//! Findings are reported to a [`spl_core::DiagnosticSink`]; analysis never
//! stops at the first problem.

pub mod checks;
mod conversion;
mod expr;
mod overload;

pub use checks::{
    CheckContext, CheckerRegistry, ContextCondition, FunctionDoesNotExist, IllegalExpression,
    NodeKind, require_scope,
};
pub use conversion::{is_compatible, is_numeric, promote_numeric};
pub use expr::{Result, TypeCalculator, TypeComputation};
pub use overload::MethodResolver;
