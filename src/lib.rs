//! Static semantic analysis for SPL, the procedural sub-language of NESTML.
//!
//! - [`Context`]: one analysis session (model units, builtins, checkers)
//! - [`Unit`]: one scoped block checked against a context
//! - [`CodeGenerator`]: the hand-off to target code generation
//!
//! The AST, registries and checkers live in the `spl-*` crates and are
//! re-exported here.

mod codegen;
mod context;
mod unit;

pub use codegen::{
    ASSIGNMENT_TEMPLATE, BLOCK_TEMPLATE, CodeGenerator, DECLARATION_TEMPLATE, GenerateError,
};
pub use context::{Context, ContextBuilder, ContextError};
pub use unit::{Unit, UnitError};

pub use spl_ast::{
    AssignOp, AstBuilder, BinaryOp, Block, DeclaredType, Expr, ScopeId, ScopeTree, Stmt, UnaryOp,
};
pub use spl_compiler::{
    CheckContext, CheckerRegistry, ContextCondition, MethodResolver, NodeKind, TypeCalculator,
    TypeComputation, is_compatible,
};
pub use spl_core::{
    Diagnostic, DiagnosticCode, DiagnosticSink, Diagnostics, FunctionSignature, Severity, Span,
    SplType, TypeKind,
};
pub use spl_registry::{FunctionRegistry, TypeRegistry};
