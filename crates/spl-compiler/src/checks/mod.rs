//! Context conditions: semantic checks over single AST nodes.
//!
//! Each checker implements [`ContextCondition`]: it declares the
//! [`NodeKind`]s it handles and overrides the matching `check_*` function.
//! The [`CheckerRegistry`] walks a block once and dispatches every node to
//! the checkers that declared its kind, in registration order.
//!
//! Checkers never fail. Findings go to the [`DiagnosticSink`] held by the
//! [`CheckContext`].

mod function_exists;
mod illegal_expression;
mod registry;

pub use function_exists::FunctionDoesNotExist;
pub use illegal_expression::IllegalExpression;
pub use registry::CheckerRegistry;

use spl_ast::{
    Assignment, CallExpr, Declaration, ElifClause, Expr, ForStmt, IfClause, ScopeId, ScopeTree,
    WhileStmt,
};
use spl_core::{Diagnostic, DiagnosticSink, Severity};
use spl_registry::{FunctionRegistry, TypeRegistry};
use tracing::warn;

use crate::expr::{Result, TypeCalculator, TypeComputation};

/// AST node kinds a context condition can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    FunctionCall,
    Declaration,
    Assignment,
    IfClause,
    ElifClause,
    WhileStmt,
    ForStmt,
}

/// Everything a checker may consult while checking one node.
pub struct CheckContext<'c> {
    pub types: &'c TypeRegistry,
    pub calculator: TypeCalculator<'c>,
    pub scopes: &'c ScopeTree,
    sink: &'c mut dyn DiagnosticSink,
}

impl<'c> CheckContext<'c> {
    pub fn new(
        types: &'c TypeRegistry,
        builtins: &'c FunctionRegistry,
        scopes: &'c ScopeTree,
        sink: &'c mut dyn DiagnosticSink,
    ) -> Self {
        Self {
            types,
            calculator: TypeCalculator::new(types, builtins),
            scopes,
            sink,
        }
    }

    /// Report a finding. Warnings are mirrored to the log.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity == Severity::Warning {
            warn!(code = %diagnostic.code, at = %diagnostic.span, "{}", diagnostic.message);
        }
        self.sink.report(diagnostic);
    }

    /// Type `expr` as seen from `scope`.
    pub fn compute(&self, expr: &Expr<'_>, scope: ScopeId) -> Result<TypeComputation> {
        self.calculator.compute(expr, self.scopes, scope)
    }
}

/// The scope attached to a node by the symbol-table builder.
///
/// # Panics
///
/// Panics if the node has none: running checkers on an unscoped tree is a
/// caller bug, not a model error.
#[track_caller]
pub fn require_scope(scope: Option<ScopeId>) -> ScopeId {
    match scope {
        Some(scope) => scope,
        None => panic!("No scope assigned. Please, run symboltable creator."),
    }
}

/// A semantic check over one or more node kinds.
///
/// Only the functions for kinds listed in [`node_kinds`](Self::node_kinds)
/// are invoked; all default to doing nothing.
pub trait ContextCondition: Send + Sync {
    /// Stable identifier, used in logs.
    fn name(&self) -> &'static str;

    fn node_kinds(&self) -> &'static [NodeKind];

    fn handles(&self, kind: NodeKind) -> bool {
        self.node_kinds().contains(&kind)
    }

    fn check_function_call(&self, _call: &CallExpr<'_>, _cx: &mut CheckContext<'_>) {}

    fn check_declaration(&self, _decl: &Declaration<'_>, _cx: &mut CheckContext<'_>) {}

    fn check_assignment(&self, _assign: &Assignment<'_>, _cx: &mut CheckContext<'_>) {}

    fn check_if_clause(&self, _clause: &IfClause<'_>, _cx: &mut CheckContext<'_>) {}

    fn check_elif_clause(&self, _clause: &ElifClause<'_>, _cx: &mut CheckContext<'_>) {}

    fn check_while_stmt(&self, _stmt: &WhileStmt<'_>, _cx: &mut CheckContext<'_>) {}

    fn check_for_stmt(&self, _stmt: &ForStmt<'_>, _cx: &mut CheckContext<'_>) {}
}
