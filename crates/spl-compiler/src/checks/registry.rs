//! Ordered checker list and the traversal that drives it.

use spl_ast::{
    Assignment, Block, CallExpr, Declaration, ElifClause, ForStmt, IfClause, Visitor, WhileStmt,
    walk_assignment, walk_call_expr, walk_declaration, walk_elif_clause, walk_for_stmt,
    walk_if_clause, walk_while_stmt,
};
use tracing::instrument;

use super::{CheckContext, ContextCondition, FunctionDoesNotExist, IllegalExpression, NodeKind};

/// The fixed, ordered set of context conditions of a session.
///
/// Checker order decides the order of diagnostics for the same node.
pub struct CheckerRegistry {
    checkers: Vec<Box<dyn ContextCondition>>,
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for CheckerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.checkers.iter().map(|c| c.name()))
            .finish()
    }
}

impl CheckerRegistry {
    /// No checkers.
    pub fn empty() -> Self {
        Self {
            checkers: Vec::new(),
        }
    }

    /// `FUNCTION_DOES_NOT_EXIST` followed by `ILLEGAL_EXPRESSION`.
    pub fn standard() -> Self {
        Self::empty()
            .with_checker(FunctionDoesNotExist)
            .with_checker(IllegalExpression)
    }

    /// Append a checker; it runs after every checker registered before it.
    pub fn with_checker(mut self, checker: impl ContextCondition + 'static) -> Self {
        self.checkers.push(Box::new(checker));
        self
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Names of the registered checkers, in run order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checkers.iter().map(|c| c.name())
    }

    /// Check every node of `block` in a single traversal.
    #[instrument(skip_all, fields(checkers = self.checkers.len()))]
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn run(&self, block: &Block<'_>, cx: &mut CheckContext<'_>) {
        let mut dispatch = Dispatch { registry: self, cx };
        dispatch.visit_block(block);
    }

    fn for_kind(&self, kind: NodeKind) -> impl Iterator<Item = &dyn ContextCondition> {
        self.checkers
            .iter()
            .map(|c| c.as_ref())
            .filter(move |c| c.handles(kind))
    }
}

/// Routes each visited node to the checkers subscribed to its kind, then
/// continues into its children.
struct Dispatch<'r, 'x, 'c> {
    registry: &'r CheckerRegistry,
    cx: &'x mut CheckContext<'c>,
}

impl Visitor for Dispatch<'_, '_, '_> {
    fn visit_call_expr(&mut self, call: &CallExpr<'_>) {
        for checker in self.registry.for_kind(NodeKind::FunctionCall) {
            checker.check_function_call(call, self.cx);
        }
        walk_call_expr(self, call);
    }

    fn visit_declaration(&mut self, decl: &Declaration<'_>) {
        for checker in self.registry.for_kind(NodeKind::Declaration) {
            checker.check_declaration(decl, self.cx);
        }
        walk_declaration(self, decl);
    }

    fn visit_assignment(&mut self, assign: &Assignment<'_>) {
        for checker in self.registry.for_kind(NodeKind::Assignment) {
            checker.check_assignment(assign, self.cx);
        }
        walk_assignment(self, assign);
    }

    fn visit_if_clause(&mut self, clause: &IfClause<'_>) {
        for checker in self.registry.for_kind(NodeKind::IfClause) {
            checker.check_if_clause(clause, self.cx);
        }
        walk_if_clause(self, clause);
    }

    fn visit_elif_clause(&mut self, clause: &ElifClause<'_>) {
        for checker in self.registry.for_kind(NodeKind::ElifClause) {
            checker.check_elif_clause(clause, self.cx);
        }
        walk_elif_clause(self, clause);
    }

    fn visit_while_stmt(&mut self, stmt: &WhileStmt<'_>) {
        for checker in self.registry.for_kind(NodeKind::WhileStmt) {
            checker.check_while_stmt(stmt, self.cx);
        }
        walk_while_stmt(self, stmt);
    }

    fn visit_for_stmt(&mut self, stmt: &ForStmt<'_>) {
        for checker in self.registry.for_kind(NodeKind::ForStmt) {
            checker.check_for_stmt(stmt, self.cx);
        }
        walk_for_stmt(self, stmt);
    }
}
