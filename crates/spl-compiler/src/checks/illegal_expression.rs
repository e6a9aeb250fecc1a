//! `ILLEGAL_EXPRESSION`: initializers must fit their declared type and
//! conditions must be boolean.

use spl_ast::{
    Assignment, Declaration, DeclaredType, ElifClause, Expr, ForStmt, IfClause, ScopeId, WhileStmt,
};
use spl_core::{Diagnostic, DiagnosticCode, RegistryError, Span, SplType};
use tracing::debug;

use super::{CheckContext, ContextCondition, NodeKind, require_scope};
use crate::conversion::is_compatible;
use crate::expr::TypeComputation;

#[derive(Debug, Default, Clone, Copy)]
pub struct IllegalExpression;

/// Which clause a condition belongs to; selects the message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clause {
    If,
    Elif,
    While,
}

impl Clause {
    fn keyword(self) -> &'static str {
        match self {
            Clause::If => "if",
            Clause::Elif => "elif",
            Clause::While => "while",
        }
    }

    /// `elif` conditions are reported as part of the `if` statement.
    fn statement(self) -> &'static str {
        match self {
            Clause::If | Clause::Elif => "an if statement",
            Clause::While => "a while statement",
        }
    }
}

impl IllegalExpression {
    fn check_condition(
        &self,
        clause: Clause,
        condition: &Expr<'_>,
        scope: ScopeId,
        span: Span,
        cx: &mut CheckContext<'_>,
    ) {
        match cx.compute(condition, scope) {
            Ok(TypeComputation::Known(ty)) => {
                if !ty.is_boolean() {
                    cx.report(Diagnostic::error(
                        DiagnosticCode::IllegalExpression,
                        format!(
                            "Cannot use non boolean expression in {} @{}",
                            clause.statement(),
                            span
                        ),
                        span,
                    ));
                }
            }
            Ok(TypeComputation::Indeterminate(reason)) => {
                Self::report_unusable(clause, &reason, span, cx);
            }
            Err(err) => Self::report_unusable(clause, &err.to_string(), span, cx),
        }
    }

    fn report_unusable(clause: Clause, reason: &str, span: Span, cx: &mut CheckContext<'_>) {
        cx.report(Diagnostic::error(
            DiagnosticCode::IllegalExpression,
            format!(
                "Cannot use the expression in the {} clause. {} @{}",
                clause.keyword(),
                reason,
                span
            ),
            span,
        ));
    }

    fn declared_type(
        decl: &Declaration<'_>,
        cx: &CheckContext<'_>,
    ) -> Result<SplType, RegistryError> {
        match decl.ty {
            DeclaredType::Boolean => Ok(cx.types.boolean().clone()),
            DeclaredType::Named(name) => cx.types.get(name).cloned(),
        }
    }
}

impl ContextCondition for IllegalExpression {
    fn name(&self) -> &'static str {
        "illegal-expression"
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[
            NodeKind::Declaration,
            NodeKind::IfClause,
            NodeKind::ElifClause,
            NodeKind::WhileStmt,
            NodeKind::Assignment,
            NodeKind::ForStmt,
        ]
    }

    fn check_declaration(&self, decl: &Declaration<'_>, cx: &mut CheckContext<'_>) {
        let scope = require_scope(decl.scope);
        let Some(init) = &decl.init else {
            return;
        };
        // All variables of one declaration share the declared type.
        let var = decl.vars.first().map(|v| v.name).unwrap_or_default();

        let failure = |reason: String| {
            Diagnostic::error(
                DiagnosticCode::IllegalExpression,
                format!(
                    "Cannot determine the type of the initializer expression at {} Reason: {}",
                    decl.span, reason
                ),
                decl.span,
            )
        };

        let declared = match Self::declared_type(decl, cx) {
            Ok(ty) => ty,
            Err(err) => {
                cx.report(failure(err.to_string()));
                return;
            }
        };

        match cx.compute(init, scope) {
            Ok(TypeComputation::Known(init_ty)) => {
                if !is_compatible(&declared, &init_ty) {
                    cx.report(Diagnostic::error(
                        DiagnosticCode::IllegalExpression,
                        format!(
                            "Cannot initialize variable with an expression of type: {} with the type {} @{}",
                            var, init_ty, decl.span
                        ),
                        decl.span,
                    ));
                }
            }
            Ok(TypeComputation::Indeterminate(reason)) => cx.report(failure(reason)),
            Err(err) => cx.report(failure(err.to_string())),
        }
    }

    fn check_if_clause(&self, clause: &IfClause<'_>, cx: &mut CheckContext<'_>) {
        let scope = require_scope(clause.scope);
        self.check_condition(Clause::If, &clause.condition, scope, clause.span, cx);
    }

    fn check_elif_clause(&self, clause: &ElifClause<'_>, cx: &mut CheckContext<'_>) {
        let scope = require_scope(clause.scope);
        self.check_condition(Clause::Elif, &clause.condition, scope, clause.span, cx);
    }

    fn check_while_stmt(&self, stmt: &WhileStmt<'_>, cx: &mut CheckContext<'_>) {
        let scope = require_scope(stmt.scope);
        self.check_condition(Clause::While, &stmt.condition, scope, stmt.span, cx);
    }

    fn check_assignment(&self, assign: &Assignment<'_>, _cx: &mut CheckContext<'_>) {
        debug!(variable = assign.target.name, at = %assign.span, "assignment not checked");
    }

    fn check_for_stmt(&self, stmt: &ForStmt<'_>, _cx: &mut CheckContext<'_>) {
        debug!(var = stmt.var.name, at = %stmt.span, "for loop not checked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;
    use spl_ast::{AssignOp, AstBuilder, BinaryOp, ScopeTree, Stmt};
    use spl_core::{Diagnostics, Severity};
    use spl_registry::{FunctionRegistry, TypeRegistry};

    struct Harness {
        types: TypeRegistry,
        builtins: FunctionRegistry,
        scopes: ScopeTree,
    }

    impl Harness {
        fn new() -> Self {
            let types = TypeRegistry::builder().unit("mV").build().unwrap();
            let builtins = FunctionRegistry::builtins(&types).unwrap();
            Self {
                types,
                builtins,
                scopes: ScopeTree::new(),
            }
        }

        fn root(&self) -> Option<ScopeId> {
            Some(self.scopes.root())
        }

        fn check(&self, stmt: Stmt<'_>) -> Diagnostics {
            let mut log = Diagnostics::new();
            let mut cx = CheckContext::new(&self.types, &self.builtins, &self.scopes, &mut log);
            match stmt {
                Stmt::Declaration(d) => IllegalExpression.check_declaration(d, &mut cx),
                Stmt::If(s) => {
                    IllegalExpression.check_if_clause(&s.if_clause, &mut cx);
                    for elif in s.elif_clauses {
                        IllegalExpression.check_elif_clause(elif, &mut cx);
                    }
                }
                Stmt::While(s) => IllegalExpression.check_while_stmt(s, &mut cx),
                Stmt::Assignment(a) => IllegalExpression.check_assignment(a, &mut cx),
                Stmt::For(f) => IllegalExpression.check_for_stmt(f, &mut cx),
                other => panic!("unexpected {:?}", other),
            }
            log
        }
    }

    #[test]
    fn real_accepts_integer_initializer() {
        let h = Harness::new();
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let decl = b.declaration(&["x"], b.named_type("real"), Some(b.int(3, Span::point(1, 10))), Span::point(1, 1), h.root());
        assert!(h.check(decl).is_empty());
    }

    #[test]
    fn integer_rejects_real_initializer() {
        let h = Harness::new();
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let decl = b.declaration(&["x"], b.named_type("integer"), Some(b.real(3.0, Span::point(2, 13))), Span::point(2, 1), h.root());

        let log = h.check(decl);
        assert_eq!(log.error_count(), 1);
        let diag = log.iter().next().unwrap();
        assert_eq!(diag.span, Span::point(2, 1));
        assert_eq!(
            diag.message,
            "Cannot initialize variable with an expression of type: x with the type real @2:1"
        );
    }

    #[test]
    fn units_and_numbers_initialize_each_other() {
        let h = Harness::new();
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let sp = Span::point(1, 1);
        let unit_from_real = b.declaration(&["V_m"], b.named_type("mV"), Some(b.real(-70.0, sp)), sp, h.root());
        let real_from_unit = b.declaration(&["v"], b.named_type("real"), Some(b.int_with_unit(1, "mV", sp)), sp, h.root());
        let int_from_unit = b.declaration(&["i"], b.named_type("integer"), Some(b.int_with_unit(1, "mV", sp)), sp, h.root());
        assert!(h.check(unit_from_real).is_empty());
        assert!(h.check(real_from_unit).is_empty());
        assert!(h.check(int_from_unit).is_empty());
    }

    #[test]
    fn boolean_keyword_form() {
        let h = Harness::new();
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let sp = Span::point(1, 1);
        let ok = b.declaration(&["flag"], DeclaredType::Boolean, Some(b.boolean(true, sp)), sp, h.root());
        let bad = b.declaration(&["flag"], DeclaredType::Boolean, Some(b.int(1, sp)), sp, h.root());
        assert!(h.check(ok).is_empty());
        assert_eq!(h.check(bad).error_count(), 1);
    }

    #[test]
    fn unknown_declared_type_fails() {
        let h = Harness::new();
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let decl = b.declaration(&["g"], b.named_type("nS"), Some(b.int(1, Span::point(4, 9))), Span::point(4, 1), h.root());
        let log = h.check(decl);
        assert_eq!(
            log.iter().next().unwrap().message,
            "Cannot determine the type of the initializer expression at 4:1 Reason: unknown type 'nS'"
        );
    }

    #[test]
    fn calculator_failure_is_reported() {
        let h = Harness::new();
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let sp = Span::point(5, 1);
        let bad = b.binary(b.boolean(true, sp), BinaryOp::Mul, b.int(2, sp), Span::point(5, 12));
        let log = h.check(b.declaration(&["x"], b.named_type("integer"), Some(bad), sp, h.root()));
        assert_eq!(log.error_count(), 1);
        assert!(log.iter().next().unwrap().message.starts_with(
            "Cannot determine the type of the initializer expression at 5:1 Reason: at 5:12:"
        ));
    }

    #[test]
    fn undeclared_initializer_is_an_error() {
        let h = Harness::new();
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let sp = Span::point(7, 1);
        let log = h.check(b.declaration(&["x"], b.named_type("real"), Some(b.ident("ghost", sp)), sp, h.root()));
        assert_eq!(log.error_count(), 1);
        assert_eq!(log.warning_count(), 0);
        assert_eq!(
            log.iter().next().unwrap().message,
            "Cannot determine the type of the initializer expression at 7:1 Reason: unresolved variable 'ghost'"
        );
    }

    #[test]
    fn declaration_without_initializer_is_silent() {
        let h = Harness::new();
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let sp = Span::point(1, 1);
        assert!(h.check(b.declaration(&["x"], b.named_type("nS"), None, sp, h.root())).is_empty());
    }

    #[test]
    fn conditions_must_be_boolean() {
        let h = Harness::new();
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let sp = Span::point(1, 1);
        let body = b.block(&[], sp, h.root());

        let if_int = b.if_stmt(b.if_clause(b.int(5, sp), body, Span::point(3, 1), h.root()), &[], None);
        let log = h.check(if_int);
        assert_eq!(log.error_count(), 1);
        assert_eq!(
            log.iter().next().unwrap().message,
            "Cannot use non boolean expression in an if statement @3:1"
        );

        let elif = b.elif_clause(b.real(1.0, sp), body, Span::point(4, 1), h.root());
        let if_elif = b.if_stmt(b.if_clause(b.boolean(true, sp), body, sp, h.root()), &[elif], None);
        let log = h.check(if_elif);
        assert_eq!(log.error_count(), 1);
        assert_eq!(log.iter().next().unwrap().span, Span::point(4, 1));

        let while_unit = b.while_stmt(b.int_with_unit(1, "mV", sp), body, Span::point(6, 1), h.root());
        assert_eq!(
            h.check(while_unit).iter().next().unwrap().message,
            "Cannot use non boolean expression in a while statement @6:1"
        );

        let cmp = b.binary(b.int(1, sp), BinaryOp::Less, b.real(2.0, sp), sp);
        assert!(h.check(b.while_stmt(cmp, body, sp, h.root())).is_empty());
    }

    #[test]
    fn failing_condition_names_clause() {
        let h = Harness::new();
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let sp = Span::point(2, 1);
        let body = b.block(&[], sp, h.root());
        let bad = b.binary(b.string("a", sp), BinaryOp::LogicalOr, b.boolean(true, sp), sp);
        let log = h.check(b.while_stmt(bad, body, sp, h.root()));
        let msg = &log.iter().next().unwrap().message;
        assert!(msg.starts_with("Cannot use the expression in the while clause. "));
        assert!(msg.ends_with("@2:1"));
    }

    #[test]
    fn undeclared_condition_is_an_error() {
        let h = Harness::new();
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let sp = Span::point(3, 1);
        let body = b.block(&[], sp, h.root());

        let log = h.check(b.while_stmt(b.ident("ghost", sp), body, sp, h.root()));
        assert_eq!(log.error_count(), 1);
        let diag = log.iter().next().unwrap();
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(
            diag.message,
            "Cannot use the expression in the while clause. unresolved variable 'ghost' @3:1"
        );

        let elif = b.elif_clause(b.ident("ghost", sp), body, Span::point(4, 1), h.root());
        let if_stmt = b.if_stmt(b.if_clause(b.ident("ghost", sp), body, sp, h.root()), &[elif], None);
        let log = h.check(if_stmt);
        assert_eq!(log.error_count(), 2);
        assert!(log.iter().any(|d| d.message.starts_with("Cannot use the expression in the elif clause.")));
    }

    #[test]
    fn assignment_and_for_are_not_checked() {
        let h = Harness::new();
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let sp = Span::point(1, 1);
        let body = b.block(&[], sp, h.root());
        let assign = b.assignment("x", AssignOp::Assign, b.string("oops", sp), sp, h.root());
        let for_loop = b.for_stmt("i", b.string("a", sp), b.boolean(false, sp), None, body, sp, h.root());
        assert!(h.check(assign).is_empty());
        assert!(h.check(for_loop).is_empty());
    }
}
