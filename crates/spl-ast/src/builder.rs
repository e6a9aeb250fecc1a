//! Arena-backed constructors for AST nodes.
//!
//! The symbol-table builder and tests use [`AstBuilder`] to assemble trees
//! without spelling out every node struct. All nodes live in the arena.

use bumpalo::Bump;
use spl_core::Span;

use crate::expr::*;
use crate::ops::{AssignOp, BinaryOp, UnaryOp};
use crate::scope::ScopeId;
use crate::stmt::*;

#[derive(Clone, Copy)]
pub struct AstBuilder<'ast> {
    arena: &'ast Bump,
}

impl<'ast> AstBuilder<'ast> {
    pub fn new(arena: &'ast Bump) -> Self {
        Self { arena }
    }

    pub fn arena(&self) -> &'ast Bump {
        self.arena
    }

    fn str(&self, s: &str) -> &'ast str {
        self.arena.alloc_str(s)
    }

    // === Expressions ===

    pub fn int(&self, value: i64, span: Span) -> Expr<'ast> {
        self.literal(LiteralKind::Integer(value), None, span)
    }

    pub fn real(&self, value: f64, span: Span) -> Expr<'ast> {
        self.literal(LiteralKind::Real(value), None, span)
    }

    pub fn boolean(&self, value: bool, span: Span) -> Expr<'ast> {
        self.literal(LiteralKind::Boolean(value), None, span)
    }

    pub fn string(&self, value: &str, span: Span) -> Expr<'ast> {
        let value = self.str(value);
        self.literal(LiteralKind::String(value), None, span)
    }

    /// Integer literal with a unit suffix, e.g. `10 ms`.
    pub fn int_with_unit(&self, value: i64, unit: &str, span: Span) -> Expr<'ast> {
        let unit = self.str(unit);
        self.literal(LiteralKind::Integer(value), Some(unit), span)
    }

    /// Real literal with a unit suffix, e.g. `-70.0 mV`.
    pub fn real_with_unit(&self, value: f64, unit: &str, span: Span) -> Expr<'ast> {
        let unit = self.str(unit);
        self.literal(LiteralKind::Real(value), Some(unit), span)
    }

    fn literal(&self, kind: LiteralKind<'ast>, unit: Option<&'ast str>, span: Span) -> Expr<'ast> {
        Expr::Literal(LiteralExpr { kind, unit, span })
    }

    pub fn ident(&self, name: &str, span: Span) -> Expr<'ast> {
        Expr::Ident(IdentExpr {
            name: self.str(name),
            span,
        })
    }

    pub fn call(
        &self,
        callee: &str,
        args: &[Expr<'ast>],
        span: Span,
        scope: Option<ScopeId>,
    ) -> Expr<'ast> {
        Expr::Call(self.arena.alloc(CallExpr {
            callee: self.str(callee),
            args: self.arena.alloc_slice_copy(args),
            span,
            scope,
        }))
    }

    pub fn unary(&self, op: UnaryOp, operand: Expr<'ast>, span: Span) -> Expr<'ast> {
        Expr::Unary(self.arena.alloc(UnaryExpr { op, operand, span }))
    }

    pub fn binary(&self, left: Expr<'ast>, op: BinaryOp, right: Expr<'ast>, span: Span) -> Expr<'ast> {
        Expr::Binary(self.arena.alloc(BinaryExpr {
            left,
            op,
            right,
            span,
        }))
    }

    pub fn paren(&self, expr: Expr<'ast>, span: Span) -> Expr<'ast> {
        Expr::Paren(self.arena.alloc(ParenExpr { expr, span }))
    }

    // === Statements ===

    pub fn named_type(&self, name: &str) -> DeclaredType<'ast> {
        DeclaredType::Named(self.str(name))
    }

    pub fn declaration(
        &self,
        vars: &[&str],
        ty: DeclaredType<'ast>,
        init: Option<Expr<'ast>>,
        span: Span,
        scope: Option<ScopeId>,
    ) -> Stmt<'ast> {
        let vars = self.arena.alloc_slice_fill_iter(vars.iter().map(|name| Ident {
            name: self.str(name),
            span,
        }));
        Stmt::Declaration(self.arena.alloc(Declaration {
            vars,
            ty,
            init,
            span,
            scope,
        }))
    }

    pub fn assignment(
        &self,
        target: &str,
        op: AssignOp,
        value: Expr<'ast>,
        span: Span,
        scope: Option<ScopeId>,
    ) -> Stmt<'ast> {
        Stmt::Assignment(self.arena.alloc(Assignment {
            target: Ident {
                name: self.str(target),
                span,
            },
            op,
            value,
            span,
            scope,
        }))
    }

    pub fn expr_stmt(&self, expr: Expr<'ast>, span: Span, scope: Option<ScopeId>) -> Stmt<'ast> {
        Stmt::Expr(ExprStmt { expr, span, scope })
    }

    pub fn if_clause(
        &self,
        condition: Expr<'ast>,
        body: &'ast Block<'ast>,
        span: Span,
        scope: Option<ScopeId>,
    ) -> IfClause<'ast> {
        IfClause {
            condition,
            body,
            span,
            scope,
        }
    }

    pub fn elif_clause(
        &self,
        condition: Expr<'ast>,
        body: &'ast Block<'ast>,
        span: Span,
        scope: Option<ScopeId>,
    ) -> ElifClause<'ast> {
        ElifClause {
            condition,
            body,
            span,
            scope,
        }
    }

    pub fn if_stmt(
        &self,
        if_clause: IfClause<'ast>,
        elif_clauses: &[ElifClause<'ast>],
        else_block: Option<&'ast Block<'ast>>,
    ) -> Stmt<'ast> {
        Stmt::If(self.arena.alloc(IfStmt {
            if_clause,
            elif_clauses: self.arena.alloc_slice_copy(elif_clauses),
            else_block,
        }))
    }

    pub fn while_stmt(
        &self,
        condition: Expr<'ast>,
        body: &'ast Block<'ast>,
        span: Span,
        scope: Option<ScopeId>,
    ) -> Stmt<'ast> {
        Stmt::While(self.arena.alloc(WhileStmt {
            condition,
            body,
            span,
            scope,
        }))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn for_stmt(
        &self,
        var: &str,
        from: Expr<'ast>,
        to: Expr<'ast>,
        step: Option<Expr<'ast>>,
        body: &'ast Block<'ast>,
        span: Span,
        scope: Option<ScopeId>,
    ) -> Stmt<'ast> {
        Stmt::For(self.arena.alloc(ForStmt {
            var: Ident {
                name: self.str(var),
                span,
            },
            from,
            to,
            step,
            body,
            span,
            scope,
        }))
    }

    pub fn return_stmt(&self, value: Option<Expr<'ast>>, span: Span, scope: Option<ScopeId>) -> Stmt<'ast> {
        Stmt::Return(ReturnStmt { value, span, scope })
    }

    pub fn block(&self, stmts: &[Stmt<'ast>], span: Span, scope: Option<ScopeId>) -> &'ast Block<'ast> {
        self.arena.alloc(Block {
            stmts: self.arena.alloc_slice_copy(stmts),
            span,
            scope,
        })
    }
}
