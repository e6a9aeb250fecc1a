//! Visitor pattern for traversing the AST.
//!
//! This module provides a `Visitor` trait and corresponding `walk_*` functions
//! for traversing SPL blocks, statements and expressions in source order.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use spl_ast::{AstBuilder, CallExpr, Visitor, walk_call_expr};
//! use spl_core::Span;
//!
//! struct CallCounter {
//!     count: usize,
//! }
//!
//! impl Visitor for CallCounter {
//!     fn visit_call_expr(&mut self, call: &CallExpr<'_>) {
//!         self.count += 1;
//!         walk_call_expr(self, call);
//!     }
//! }
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let inner = b.call("random", &[], Span::point(1, 5), None);
//! let outer = b.call("exp", &[inner], Span::point(1, 1), None);
//!
//! let mut counter = CallCounter { count: 0 };
//! counter.visit_expr(&outer);
//! assert_eq!(counter.count, 2);
//! ```

use crate::expr::*;
use crate::stmt::*;

/// Visitor trait for traversing AST nodes.
///
/// The default implementations call the corresponding `walk_*` function to
/// continue traversal. Override any `visit_*` method to customize behavior
/// for specific node types.
pub trait Visitor: Sized {
    // === Blocks and statements ===

    fn visit_block(&mut self, block: &Block<'_>) {
        walk_block(self, block);
    }

    fn visit_stmt(&mut self, stmt: &Stmt<'_>) {
        walk_stmt(self, stmt);
    }

    fn visit_declaration(&mut self, decl: &Declaration<'_>) {
        walk_declaration(self, decl);
    }

    fn visit_assignment(&mut self, assign: &Assignment<'_>) {
        walk_assignment(self, assign);
    }

    fn visit_expr_stmt(&mut self, stmt: &ExprStmt<'_>) {
        walk_expr_stmt(self, stmt);
    }

    fn visit_if_stmt(&mut self, stmt: &IfStmt<'_>) {
        walk_if_stmt(self, stmt);
    }

    fn visit_if_clause(&mut self, clause: &IfClause<'_>) {
        walk_if_clause(self, clause);
    }

    fn visit_elif_clause(&mut self, clause: &ElifClause<'_>) {
        walk_elif_clause(self, clause);
    }

    fn visit_while_stmt(&mut self, stmt: &WhileStmt<'_>) {
        walk_while_stmt(self, stmt);
    }

    fn visit_for_stmt(&mut self, stmt: &ForStmt<'_>) {
        walk_for_stmt(self, stmt);
    }

    fn visit_return_stmt(&mut self, stmt: &ReturnStmt<'_>) {
        walk_return_stmt(self, stmt);
    }

    // === Expressions ===

    fn visit_expr(&mut self, expr: &Expr<'_>) {
        walk_expr(self, expr);
    }

    fn visit_literal(&mut self, _lit: &LiteralExpr<'_>) {}

    fn visit_ident(&mut self, _ident: &IdentExpr<'_>) {}

    fn visit_call_expr(&mut self, call: &CallExpr<'_>) {
        walk_call_expr(self, call);
    }

    fn visit_unary_expr(&mut self, expr: &UnaryExpr<'_>) {
        walk_unary_expr(self, expr);
    }

    fn visit_binary_expr(&mut self, expr: &BinaryExpr<'_>) {
        walk_binary_expr(self, expr);
    }

    fn visit_paren_expr(&mut self, expr: &ParenExpr<'_>) {
        walk_paren_expr(self, expr);
    }
}

// ============================================================================
// Walk functions
// ============================================================================

/// Walk every statement of a block in order.
pub fn walk_block<V: Visitor>(visitor: &mut V, block: &Block<'_>) {
    for stmt in block.stmts {
        visitor.visit_stmt(stmt);
    }
}

/// Dispatch a statement to its specific visit method.
pub fn walk_stmt<V: Visitor>(visitor: &mut V, stmt: &Stmt<'_>) {
    match stmt {
        Stmt::Declaration(decl) => visitor.visit_declaration(decl),
        Stmt::Assignment(assign) => visitor.visit_assignment(assign),
        Stmt::Expr(expr_stmt) => visitor.visit_expr_stmt(expr_stmt),
        Stmt::If(if_stmt) => visitor.visit_if_stmt(if_stmt),
        Stmt::While(while_stmt) => visitor.visit_while_stmt(while_stmt),
        Stmt::For(for_stmt) => visitor.visit_for_stmt(for_stmt),
        Stmt::Return(ret) => visitor.visit_return_stmt(ret),
    }
}

pub fn walk_declaration<V: Visitor>(visitor: &mut V, decl: &Declaration<'_>) {
    if let Some(init) = &decl.init {
        visitor.visit_expr(init);
    }
}

pub fn walk_assignment<V: Visitor>(visitor: &mut V, assign: &Assignment<'_>) {
    visitor.visit_expr(&assign.value);
}

pub fn walk_expr_stmt<V: Visitor>(visitor: &mut V, stmt: &ExprStmt<'_>) {
    visitor.visit_expr(&stmt.expr);
}

/// Walk an if statement: the `if` clause, each `elif` clause, then `else`.
pub fn walk_if_stmt<V: Visitor>(visitor: &mut V, stmt: &IfStmt<'_>) {
    visitor.visit_if_clause(&stmt.if_clause);
    for elif in stmt.elif_clauses {
        visitor.visit_elif_clause(elif);
    }
    if let Some(else_block) = stmt.else_block {
        visitor.visit_block(else_block);
    }
}

pub fn walk_if_clause<V: Visitor>(visitor: &mut V, clause: &IfClause<'_>) {
    visitor.visit_expr(&clause.condition);
    visitor.visit_block(clause.body);
}

pub fn walk_elif_clause<V: Visitor>(visitor: &mut V, clause: &ElifClause<'_>) {
    visitor.visit_expr(&clause.condition);
    visitor.visit_block(clause.body);
}

pub fn walk_while_stmt<V: Visitor>(visitor: &mut V, stmt: &WhileStmt<'_>) {
    visitor.visit_expr(&stmt.condition);
    visitor.visit_block(stmt.body);
}

/// Walk a for statement: bounds, step, then body.
pub fn walk_for_stmt<V: Visitor>(visitor: &mut V, stmt: &ForStmt<'_>) {
    visitor.visit_expr(&stmt.from);
    visitor.visit_expr(&stmt.to);
    if let Some(step) = &stmt.step {
        visitor.visit_expr(step);
    }
    visitor.visit_block(stmt.body);
}

pub fn walk_return_stmt<V: Visitor>(visitor: &mut V, stmt: &ReturnStmt<'_>) {
    if let Some(value) = &stmt.value {
        visitor.visit_expr(value);
    }
}

/// Dispatch an expression to its specific visit method.
pub fn walk_expr<V: Visitor>(visitor: &mut V, expr: &Expr<'_>) {
    match expr {
        Expr::Literal(lit) => visitor.visit_literal(lit),
        Expr::Ident(ident) => visitor.visit_ident(ident),
        Expr::Call(call) => visitor.visit_call_expr(call),
        Expr::Unary(unary) => visitor.visit_unary_expr(unary),
        Expr::Binary(binary) => visitor.visit_binary_expr(binary),
        Expr::Paren(paren) => visitor.visit_paren_expr(paren),
    }
}

pub fn walk_call_expr<V: Visitor>(visitor: &mut V, call: &CallExpr<'_>) {
    for arg in call.args {
        visitor.visit_expr(arg);
    }
}

pub fn walk_unary_expr<V: Visitor>(visitor: &mut V, expr: &UnaryExpr<'_>) {
    visitor.visit_expr(&expr.operand);
}

pub fn walk_binary_expr<V: Visitor>(visitor: &mut V, expr: &BinaryExpr<'_>) {
    visitor.visit_expr(&expr.left);
    visitor.visit_expr(&expr.right);
}

pub fn walk_paren_expr<V: Visitor>(visitor: &mut V, expr: &ParenExpr<'_>) {
    visitor.visit_expr(&expr.expr);
}
