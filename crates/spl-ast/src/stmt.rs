//! Statement AST nodes for SPL.
//!
//! Every statement node that a context condition inspects carries the
//! `scope` attached by the symbol-table builder.

use spl_core::Span;

use crate::expr::Expr;
use crate::ops::AssignOp;
use crate::scope::ScopeId;

/// A statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    /// Variable declaration (`real V_m mV = -70 mV`)
    Declaration(&'ast Declaration<'ast>),
    /// Assignment (`x += 1`)
    Assignment(&'ast Assignment<'ast>),
    /// Expression statement, usually a call (`println()`)
    Expr(ExprStmt<'ast>),
    /// `if ... elif ... else ... end`
    If(&'ast IfStmt<'ast>),
    /// `while ... end`
    While(&'ast WhileStmt<'ast>),
    /// `for i in a ... b step s ... end`
    For(&'ast ForStmt<'ast>),
    /// `return [expr]`
    Return(ReturnStmt<'ast>),
}

impl<'ast> Stmt<'ast> {
    pub fn span(&self) -> Span {
        match self {
            Self::Declaration(s) => s.span,
            Self::Assignment(s) => s.span,
            Self::Expr(s) => s.span,
            Self::If(s) => s.if_clause.span,
            Self::While(s) => s.span,
            Self::For(s) => s.span,
            Self::Return(s) => s.span,
        }
    }
}

/// A declared variable name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ident<'ast> {
    pub name: &'ast str,
    pub span: Span,
}

/// The declared type of a variable as written in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType<'ast> {
    /// The dedicated `boolean` keyword form.
    Boolean,
    /// Any other type name, looked up in the type registry.
    Named(&'ast str),
}

/// Variable declaration: `integer a, b = 3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Declaration<'ast> {
    pub vars: &'ast [Ident<'ast>],
    pub ty: DeclaredType<'ast>,
    pub init: Option<Expr<'ast>>,
    pub span: Span,
    pub scope: Option<ScopeId>,
}

/// Assignment: `target op value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment<'ast> {
    pub target: Ident<'ast>,
    pub op: AssignOp,
    pub value: Expr<'ast>,
    pub span: Span,
    pub scope: Option<ScopeId>,
}

/// An expression evaluated for its effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExprStmt<'ast> {
    pub expr: Expr<'ast>,
    pub span: Span,
    pub scope: Option<ScopeId>,
}

/// `if` with any number of `elif` clauses and an optional `else`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfStmt<'ast> {
    pub if_clause: IfClause<'ast>,
    pub elif_clauses: &'ast [ElifClause<'ast>],
    pub else_block: Option<&'ast Block<'ast>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfClause<'ast> {
    pub condition: Expr<'ast>,
    pub body: &'ast Block<'ast>,
    pub span: Span,
    pub scope: Option<ScopeId>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElifClause<'ast> {
    pub condition: Expr<'ast>,
    pub body: &'ast Block<'ast>,
    pub span: Span,
    pub scope: Option<ScopeId>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhileStmt<'ast> {
    pub condition: Expr<'ast>,
    pub body: &'ast Block<'ast>,
    pub span: Span,
    pub scope: Option<ScopeId>,
}

/// `for var in from ... to step s`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForStmt<'ast> {
    pub var: Ident<'ast>,
    pub from: Expr<'ast>,
    pub to: Expr<'ast>,
    pub step: Option<Expr<'ast>>,
    pub body: &'ast Block<'ast>,
    pub span: Span,
    pub scope: Option<ScopeId>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnStmt<'ast> {
    pub value: Option<Expr<'ast>>,
    pub span: Span,
    pub scope: Option<ScopeId>,
}

/// A sequence of statements; the root of a compilation unit is a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<'ast> {
    pub stmts: &'ast [Stmt<'ast>],
    pub span: Span,
    pub scope: Option<ScopeId>,
}

impl<'ast> Block<'ast> {
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}
