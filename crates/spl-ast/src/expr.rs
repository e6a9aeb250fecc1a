//! Expression AST nodes for SPL.
//!
//! Nodes are arena-allocated and `Copy`; children are `&'ast` references
//! into the same arena.

use spl_core::Span;

use crate::ops::{BinaryOp, UnaryOp};
use crate::scope::ScopeId;

/// An expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Literal value, optionally with a unit suffix (`10 mV`)
    Literal(LiteralExpr<'ast>),
    /// Variable reference
    Ident(IdentExpr<'ast>),
    /// Function call
    Call(&'ast CallExpr<'ast>),
    /// Unary prefix operation
    Unary(&'ast UnaryExpr<'ast>),
    /// Binary operation
    Binary(&'ast BinaryExpr<'ast>),
    /// Parenthesized expression
    Paren(&'ast ParenExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    /// Get the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(e) => e.span,
            Self::Ident(e) => e.span,
            Self::Call(e) => e.span,
            Self::Unary(e) => e.span,
            Self::Binary(e) => e.span,
            Self::Paren(e) => e.span,
        }
    }
}

/// A literal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralExpr<'ast> {
    pub kind: LiteralKind<'ast>,
    /// Unit suffix of a numeric literal, e.g. `mV` in `-70 mV`
    pub unit: Option<&'ast str>,
    pub span: Span,
}

/// The kind of literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralKind<'ast> {
    Integer(i64),
    Real(f64),
    Boolean(bool),
    String(&'ast str),
}

/// A variable reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentExpr<'ast> {
    pub name: &'ast str,
    pub span: Span,
}

/// A function call, e.g. `Time.steps(t_ref)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    /// Callee name, possibly dotted (`Logger.info`)
    pub callee: &'ast str,
    pub args: &'ast [Expr<'ast>],
    pub span: Span,
    /// Enclosing scope, attached by the symbol-table builder
    pub scope: Option<ScopeId>,
}

/// A unary prefix operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpr<'ast> {
    pub op: UnaryOp,
    pub operand: Expr<'ast>,
    pub span: Span,
}

/// A binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    pub left: Expr<'ast>,
    pub op: BinaryOp,
    pub right: Expr<'ast>,
    pub span: Span,
}

/// A parenthesized expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParenExpr<'ast> {
    pub expr: Expr<'ast>,
    pub span: Span,
}
