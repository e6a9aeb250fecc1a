//! SPL abstract syntax tree.
//!
//! This crate provides the data types produced by the SPL front end and
//! consumed by semantic analysis:
//! - Arena-allocated expression and statement nodes
//! - The lexical [`ScopeTree`] attached by the symbol-table builder
//! - Visitor pattern for AST traversal
//! - An [`AstBuilder`] for assembling trees in a `bumpalo` arena
//!
//! Parsing and scope construction live outside this crate.

mod builder;
pub mod expr;
pub mod ops;
mod printer;
pub mod scope;
pub mod stmt;
pub mod visitor;

pub use builder::AstBuilder;
pub use expr::{
    BinaryExpr, CallExpr, Expr, IdentExpr, LiteralExpr, LiteralKind, ParenExpr, UnaryExpr,
};
pub use ops::{AssignOp, BinaryOp, UnaryOp};
pub use scope::{ScopeId, ScopeTree, Symbol, SymbolKind, VariableSymbol};
pub use stmt::{
    Assignment, Block, Declaration, DeclaredType, ElifClause, ExprStmt, ForStmt, Ident, IfClause,
    IfStmt, ReturnStmt, Stmt, WhileStmt,
};
pub use visitor::*;
