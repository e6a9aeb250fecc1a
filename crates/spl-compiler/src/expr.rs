//! Expression type calculation.
//!
//! [`TypeCalculator::compute`] derives the type of an expression bottom-up.
//! There are two distinct non-success outcomes:
//!
//! - `Ok(TypeComputation::Indeterminate(_))`: a name could not be resolved
//!   (unknown variable, unresolvable call, unit algebra). Callers skip the
//!   check and warn.
//! - `Err(CompilationError)`: the expression is malformed (unknown unit
//!   suffix, operands an operator does not accept). Callers report it.

use std::fmt;

use spl_ast::{
    BinaryExpr, BinaryOp, CallExpr, Expr, LiteralExpr, LiteralKind, ScopeId, ScopeTree, UnaryExpr,
    UnaryOp,
};
use spl_core::{CompilationError, SplType};
use spl_registry::{FunctionRegistry, TypeRegistry};
use tracing::trace;

use crate::conversion::{is_compatible, is_numeric, promote_numeric};
use crate::overload::MethodResolver;

pub type Result<T> = std::result::Result<T, CompilationError>;

/// Outcome of typing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeComputation {
    /// The expression has this type.
    Known(SplType),
    /// The type cannot be determined; the payload says why.
    Indeterminate(String),
}

impl TypeComputation {
    pub fn indeterminate(reason: impl Into<String>) -> Self {
        TypeComputation::Indeterminate(reason.into())
    }

    pub fn into_known(self) -> Option<SplType> {
        match self {
            TypeComputation::Known(ty) => Some(ty),
            TypeComputation::Indeterminate(_) => None,
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, TypeComputation::Indeterminate(_))
    }
}

impl fmt::Display for TypeComputation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeComputation::Known(ty) => write!(f, "{}", ty),
            TypeComputation::Indeterminate(reason) => write!(f, "<indeterminate: {}>", reason),
        }
    }
}

/// Unwraps a known type or returns the indeterminate result to the caller.
macro_rules! known {
    ($computation:expr) => {
        match $computation? {
            TypeComputation::Known(ty) => ty,
            indeterminate => return Ok(indeterminate),
        }
    };
}

/// Computes expression types against the session registries.
#[derive(Debug, Clone, Copy)]
pub struct TypeCalculator<'a> {
    types: &'a TypeRegistry,
    resolver: MethodResolver<'a>,
}

impl<'a> TypeCalculator<'a> {
    pub fn new(types: &'a TypeRegistry, builtins: &'a FunctionRegistry) -> Self {
        Self {
            types,
            resolver: MethodResolver::new(types, builtins),
        }
    }

    pub fn resolver(&self) -> &MethodResolver<'a> {
        &self.resolver
    }

    /// Compute the type of `expr` as seen from `scope`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compute(&self, expr: &Expr<'_>, scopes: &ScopeTree, scope: ScopeId) -> Result<TypeComputation> {
        let result = match expr {
            Expr::Literal(lit) => self.literal(lit),
            Expr::Ident(ident) => Ok(match scopes.resolve_variable(scope, ident.name) {
                Some(var) => TypeComputation::Known(var.ty.clone()),
                None => TypeComputation::indeterminate(format!("unresolved variable '{}'", ident.name)),
            }),
            Expr::Call(call) => self.call(call, scopes, scope),
            Expr::Unary(unary) => self.unary(unary, scopes, scope),
            Expr::Binary(binary) => self.binary(binary, scopes, scope),
            Expr::Paren(paren) => self.compute(&paren.expr, scopes, scope),
        };
        trace!(expr = %expr, result = ?result, "computed type");
        result
    }

    fn literal(&self, lit: &LiteralExpr<'_>) -> Result<TypeComputation> {
        let ty = match (lit.kind, lit.unit) {
            (LiteralKind::Integer(_) | LiteralKind::Real(_), Some(unit)) => self
                .types
                .get(unit)
                .map_err(|e| CompilationError::from_registry(e, lit.span))?
                .clone(),
            (LiteralKind::Integer(_), None) => self.types.integer().clone(),
            (LiteralKind::Real(_), None) => self.types.real().clone(),
            (LiteralKind::Boolean(_), _) => self.types.boolean().clone(),
            (LiteralKind::String(_), _) => self.types.string().clone(),
        };
        Ok(TypeComputation::Known(ty))
    }

    fn call(&self, call: &CallExpr<'_>, scopes: &ScopeTree, scope: ScopeId) -> Result<TypeComputation> {
        let mut args = Vec::with_capacity(call.args.len());
        for arg in call.args {
            args.push(known!(self.compute(arg, scopes, scope)));
        }
        Ok(match self.resolver.resolve(call.callee, &args, scopes, scope) {
            Some(sig) => TypeComputation::Known(sig.return_type.clone()),
            None => TypeComputation::indeterminate(format!("unresolved function '{}'", call.callee)),
        })
    }

    fn unary(&self, unary: &UnaryExpr<'_>, scopes: &ScopeTree, scope: ScopeId) -> Result<TypeComputation> {
        let operand = known!(self.compute(&unary.operand, scopes, scope));
        let accepted = match unary.op {
            UnaryOp::Neg | UnaryOp::Plus => is_numeric(&operand),
            UnaryOp::LogicalNot => operand.is_boolean(),
        };
        if !accepted {
            return Err(CompilationError::InvalidOperation {
                message: format!("cannot apply unary '{}' to '{}'", unary.op, operand),
                span: unary.span,
            });
        }
        Ok(TypeComputation::Known(operand))
    }

    fn binary(&self, binary: &BinaryExpr<'_>, scopes: &ScopeTree, scope: ScopeId) -> Result<TypeComputation> {
        let left = known!(self.compute(&binary.left, scopes, scope));
        let right = known!(self.compute(&binary.right, scopes, scope));
        let op = binary.op;

        if op.is_arithmetic() {
            return self.arithmetic(binary, left, right);
        }

        let accepted = if op.is_relational() {
            promote_numeric(&left, &right).is_some()
        } else if op.is_equality() {
            is_compatible(&left, &right) || is_compatible(&right, &left)
        } else {
            left.is_boolean() && right.is_boolean()
        };
        if !accepted {
            return Err(invalid_operands(binary, &left, &right));
        }
        Ok(TypeComputation::Known(self.types.boolean().clone()))
    }

    fn arithmetic(&self, binary: &BinaryExpr<'_>, left: SplType, right: SplType) -> Result<TypeComputation> {
        if left.is_unit() && right.is_unit() {
            let same_unit_op = matches!(binary.op, BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mod);
            if left == right && same_unit_op {
                return Ok(TypeComputation::Known(left));
            }
            return Ok(TypeComputation::indeterminate(format!(
                "unit algebra '{} {} {}' is not supported",
                left, binary.op, right
            )));
        }
        if binary.op == BinaryOp::Add && left.is_string() && right.is_string() {
            return Ok(TypeComputation::Known(left));
        }
        match promote_numeric(&left, &right) {
            Some(ty) => Ok(TypeComputation::Known(ty)),
            None => Err(invalid_operands(binary, &left, &right)),
        }
    }
}

fn invalid_operands(binary: &BinaryExpr<'_>, left: &SplType, right: &SplType) -> CompilationError {
    CompilationError::InvalidOperation {
        message: format!(
            "cannot apply '{}' to operands of type '{}' and '{}'",
            binary.op, left, right
        ),
        span: binary.span,
    }
}
