//! Source-like rendering of expressions, used in diagnostic messages.

use std::fmt;

use crate::expr::*;

impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => write!(f, "{}", lit),
            Expr::Ident(ident) => f.write_str(ident.name),
            Expr::Call(call) => write!(f, "{}", call),
            Expr::Unary(unary) => write!(f, "{}{}", unary.op, unary.operand),
            Expr::Binary(binary) => {
                write!(f, "{} {} {}", binary.left, binary.op, binary.right)
            }
            Expr::Paren(paren) => write!(f, "({})", paren.expr),
        }
    }
}

impl fmt::Display for LiteralExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LiteralKind::Integer(v) => write!(f, "{}", v)?,
            // `{:?}` keeps the fractional part of whole reals (`3.0`)
            LiteralKind::Real(v) => write!(f, "{:?}", v)?,
            LiteralKind::Boolean(v) => write!(f, "{}", v)?,
            LiteralKind::String(s) => write!(f, "\"{}\"", s)?,
        }
        if let Some(unit) = self.unit {
            write!(f, " {}", unit)?;
        }
        Ok(())
    }
}

impl fmt::Display for CallExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.callee)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}
