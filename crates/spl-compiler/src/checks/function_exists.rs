//! `FUNCTION_DOES_NOT_EXIST`: every call must resolve to exactly one
//! user or builtin function.

use spl_ast::CallExpr;
use spl_core::{Diagnostic, DiagnosticCode};

use super::{CheckContext, ContextCondition, NodeKind, require_scope};
use crate::expr::TypeComputation;

#[derive(Debug, Default, Clone, Copy)]
pub struct FunctionDoesNotExist;

impl ContextCondition for FunctionDoesNotExist {
    fn name(&self) -> &'static str {
        "function-does-not-exist"
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::FunctionCall]
    }

    fn check_function_call(&self, call: &CallExpr<'_>, cx: &mut CheckContext<'_>) {
        let scope = require_scope(call.scope);

        let mut arg_types = Vec::with_capacity(call.args.len());
        for arg in call.args {
            match cx.compute(arg, scope) {
                Ok(TypeComputation::Known(ty)) => arg_types.push(ty),
                Ok(TypeComputation::Indeterminate(_)) | Err(_) => {
                    cx.report(Diagnostic::warning(
                        DiagnosticCode::FunctionDoesNotExist,
                        format!("Cannot compute the type: {} : {}", arg, arg.span()),
                        arg.span(),
                    ));
                    return;
                }
            }
        }

        let resolved = cx
            .calculator
            .resolver()
            .resolve(call.callee, &arg_types, cx.scopes, scope)
            .is_some();
        if !resolved {
            let signature = arg_types
                .iter()
                .map(|ty| ty.name())
                .collect::<Vec<_>>()
                .join(",");
            cx.report(Diagnostic::error(
                DiagnosticCode::FunctionDoesNotExist,
                format!(
                    "The function '{}' is not defined with the signature '{}'",
                    call.callee, signature
                ),
                call.span,
            ));
        }
    }
}
