//! Integration tests for SPL analysis using Unit as the entry point.
//!
//! Each test assembles a scoped block with `AstBuilder`, the way the
//! symbol-table builder would hand it over, and checks the diagnostics.

use bumpalo::Bump;
use spl::{
    AstBuilder, BinaryOp, Block, Context, DeclaredType, DiagnosticCode, Diagnostics,
    FunctionSignature, ScopeTree, Severity, Span, SplType, Stmt,
};
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn context() -> Arc<Context> {
    init_tracing();
    Arc::new(
        Context::builder()
            .with_units(["mV", "pA"])
            .build()
            .unwrap(),
    )
}

fn analyze(ctx: &Arc<Context>, block: &Block<'_>, scopes: &ScopeTree) -> Diagnostics {
    let mut unit = ctx.create_unit();
    unit.analyze(block, scopes).clone()
}

fn at(line: u32, col: u32) -> Span {
    Span::point(line, col)
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn test_real_initialized_with_integer() {
    // real x = 3
    let ctx = context();
    let scopes = ScopeTree::new();
    let root = Some(scopes.root());
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let decl = b.declaration(&["x"], b.named_type("real"), Some(b.int(3, at(1, 10))), at(1, 1), root);
    let block = b.block(&[decl], at(1, 1), root);

    assert!(analyze(&ctx, block, &scopes).is_empty());
}

#[test]
fn test_integer_initialized_with_real() {
    // integer x = 3.0
    let ctx = context();
    let scopes = ScopeTree::new();
    let root = Some(scopes.root());
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let decl = b.declaration(&["x"], b.named_type("integer"), Some(b.real(3.0, at(1, 13))), at(1, 1), root);
    let block = b.block(&[decl], at(1, 1), root);

    let log = analyze(&ctx, block, &scopes);
    assert_eq!(log.count(), 1);
    let diag = log.iter().next().unwrap();
    assert_eq!(diag.code, DiagnosticCode::IllegalExpression);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.span, at(1, 1));
}

#[test]
fn test_non_boolean_if_condition() {
    // if 5: ... end
    let ctx = context();
    let scopes = ScopeTree::new();
    let root = Some(scopes.root());
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let body = b.block(&[b.expr_stmt(b.call("println", &[], at(2, 3), root), at(2, 3), root)], at(2, 3), root);
    let if_stmt = b.if_stmt(b.if_clause(b.int(5, at(1, 4)), body, at(1, 1), root), &[], None);
    let block = b.block(&[if_stmt], at(1, 1), root);

    let log = analyze(&ctx, block, &scopes);
    assert_eq!(log.count(), 1);
    let diag = log.iter().next().unwrap();
    assert_eq!(diag.code, DiagnosticCode::IllegalExpression);
    assert!(diag.message.contains("non boolean expression in an if statement"));
}

#[test]
fn test_call_with_wrong_arity() {
    // pow(1.0)
    let ctx = context();
    let scopes = ScopeTree::new();
    let root = Some(scopes.root());
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let call = b.call("pow", &[b.real(1.0, at(1, 5))], at(1, 1), root);
    let block = b.block(&[b.expr_stmt(call, at(1, 1), root)], at(1, 1), root);

    let log = analyze(&ctx, block, &scopes);
    let errors: Vec<_> = log.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, DiagnosticCode::FunctionDoesNotExist);
    assert_eq!(
        errors[0].message,
        "The function 'pow' is not defined with the signature 'real'"
    );
}

#[test]
fn test_println_without_arguments() {
    let ctx = context();
    let scopes = ScopeTree::new();
    let root = Some(scopes.root());
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let call = b.call("println", &[], at(1, 1), root);
    let block = b.block(&[b.expr_stmt(call, at(1, 1), root)], at(1, 1), root);

    assert!(analyze(&ctx, block, &scopes).is_empty());
}

// =============================================================================
// Calls
// =============================================================================

#[test]
fn test_every_builtin_resolves() {
    let ctx = context();
    let scopes = ScopeTree::new();
    let root = Some(scopes.root());
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let sp = at(1, 1);

    let calls = [
        b.call("print", &[b.string("hi", sp)], sp, root),
        b.call("println", &[], sp, root),
        b.call("pow", &[b.real(2.0, sp), b.int(3, sp)], sp, root),
        b.call("exp", &[b.real(1.0, sp)], sp, root),
        b.call("expm1", &[b.int(1, sp)], sp, root),
        b.call("random", &[], sp, root),
        b.call("randomInt", &[], sp, root),
        b.call("Time.resolution", &[], sp, root),
        b.call("Time.steps", &[b.int_with_unit(10, "ms", sp)], sp, root),
        b.call("Spiking.emitSpike", &[], sp, root),
        b.call("Logger.info", &[b.string("spike", sp)], sp, root),
    ];
    let stmts: Vec<Stmt<'_>> = calls.iter().map(|c| b.expr_stmt(*c, sp, root)).collect();
    let block = b.block(&stmts, sp, root);

    let log = analyze(&ctx, block, &scopes);
    assert!(log.is_empty(), "unexpected diagnostics:\n{log}");
}

#[test]
fn test_unknown_function() {
    let ctx = context();
    let scopes = ScopeTree::new();
    let root = Some(scopes.root());
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let call = b.call("foo", &[b.int(1, at(3, 5))], at(3, 1), root);
    let block = b.block(&[b.expr_stmt(call, at(3, 1), root)], at(3, 1), root);

    let log = analyze(&ctx, block, &scopes);
    assert_eq!(log.with_code(DiagnosticCode::FunctionDoesNotExist).count(), 1);
    assert!(log.has_errors());
}

#[test]
fn test_indeterminate_argument_is_not_an_error() {
    let ctx = context();
    let scopes = ScopeTree::new();
    let root = Some(scopes.root());
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let call = b.call("exp", &[b.ident("undeclared", at(1, 5))], at(1, 1), root);
    let block = b.block(&[b.expr_stmt(call, at(1, 1), root)], at(1, 1), root);

    let log = analyze(&ctx, block, &scopes);
    assert!(!log.has_errors());
    assert_eq!(log.warning_count(), 1);
    assert_eq!(
        log.iter().next().unwrap().message,
        "Cannot compute the type: undeclared : 1:5"
    );
}

#[test]
fn test_user_function_in_nested_scope() {
    let ctx = context();
    let mut scopes = ScopeTree::new();
    let root = scopes.root();
    let inner = scopes.push_scope(root);
    let pa = ctx.types().get("pA").unwrap().clone();
    scopes.declare_function(
        root,
        FunctionSignature::user("I_syn", vec![pa.clone(), SplType::real()], pa),
    );
    scopes.declare_variable(inner, "w", SplType::real());

    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let sp = at(2, 3);
    let call = b.call("I_syn", &[b.int_with_unit(1, "pA", sp), b.ident("w", sp)], sp, Some(inner));
    let decl = b.declaration(&["I"], b.named_type("pA"), Some(call), sp, Some(inner));
    let body = b.block(&[decl], sp, Some(inner));
    let cond = b.binary(b.ident("w", sp), BinaryOp::Greater, b.real(0.0, sp), sp);
    let while_stmt = b.while_stmt(cond, body, at(1, 1), Some(root));
    let block = b.block(&[while_stmt], at(1, 1), Some(root));

    let log = analyze(&ctx, block, &scopes);
    // `w` lives in the inner scope only, so the loop condition cannot be typed
    assert_eq!(log.error_count(), 1, "log:\n{log}");
    assert_eq!(log.warning_count(), 0);
    let diag = log.iter().next().unwrap();
    assert_eq!(diag.span, at(1, 1));
    assert_eq!(
        diag.message,
        "Cannot use the expression in the while clause. unresolved variable 'w' @1:1"
    );
}

// =============================================================================
// Conditions and declarations
// =============================================================================

#[test]
fn test_if_elif_while_conditions() {
    let ctx = context();
    let mut scopes = ScopeTree::new();
    let root = scopes.root();
    scopes.declare_variable(root, "V_m", ctx.types().get("mV").unwrap().clone());
    let root = Some(root);

    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let sp = at(1, 1);
    let empty = b.block(&[], sp, root);

    let threshold = b.binary(b.ident("V_m", sp), BinaryOp::GreaterEqual, b.real_with_unit(-55.0, "mV", sp), sp);
    let if_stmt = b.if_stmt(
        b.if_clause(threshold, empty, at(1, 1), root),
        &[b.elif_clause(b.ident("V_m", sp), empty, at(3, 1), root)],
        Some(empty),
    );
    let while_stmt = b.while_stmt(b.call("random", &[], sp, root), empty, at(5, 1), root);
    let block = b.block(&[if_stmt, while_stmt], sp, root);

    let log = analyze(&ctx, block, &scopes);
    let errors: Vec<_> = log.errors().map(|d| (d.span, d.message.clone())).collect();
    assert_eq!(
        errors,
        vec![
            (at(3, 1), "Cannot use non boolean expression in an if statement @3:1".to_string()),
            (at(5, 1), "Cannot use non boolean expression in a while statement @5:1".to_string()),
        ]
    );
}

#[test]
fn test_unit_declarations() {
    let ctx = context();
    let scopes = ScopeTree::new();
    let root = Some(scopes.root());
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let sp = at(1, 1);

    let stmts = [
        b.declaration(&["V_m"], b.named_type("mV"), Some(b.real_with_unit(-70.0, "mV", sp)), sp, root),
        b.declaration(&["V_th"], b.named_type("mV"), Some(b.real(-55.0, sp)), sp, root),
        b.declaration(&["r"], b.named_type("integer"), Some(b.call("Time.steps", &[b.int_with_unit(2, "ms", sp)], sp, root)), sp, root),
        b.declaration(&["spiked"], DeclaredType::Boolean, Some(b.boolean(false, sp)), sp, root),
        b.declaration(&["I_e"], b.named_type("pA"), Some(b.int_with_unit(1, "mV", at(6, 9))), at(6, 1), root),
    ];
    let block = b.block(&stmts, sp, root);

    let log = analyze(&ctx, block, &scopes);
    let errors: Vec<_> = log.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "Cannot initialize variable with an expression of type: I_e with the type mV @6:1"
    );
}

#[test]
fn test_analysis_continues_after_errors() {
    let ctx = context();
    let scopes = ScopeTree::new();
    let root = Some(scopes.root());
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let stmts = [
        b.declaration(&["a"], b.named_type("integer"), Some(b.real(1.0, at(1, 13))), at(1, 1), root),
        b.expr_stmt(b.call("missing", &[], at(2, 1), root), at(2, 1), root),
        b.declaration(&["c"], b.named_type("string"), Some(b.int(1, at(3, 12))), at(3, 1), root),
    ];
    let block = b.block(&stmts, at(1, 1), root);

    let log = analyze(&ctx, block, &scopes);
    let lines: Vec<u32> = log.errors().map(|d| d.span.line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn test_units_analyzed_on_threads_share_context() {
    let ctx = context();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let ctx = Arc::clone(&ctx);
            std::thread::spawn(move || {
                let scopes = ScopeTree::new();
                let root = Some(scopes.root());
                let arena = Bump::new();
                let b = AstBuilder::new(&arena);
                let callee = if i % 2 == 0 { "println" } else { "nope" };
                let call = b.call(callee, &[], at(1, 1), root);
                let block = b.block(&[b.expr_stmt(call, at(1, 1), root)], at(1, 1), root);

                let mut unit = ctx.create_unit();
                unit.analyze(block, &scopes).error_count()
            })
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![0, 1, 0, 1]);
}

#[test]
#[should_panic(expected = "No scope assigned. Please, run symboltable creator.")]
fn test_unscoped_node_panics() {
    let ctx = context();
    let scopes = ScopeTree::new();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let decl = b.declaration(&["x"], b.named_type("real"), Some(b.int(1, at(1, 1))), at(1, 1), None);
    let block = b.block(&[decl], at(1, 1), None);
    analyze(&ctx, block, &scopes);
}

#[test]
fn test_diagnostics_render() {
    let ctx = context();
    let scopes = ScopeTree::new();
    let root = Some(scopes.root());
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let call = b.call("foo", &[], at(4, 2), root);
    let block = b.block(&[b.expr_stmt(call, at(4, 2), root)], at(4, 2), root);

    let log = analyze(&ctx, block, &scopes);
    assert_eq!(
        log.to_string(),
        "4:2: error: [FUNCTION_DOES_NOT_EXIST] The function 'foo' is not defined with the signature ''\n"
    );
}
