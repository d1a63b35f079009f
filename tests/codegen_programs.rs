// Copyright 2025-2026 Neil Henderson
//
// End-to-end tests that lower whole MinC programs through the public API and inspect
// the emitted translation unit.

use minc_codegen::ast::{
    AstBinaryOp, AstDeclaration, AstExpression, AstFunction, AstParameter, AstRoot, AstStatement, AstType,
};
use minc_codegen::codegen::codegen;
use minc_codegen::error::CodegenError;

fn param(ident: &str) -> AstParameter {
    AstParameter { data_type: AstType::Long, ident: ident.to_string() }
}

fn decl(ident: &str) -> AstDeclaration {
    AstDeclaration { data_type: AstType::Long, ident: ident.to_string() }
}

fn var(name: &str) -> AstExpression {
    AstExpression::Ident(name.to_string())
}

fn lit(value: i64) -> AstExpression {
    AstExpression::IntLiteral(value)
}

fn binary(op: AstBinaryOp, left: AstExpression, right: AstExpression) -> AstExpression {
    AstExpression::Binary { op, left: Box::new(left), right: Box::new(right) }
}

fn assign(target: &str, value: AstExpression) -> AstExpression {
    AstExpression::Assignment { target: target.to_string(), value: Box::new(value) }
}

fn function(ident: &str, params: &[&str], body: AstStatement) -> AstFunction {
    AstFunction {
        ident: ident.to_string(),
        params: params.iter().map(|p| param(p)).collect(),
        return_type: AstType::Long,
        body,
    }
}

/// long sum(long n) { long s; long i; s = 0; i = 1;
///     while (i <= n) { s = s + i; i = i + 1; } return s; }
fn sum_to_n() -> AstFunction {
    let loop_body = AstStatement::Compound {
        decls: vec![],
        stmts: vec![
            AstStatement::Expression(assign("s", binary(AstBinaryOp::Add, var("s"), var("i")))),
            AstStatement::Expression(assign("i", binary(AstBinaryOp::Add, var("i"), lit(1)))),
        ],
    };

    let body = AstStatement::Compound {
        decls: vec![decl("s"), decl("i")],
        stmts: vec![
            AstStatement::Expression(assign("s", lit(0))),
            AstStatement::Expression(assign("i", lit(1))),
            AstStatement::While {
                controlling_expr: binary(AstBinaryOp::LessThanOrEqualTo, var("i"), var("n")),
                body: Box::new(loop_body),
            },
            AstStatement::Return(var("s")),
        ],
    };

    function("sum", &["n"], body)
}

#[test]
fn test_sum_loop_program() {
    let asm = codegen(&AstRoot(vec![sum_to_n()])).expect("codegen failed");

    // One parameter and two locals: 24 bytes rounds up to 32.
    assert!(asm.contains("sub sp, sp, #32"), "frame allocation missing: {asm}");
    assert!(asm.contains("add sp, sp, #32"), "frame release missing: {asm}");

    // The loop condition is a comparison, so it branches on the inverted condition
    // instead of materializing a 0/1 value.
    assert!(asm.contains("bgt "), "inverted loop branch missing: {asm}");
    assert!(!asm.contains("cset"), "loop condition should not use cset: {asm}");

    assert!(asm.contains(".L_epilogue_sum:"), "epilogue label missing: {asm}");
    assert!(asm.ends_with(".section .note.GNU-stack,\"\",@progbits\n"), "footer missing: {asm}");
}

#[test]
fn test_caller_and_callee_program() {
    // long add(long a, long b) { return a + b; }
    // long main() { return add(40, 2); }
    let add_fn = function(
        "add",
        &["a", "b"],
        AstStatement::Return(binary(AstBinaryOp::Add, var("a"), var("b"))),
    );
    let main_fn = function(
        "main",
        &[],
        AstStatement::Return(AstExpression::Call {
            callee: Box::new(var("add")),
            args: vec![lit(40), lit(2)],
        }),
    );

    let asm = codegen(&AstRoot(vec![add_fn, main_fn])).expect("codegen failed");

    assert!(asm.contains("bl add"), "direct call missing: {asm}");
    assert!(asm.contains("    .global add\n"), "callee must be global: {asm}");
    assert!(asm.contains("    .global main\n"), "caller must be global: {asm}");
    assert!(asm.contains("    .size add, .-add\n"), "size directive missing: {asm}");

    // Both epilogue labels are distinct.
    assert!(asm.contains(".L_epilogue_add:"));
    assert!(asm.contains(".L_epilogue_main:"));
}

#[test]
fn test_output_is_reproducible() {
    let root = AstRoot(vec![sum_to_n()]);

    let first = codegen(&root).expect("codegen failed");
    let second = codegen(&root).expect("codegen failed");

    assert_eq!(first, second);
}

#[test]
fn test_translation_errors_discard_output() {
    let bad = function("f", &[], AstStatement::Return(var("undeclared")));
    let good = sum_to_n();

    let result = codegen(&AstRoot(vec![good, bad]));

    assert_eq!(result, Err(CodegenError::UndefinedVariable("undeclared".to_string())));
}
