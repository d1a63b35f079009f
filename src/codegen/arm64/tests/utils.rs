// Copyright 2025-2026 Neil Henderson

use crate::ast::{
    AstBinaryOp, AstDeclaration, AstExpression, AstFunction, AstParameter, AstRoot, AstStatement, AstType,
};

/// Creates a function definition with `long` parameters and return type.
pub fn make_function(ident: &str, params: &[&str], body: AstStatement) -> AstFunction {
    AstFunction {
        ident: ident.to_string(),
        params: params
            .iter()
            .map(|param| AstParameter { data_type: AstType::Long, ident: param.to_string() })
            .collect(),
        return_type: AstType::Long,
        body,
    }
}

/// Creates a compound statement declaring the given `long` variables.
pub fn compound(decls: &[&str], stmts: Vec<AstStatement>) -> AstStatement {
    AstStatement::Compound {
        decls: decls
            .iter()
            .map(|decl| AstDeclaration { data_type: AstType::Long, ident: decl.to_string() })
            .collect(),
        stmts,
    }
}

pub fn lit(value: i64) -> AstExpression {
    AstExpression::IntLiteral(value)
}

pub fn var(name: &str) -> AstExpression {
    AstExpression::Ident(name.to_string())
}

pub fn binary(op: AstBinaryOp, left: AstExpression, right: AstExpression) -> AstExpression {
    AstExpression::Binary { op, left: Box::new(left), right: Box::new(right) }
}

pub fn assign(target: &str, value: AstExpression) -> AstExpression {
    AstExpression::Assignment { target: target.to_string(), value: Box::new(value) }
}

pub fn call(callee: &str, args: Vec<AstExpression>) -> AstExpression {
    AstExpression::Call { callee: Box::new(var(callee)), args }
}

/// Generates the assembly text for a program consisting of a single function definition.
pub fn codegen_function(function: AstFunction) -> String {
    crate::codegen::codegen(&AstRoot(vec![function])).expect("codegen failed")
}

/// Asserts that the given lines occur in the assembly text in the given order.
///
/// Every expected line must match one emitted line exactly (after trimming indentation);
/// unrelated lines may appear in between.
pub fn assert_sequence(asm: &str, expected: &[&str]) {
    let mut lines = asm.lines().map(str::trim);

    for needle in expected {
        assert!(
            lines.any(|line| line == *needle),
            "expected line '{needle}' not found (in order) in:\n{asm}"
        );
    }
}
