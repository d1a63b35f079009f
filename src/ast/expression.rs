// Copyright 2025-2026 Neil Henderson
//
//! The `expression` module defines the `AstExpression` type.

use super::operators::{AstBinaryOp, AstUnaryOp};

/// Expressions.
///
/// Operators are closed enums rather than symbol strings, so the case analysis in the
/// code generator is statically total. The left side of an assignment must be an
/// identifier, which the `Assignment` variant makes structural.
#[derive(Debug, Clone)]
pub enum AstExpression {
    IntLiteral(i64),
    Ident(String),
    Paren(Box<AstExpression>),
    Unary { op: AstUnaryOp, operand: Box<AstExpression> },
    Binary { op: AstBinaryOp, left: Box<AstExpression>, right: Box<AstExpression> },
    Assignment { target: String, value: Box<AstExpression> },
    Call { callee: Box<AstExpression>, args: Vec<AstExpression> },
}
