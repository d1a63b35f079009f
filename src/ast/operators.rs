// Copyright 2025-2026 Neil Henderson
//
//! The `operators` module defines the `AstUnaryOp` and `AstBinaryOp` types.

use std::fmt;

/// Unary operators.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AstUnaryOp {
    Negate,
    LogicalNot,
}

/// Binary operators.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AstBinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    LessThan,
    GreaterThan,
    LessThanOrEqualTo,
    GreaterThanOrEqualTo,
    EqualTo,
    NotEqualTo,
    LogicalAnd,
    LogicalOr,
}

/// Families or groups of binary operators.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AstBinaryOpFamily {
    Arithmetic,
    Relational,
    Logical,
}

impl fmt::Display for AstUnaryOp {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AstUnaryOp::Negate     => write!(f, "Negate"),
            AstUnaryOp::LogicalNot => write!(f, "LogicalNot"),
        }
    }
}

impl fmt::Display for AstBinaryOp {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AstBinaryOp::Add                  => write!(f, "Add"),
            AstBinaryOp::Subtract             => write!(f, "Subtract"),
            AstBinaryOp::Multiply             => write!(f, "Multiply"),
            AstBinaryOp::Divide               => write!(f, "Divide"),
            AstBinaryOp::Remainder            => write!(f, "Remainder"),
            AstBinaryOp::LessThan             => write!(f, "LessThan"),
            AstBinaryOp::GreaterThan          => write!(f, "GreaterThan"),
            AstBinaryOp::LessThanOrEqualTo    => write!(f, "LessThanOrEqualTo"),
            AstBinaryOp::GreaterThanOrEqualTo => write!(f, "GreaterThanOrEqualTo"),
            AstBinaryOp::EqualTo              => write!(f, "EqualTo"),
            AstBinaryOp::NotEqualTo           => write!(f, "NotEqualTo"),
            AstBinaryOp::LogicalAnd           => write!(f, "LogicalAnd"),
            AstBinaryOp::LogicalOr            => write!(f, "LogicalOr"),
        }
    }
}

impl AstBinaryOp {
    /// Is the operator a relational operator?
    pub fn is_relational(&self) -> bool {
        self.family() == AstBinaryOpFamily::Relational
    }

    /// The family or group that the operator belongs to.
    pub fn family(&self) -> AstBinaryOpFamily {
        match self {
            AstBinaryOp::Add
            | AstBinaryOp::Subtract
            | AstBinaryOp::Multiply
            | AstBinaryOp::Divide
            | AstBinaryOp::Remainder => AstBinaryOpFamily::Arithmetic,
            AstBinaryOp::LessThan
            | AstBinaryOp::GreaterThan
            | AstBinaryOp::LessThanOrEqualTo
            | AstBinaryOp::GreaterThanOrEqualTo
            | AstBinaryOp::EqualTo
            | AstBinaryOp::NotEqualTo => AstBinaryOpFamily::Relational,
            AstBinaryOp::LogicalAnd | AstBinaryOp::LogicalOr => AstBinaryOpFamily::Logical,
        }
    }
}
