// Copyright 2025-2026 Neil Henderson
//
//! The `ast` module defines the AArch64 Assembly AST for the parent codegen module.

use std::fmt;

use super::registers::HwRegister;

/// The root of the assembly AST contains a list of function definitions.
pub struct AsmRoot(pub Vec<AsmFunction>);

/// A function definition.
///
/// `frame_size` is the 16-byte-aligned byte count allocated by the prologue's
/// `sub sp, sp, #F` and released by the matching `add sp, sp, #F` in the epilogue.
pub struct AsmFunction {
    pub name: String,
    pub frame_size: i64,
    pub instructions: Vec<AsmInstruction>,
}

/// A label, without its `.L` local-symbol prefix (the writer adds it).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AsmLabelName(pub String);

impl fmt::Display for AsmLabelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Instructions.
#[derive(Debug, Clone)]
pub enum AsmInstruction {
    /// `ldr dst, [base, #offset]`
    Ldr { dst: HwRegister, base: HwRegister, offset: i64 },

    /// `str src, [base, #offset]`
    Str { src: HwRegister, base: HwRegister, offset: i64 },

    /// `str src, [sp, #-16]!` — push one 16-byte argument slot
    Push { src: HwRegister },

    /// `ldr dst, [sp], #16` — pop one 16-byte argument slot
    Pop { dst: HwRegister },

    /// `mov dst, #value`
    MovImm { dst: HwRegister, value: i64 },

    /// `mov dst, src`
    MovReg { dst: HwRegister, src: HwRegister },

    /// `neg dst, src`
    Neg { dst: HwRegister, src: HwRegister },

    /// `cmp lhs, rhs`
    Cmp { lhs: HwRegister, rhs: HwRegister },

    /// `cmp reg, #value`
    CmpImm { reg: HwRegister, value: i64 },

    /// `cset dst, <cc>`
    CSet { dst: HwRegister, cond: ConditionCode },

    Binary { op: AsmBinaryOp, dst: HwRegister, lhs: HwRegister, rhs: HwRegister },

    /// `add/sub dst, src, #value` — also used for the sp adjustments
    BinaryImm { op: AsmBinaryOp, dst: HwRegister, src: HwRegister, value: i64 },

    /// `b <target>`
    B { target: AsmLabelName },

    /// `b<cc> <target>`
    BCond { cond: ConditionCode, target: AsmLabelName },

    /// `bl <callee>`
    Bl { callee: String },

    /// `blr target`
    Blr { target: HwRegister },

    Label { id: AsmLabelName },
    Ret,
}

/// Binary operations.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AsmBinaryOp {
    Add,
    Sub,
    Mul,
    SDiv,
}

/// Condition codes for `CSet` and `BCond` instructions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ConditionCode {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl ConditionCode {
    /// The logical inverse of the condition, used to branch around a statement body
    /// when its controlling comparison is false.
    #[rustfmt::skip]
    pub fn inverse(self) -> ConditionCode {
        match self {
            ConditionCode::Eq => ConditionCode::Ne,
            ConditionCode::Ne => ConditionCode::Eq,
            ConditionCode::Lt => ConditionCode::Ge,
            ConditionCode::Gt => ConditionCode::Le,
            ConditionCode::Le => ConditionCode::Gt,
            ConditionCode::Ge => ConditionCode::Lt,
        }
    }
}
