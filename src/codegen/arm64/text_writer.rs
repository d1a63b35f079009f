// Copyright 2025-2026 Neil Henderson
//
//! The `text_writer` module renders the AArch64 assembly AST as GNU assembler text.

use std::fmt::{Result, Write};

use super::ast::{AsmBinaryOp, AsmInstruction, AsmLabelName, ConditionCode};

const INDENT: &str = "    ";

/// An AArch64 assembly text writer which accumulates one translation unit.
pub struct AsmTextWriter {
    out: String,
}

impl AsmTextWriter {
    /// Creates a new, empty writer.
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Consumes the writer and returns the accumulated text.
    pub fn into_text(self) -> String {
        self.out
    }

    /// Writes the directives that open the translation unit.
    pub fn write_file_header(&mut self) -> Result {
        self.writeln_with_indent(".arch armv8-a")?;
        self.writeln_with_indent(".text")?;
        self.writeln_with_indent(".align 2")
    }

    /// Writes the non-executable-stack marker that closes the translation unit.
    pub fn write_file_footer(&mut self) -> Result {
        self.writeln_with_indent(".section .note.GNU-stack,\"\",@progbits")
    }

    /// Writes a global directive for the given symbol name.
    pub fn write_global_directive(&mut self, symbol_name: &str) -> Result {
        writeln!(self.out, "{INDENT}.global {symbol_name}")
    }

    /// Writes a type directive marking the given symbol as a function.
    pub fn write_type_directive(&mut self, symbol_name: &str) -> Result {
        writeln!(self.out, "{INDENT}.type {symbol_name}, %function")
    }

    /// Writes a size directive for the given function symbol.
    pub fn write_size_directive(&mut self, symbol_name: &str) -> Result {
        writeln!(self.out, "{INDENT}.size {symbol_name}, .-{symbol_name}")
    }

    /// Writes a label for a symbol.
    ///
    /// The `symbol_name` argument should _NOT_ include the `:` character.
    pub fn write_symbol_label(&mut self, symbol_name: &str) -> Result {
        debug_assert!(!symbol_name.contains(':'));
        writeln!(self.out, "{symbol_name}:")
    }

    /// Writes a label for a local symbol. A local label has a ".L" prefix and is not
    /// saved in the object file.
    pub fn write_local_symbol_label(&mut self, label: &AsmLabelName) -> Result {
        writeln!(self.out, "{}:", make_asm_local_symbol_label(label))
    }

    /// Writes an instruction.
    pub fn write_instruction(&mut self, instr: &AsmInstruction) -> Result {
        match instr {
            AsmInstruction::Ldr { dst, base, offset } => {
                self.writeln_with_indent(&format!("ldr {dst}, [{base}, #{offset}]"))
            }

            AsmInstruction::Str { src, base, offset } => {
                self.writeln_with_indent(&format!("str {src}, [{base}, #{offset}]"))
            }

            AsmInstruction::Push { src } => self.writeln_with_indent(&format!("str {src}, [sp, #-16]!")),

            AsmInstruction::Pop { dst } => self.writeln_with_indent(&format!("ldr {dst}, [sp], #16")),

            AsmInstruction::MovImm { dst, value } => self.writeln_with_indent(&format!("mov {dst}, #{value}")),

            AsmInstruction::MovReg { dst, src } => self.writeln_with_indent(&format!("mov {dst}, {src}")),

            AsmInstruction::Neg { dst, src } => self.writeln_with_indent(&format!("neg {dst}, {src}")),

            AsmInstruction::Cmp { lhs, rhs } => self.writeln_with_indent(&format!("cmp {lhs}, {rhs}")),

            AsmInstruction::CmpImm { reg, value } => self.writeln_with_indent(&format!("cmp {reg}, #{value}")),

            AsmInstruction::CSet { dst, cond } => {
                self.writeln_with_indent(&format!("cset {dst}, {}", make_asm_condition(cond)))
            }

            AsmInstruction::Binary { op, dst, lhs, rhs } => {
                self.writeln_with_indent(&format!("{} {dst}, {lhs}, {rhs}", make_asm_mnemonic(op)))
            }

            AsmInstruction::BinaryImm { op, dst, src, value } => {
                self.writeln_with_indent(&format!("{} {dst}, {src}, #{value}", make_asm_mnemonic(op)))
            }

            AsmInstruction::B { target } => {
                self.writeln_with_indent(&format!("b {}", make_asm_local_symbol_label(target)))
            }

            AsmInstruction::BCond { cond, target } => self.writeln_with_indent(&format!(
                "{} {}",
                make_asm_conditional_branch(cond),
                make_asm_local_symbol_label(target)
            )),

            AsmInstruction::Bl { callee } => self.writeln_with_indent(&format!("bl {callee}")),

            AsmInstruction::Blr { target } => self.writeln_with_indent(&format!("blr {target}")),

            AsmInstruction::Label { id } => self.write_local_symbol_label(id),

            AsmInstruction::Ret => self.writeln_with_indent("ret"),
        }
    }

    /// Writes the given string as a line with indentation.
    pub fn writeln_with_indent(&mut self, line: &str) -> Result {
        writeln!(self.out, "{INDENT}{line}")
    }

    /// Writes a blank line.
    pub fn write_blank_line(&mut self) -> Result {
        writeln!(self.out)
    }
}

fn make_asm_local_symbol_label(label: &AsmLabelName) -> String {
    format!(".L{label}")
}

#[rustfmt::skip]
fn make_asm_mnemonic(op: &AsmBinaryOp) -> &'static str {
    match op {
        AsmBinaryOp::Add  => "add",
        AsmBinaryOp::Sub  => "sub",
        AsmBinaryOp::Mul  => "mul",
        AsmBinaryOp::SDiv => "sdiv",
    }
}

#[rustfmt::skip]
fn make_asm_condition(cond: &ConditionCode) -> &'static str {
    match cond {
        ConditionCode::Eq => "eq",
        ConditionCode::Ne => "ne",
        ConditionCode::Lt => "lt",
        ConditionCode::Gt => "gt",
        ConditionCode::Le => "le",
        ConditionCode::Ge => "ge",
    }
}

#[rustfmt::skip]
fn make_asm_conditional_branch(cond: &ConditionCode) -> &'static str {
    match cond {
        ConditionCode::Eq => "beq",
        ConditionCode::Ne => "bne",
        ConditionCode::Lt => "blt",
        ConditionCode::Gt => "bgt",
        ConditionCode::Le => "ble",
        ConditionCode::Ge => "bge",
    }
}
