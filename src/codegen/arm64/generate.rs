// Copyright 2025-2026 Neil Henderson
//
//! The `generate` module provides AArch64 assembly generation functionality to the parent
//! codegen module.
//!
//! Every expression leaves its result in `x0` and may clobber `x0..x7` plus the scratch
//! pool `x9..x15`; `x29` and `sp` are preserved across every expression. `x8` is the
//! indirect-result-location register and is never used.

mod expr;
mod stmt;

use tracing::debug;

use crate::ast;
use crate::error::CodegenError;

use super::ast::{AsmBinaryOp, AsmFunction, AsmInstruction, AsmRoot};
use super::frame::FrameLayout;
use super::label_maker::AsmLabelMaker;
use super::loop_stack::LoopLabelStack;
use super::registers::{HwRegister, MAX_REGISTER_ARGS};

/// Every variable occupies a single 8-byte frame slot.
const SLOT_SIZE: i64 = 8;

/// The AArch64 code generator which lowers the MinC AST into an assembly AST.
///
/// All mutable lowering state is threaded through this value, so a translation is
/// re-entrant and deterministic.
pub struct Generator {
    pub labels: AsmLabelMaker,
    pub loops: LoopLabelStack,
}

impl Generator {
    /// Creates a new generator with a fresh label counter.
    pub fn new() -> Self {
        Self { labels: AsmLabelMaker::new(), loops: LoopLabelStack::new() }
    }
}

/// Generates an AArch64 assembly AST of the given program.
pub fn generate_asm(root: &ast::AstRoot) -> Result<AsmRoot, CodegenError> {
    debug!(functions = root.0.len(), "lowering program");

    let mut generator = Generator::new();

    let asm_functions = root
        .0
        .iter()
        .map(|function| generate_asm_function(function, &mut generator))
        .collect::<Result<Vec<AsmFunction>, CodegenError>>()?;

    Ok(AsmRoot(asm_functions))
}

/// Generates the assembly for a single function definition.
///
/// The frame is one `sub sp, sp, #F` allocation with `x29` pinned to its top for the
/// rest of the function. The link register is not spilled, so the generated code relies
/// on `x30` surviving between entry and `ret`; calls made by the lowered body overwrite
/// it, which is a known limitation of the frame model.
fn generate_asm_function(
    function: &ast::AstFunction,
    generator: &mut Generator,
) -> Result<AsmFunction, CodegenError> {
    debug!(function = %function.ident, "lowering function");

    let frame = FrameLayout::build(function);
    let frame_size = frame.frame_size();
    let epilogue_label = generator.labels.make_epilogue_label(&function.ident);

    let mut instructions = Vec::new();

    // Prologue: allocate the frame and pin the frame pointer.
    instructions.push(AsmInstruction::BinaryImm {
        op: AsmBinaryOp::Sub,
        dst: HwRegister::SP,
        src: HwRegister::SP,
        value: frame_size,
    });
    instructions.push(AsmInstruction::MovReg { dst: HwRegister::FP, src: HwRegister::SP });

    // Spill the register-passed parameters into their frame slots.
    for index in 0..function.params.len().min(MAX_REGISTER_ARGS) {
        instructions.push(AsmInstruction::Str {
            src: HwRegister::argument(index),
            base: HwRegister::FP,
            offset: -(SLOT_SIZE * (1 + index as i64)),
        });
    }

    stmt::generate_statement(&function.body, &frame, &epilogue_label, generator, &mut instructions)?;

    // Epilogue: release the frame and return.
    instructions.push(AsmInstruction::Label { id: epilogue_label });
    instructions.push(AsmInstruction::BinaryImm {
        op: AsmBinaryOp::Add,
        dst: HwRegister::SP,
        src: HwRegister::SP,
        value: frame_size,
    });
    instructions.push(AsmInstruction::Ret);

    // Statement lowering pops every loop it pushes.
    debug_assert!(generator.loops.is_empty());

    Ok(AsmFunction { name: function.ident.clone(), frame_size, instructions })
}
