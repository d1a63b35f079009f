// Copyright 2025-2026 Neil Henderson
//
//! The `emit` module renders the assembly AST produced by generation into the final
//! translation-unit text.

use std::fmt::Result;

use super::ast::{AsmFunction, AsmRoot};
use super::text_writer::AsmTextWriter;

/// Emits the assembly text for the given program.
pub fn emit_asm(asm_root: &AsmRoot) -> String {
    let mut writer = AsmTextWriter::new();

    // Formatting into a String cannot fail, but the writer API is fallible.
    emit_asm_root(&mut writer, asm_root).expect("Did not write assembly text");

    writer.into_text()
}

fn emit_asm_root(writer: &mut AsmTextWriter, asm_root: &AsmRoot) -> Result {
    writer.write_file_header()?;
    writer.write_blank_line()?;

    for function in &asm_root.0 {
        emit_asm_function(writer, function)?;
    }

    writer.write_file_footer()
}

fn emit_asm_function(writer: &mut AsmTextWriter, function: &AsmFunction) -> Result {
    let function_name = &function.name;

    // The prologue and epilogue in the instruction stream allocate this much.
    debug_assert!(function.frame_size >= 16 && function.frame_size % 16 == 0);

    writer.write_global_directive(function_name)?;
    writer.write_type_directive(function_name)?;
    writer.write_symbol_label(function_name)?;
    writer.writeln_with_indent(".cfi_startproc")?;

    for instr in &function.instructions {
        writer.write_instruction(instr)?;
    }

    writer.writeln_with_indent(".cfi_endproc")?;
    writer.write_size_directive(function_name)?;
    writer.write_blank_line()?;

    Ok(())
}
