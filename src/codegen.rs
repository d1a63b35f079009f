// Copyright 2025-2026 Neil Henderson
//
//! The codegen module converts the MinC AST to an AArch64 Assembly AST and then emits
//! the assembly code as a single translation unit of GNU assembler text.

mod arm64;

use crate::ast;
use crate::error::CodegenError;

/// Generates the AArch64 assembly text for the given program.
///
/// Translation is a pure function of the AST: for a fixed input the emitted text is
/// byte-identical across runs. If the program contains a translation error, all partial
/// output is discarded and the error is returned.
pub fn codegen(root: &ast::AstRoot) -> Result<String, CodegenError> {
    // Create an assembly AST of the program.
    let asm_root = arm64::generate_asm(root)?;

    // Code emission: render the assembly AST as text.
    Ok(arm64::emit_asm(&asm_root))
}
