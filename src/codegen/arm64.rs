// Copyright 2025-2026 Neil Henderson
//
//! The `arm64` module contains the codegen functionality for the AArch64 (ARMv8-A)
//! GNU-assembler target.

mod ast;
mod emit;
mod frame;
mod generate;
mod label_maker;
mod loop_stack;
mod registers;
mod text_writer;


pub use emit::emit_asm;
pub use generate::generate_asm;
