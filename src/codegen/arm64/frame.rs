// Copyright 2025-2026 Neil Henderson
//
//! The `frame` module computes the stack frame layout for a function definition: the
//! mapping from parameter and local-variable names to `x29`-relative byte offsets, and
//! the frame size allocated by the prologue.

use std::collections::HashMap;

use crate::ast::{AstDeclaration, AstFunction, AstStatement};

use super::registers::MAX_REGISTER_ARGS;

/// Every variable occupies a single 8-byte slot.
const SLOT_SIZE: i64 = 8;

/// Collects every local variable declaration in the given statement tree.
///
/// Traversal is depth-first, left-to-right, and the resulting order is the order in
/// which frame slots are assigned. Declarations never cross a function boundary because
/// MinC has no nested functions.
pub fn collect_declarations(stmt: &AstStatement) -> Vec<&AstDeclaration> {
    let mut decls = Vec::new();
    collect_into(stmt, &mut decls);
    decls
}

fn collect_into<'a>(stmt: &'a AstStatement, decls: &mut Vec<&'a AstDeclaration>) {
    match stmt {
        AstStatement::Compound { decls: own_decls, stmts } => {
            decls.extend(own_decls.iter());
            for stmt in stmts {
                collect_into(stmt, decls);
            }
        }

        AstStatement::If { then_stmt, else_stmt, .. } => {
            collect_into(then_stmt, decls);
            if let Some(else_stmt) = else_stmt {
                collect_into(else_stmt, decls);
            }
        }

        AstStatement::While { body, .. } => collect_into(body, decls),

        _ => (),
    }
}

/// The frame layout for one function.
///
/// The frame is a single contiguous allocation with `x29` pinned to its top (the highest
/// address the function uses). Register-passed parameters and locals sit below `x29` at
/// negative offsets; parameters beyond the eighth stay in the caller's frame at positive
/// offsets. Later declarations with a duplicate name overwrite the earlier binding;
/// block scoping is not modeled.
#[derive(Debug)]
pub struct FrameLayout {
    offsets: HashMap<String, i64>,
    frame_size: i64,
}

impl FrameLayout {
    /// Builds the frame layout for the given function definition.
    pub fn build(function: &AstFunction) -> Self {
        let decls = collect_declarations(&function.body);

        // Every parameter and local takes one slot in the sizing pass, and the stack
        // pointer must stay 16-byte aligned.
        let slot_count = (function.params.len() + decls.len()) as i64;
        let frame_size = round_up_to_multiple_of_16(SLOT_SIZE * slot_count).max(16);

        let mut offsets = HashMap::new();
        let mut next_offset = 0;

        let surplus = function.params.len().saturating_sub(MAX_REGISTER_ARGS) as i64;

        for (index, param) in function.params.iter().enumerate() {
            next_offset -= SLOT_SIZE;

            if index < MAX_REGISTER_ARGS {
                offsets.insert(param.ident.clone(), next_offset);
            } else {
                // Stack-passed parameters live in the caller's frame, above ours. The
                // caller pushes each one in its own 16-byte slot and repositions sp by
                // the surplus before the call (see the call lowering).
                let caller_offset = frame_size + 16 * (surplus + index as i64 - MAX_REGISTER_ARGS as i64);
                offsets.insert(param.ident.clone(), caller_offset);
            }
        }

        for decl in decls {
            next_offset -= SLOT_SIZE;
            offsets.insert(decl.ident.clone(), next_offset);
        }

        Self { offsets, frame_size }
    }

    /// Returns the `x29`-relative byte offset for the given variable, if it is bound.
    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.offsets.get(name).copied()
    }

    /// The frame size allocated by the prologue: 16-byte aligned, at least 16.
    pub fn frame_size(&self) -> i64 {
        self.frame_size
    }
}

pub(super) fn round_up_to_multiple_of_16(x: i64) -> i64 {
    (x + 15) & !15
}
