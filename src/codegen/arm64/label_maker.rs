// Copyright 2025-2026 Neil Henderson
//
//! The `label_maker` module defines the `AsmLabelMaker` type which generates labels that
//! are textually unique within one translation.

use crate::ICE;

use super::ast::AsmLabelName;

/// Makes local labels for one translation.
///
/// The counter has no semantic meaning; it only makes labels unique. It starts at zero
/// for every translation so that output is deterministic for a fixed input.
#[derive(Debug)]
pub struct AsmLabelMaker {
    next_id: usize,
}

impl AsmLabelMaker {
    /// Creates a new label maker.
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Makes a unique label with the given prefix, rendered as `.L<prefix>_<k>`.
    pub fn make_unique_label(&mut self, prefix: &str) -> AsmLabelName {
        if self.next_id == usize::MAX {
            ICE!("Exhausted AsmLabelMaker label ids");
        }

        let id = self.next_id;
        self.next_id += 1;

        AsmLabelName(format!("{prefix}_{id}"))
    }

    /// Makes the return label for the given function, rendered as `.L_epilogue_<name>`.
    ///
    /// Function names are unique in a well-formed program, so no counter is needed.
    pub fn make_epilogue_label(&self, function_name: &str) -> AsmLabelName {
        AsmLabelName(format!("_epilogue_{function_name}"))
    }
}
