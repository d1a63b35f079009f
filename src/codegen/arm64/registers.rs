// Copyright 2025-2026 Neil Henderson
//
//! The `registers` module defines the AArch64 hardware registers.

use std::fmt;

use crate::ICE;

/// The number of integer arguments passed in registers by the procedure-call standard.
pub const MAX_REGISTER_ARGS: usize = 8;

/// 64-bit general-purpose registers.
///
/// Only the registers the generator touches are listed: the argument/result registers
/// `x0..x7`, the scratch pool `x9..x15`, the frame pointer and the stack pointer.
/// `x8` is the indirect-result-location register and is deliberately excluded.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HwRegister {
    X0,
    X1,
    X2,
    X3,
    X4,
    X5,
    X6,
    X7,

    X9,
    X10,
    X11,
    X12,
    X13,
    X14,
    X15,

    FP, // x29
    SP,
}

#[rustfmt::skip]
impl fmt::Display for HwRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HwRegister::X0  => write!(f, "x0"),
            HwRegister::X1  => write!(f, "x1"),
            HwRegister::X2  => write!(f, "x2"),
            HwRegister::X3  => write!(f, "x3"),
            HwRegister::X4  => write!(f, "x4"),
            HwRegister::X5  => write!(f, "x5"),
            HwRegister::X6  => write!(f, "x6"),
            HwRegister::X7  => write!(f, "x7"),

            HwRegister::X9  => write!(f, "x9"),
            HwRegister::X10 => write!(f, "x10"),
            HwRegister::X11 => write!(f, "x11"),
            HwRegister::X12 => write!(f, "x12"),
            HwRegister::X13 => write!(f, "x13"),
            HwRegister::X14 => write!(f, "x14"),
            HwRegister::X15 => write!(f, "x15"),

            HwRegister::FP  => write!(f, "x29"),
            HwRegister::SP  => write!(f, "sp"),
        }
    }
}

impl HwRegister {
    /// The integer argument register for the given argument index.
    pub fn argument(arg_index: usize) -> HwRegister {
        match arg_index {
            0 => HwRegister::X0,
            1 => HwRegister::X1,
            2 => HwRegister::X2,
            3 => HwRegister::X3,
            4 => HwRegister::X4,
            5 => HwRegister::X5,
            6 => HwRegister::X6,
            7 => HwRegister::X7,
            n => ICE!("Invalid function argument index {n}; must be in range [0, 8)."),
        }
    }

    /// The scratch register selected for the given expression nesting depth.
    ///
    /// Nesting deeper than the scratch pool saturates at `x15`; code generated past that
    /// point is unsupported.
    pub fn scratch(depth: usize) -> HwRegister {
        match depth {
            0 => HwRegister::X9,
            1 => HwRegister::X10,
            2 => HwRegister::X11,
            3 => HwRegister::X12,
            4 => HwRegister::X13,
            5 => HwRegister::X14,
            _ => HwRegister::X15,
        }
    }
}
