// Copyright 2025-2026 Neil Henderson
//
//! The `error` module defines the errors surfaced to the driver when translation fails.

use thiserror::Error;

/// An error in the input program detected during translation.
///
/// These are programmer errors in the MinC source, not bugs in the generator; internal
/// invariant violations raise an ICE instead. When translation fails, all partial output
/// is discarded.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum CodegenError {
    /// An identifier that is neither a parameter nor a declared local variable.
    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),

    /// A `break` statement outside of any enclosing loop.
    #[error("'break' statement outside of a loop")]
    BreakOutsideLoop,

    /// A `continue` statement outside of any enclosing loop.
    #[error("'continue' statement outside of a loop")]
    ContinueOutsideLoop,
}
