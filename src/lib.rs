// Copyright 2025-2026 Neil Henderson
//
//! The MinC code generation library.

#![doc(html_no_source)]

pub mod ast;
pub mod codegen;
pub mod core;
pub mod error;
