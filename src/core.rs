// Copyright 2025-2026 Neil Henderson
//
//! The `core` module contains functionality shared by all parts of the code generator.

mod internal_error;
