// Copyright 2025-2026 Neil Henderson

use crate::ast::AstStatement;

use super::super::frame::{FrameLayout, collect_declarations, round_up_to_multiple_of_16};
use super::utils::{compound, lit, make_function, var};

#[test]
fn test_round_up_to_multiple_of_16() {
    assert_eq!(round_up_to_multiple_of_16(0), 0);
    assert_eq!(round_up_to_multiple_of_16(1), 16);
    assert_eq!(round_up_to_multiple_of_16(8), 16);
    assert_eq!(round_up_to_multiple_of_16(15), 16);
    assert_eq!(round_up_to_multiple_of_16(16), 16);
    assert_eq!(round_up_to_multiple_of_16(17), 32);
    assert_eq!(round_up_to_multiple_of_16(32), 32);
    assert_eq!(round_up_to_multiple_of_16(33), 48);
}

#[test]
fn collects_declarations_depth_first() {
    // { long a; if (1) { long b; } else { long c; } while (1) { long d; } }
    let body = compound(
        &["a"],
        vec![
            AstStatement::If {
                controlling_expr: lit(1),
                then_stmt: Box::new(compound(&["b"], vec![])),
                else_stmt: Some(Box::new(compound(&["c"], vec![]))),
            },
            AstStatement::While { controlling_expr: lit(1), body: Box::new(compound(&["d"], vec![])) },
        ],
    );

    let decls: Vec<&str> = collect_declarations(&body).iter().map(|decl| decl.ident.as_str()).collect();

    assert_eq!(decls, vec!["a", "b", "c", "d"]);
}

#[test]
fn assigns_slots_to_parameters_then_locals() {
    let body = compound(&["s", "t"], vec![AstStatement::Return(var("s"))]);
    let function = make_function("f", &["a", "b"], body);

    let frame = FrameLayout::build(&function);

    assert_eq!(frame.lookup("a"), Some(-8));
    assert_eq!(frame.lookup("b"), Some(-16));
    assert_eq!(frame.lookup("s"), Some(-24));
    assert_eq!(frame.lookup("t"), Some(-32));
    assert_eq!(frame.lookup("missing"), None);
    assert_eq!(frame.frame_size(), 32);
}

#[test]
fn frame_size_has_a_minimum_of_16() {
    let function = make_function("f", &[], AstStatement::Return(lit(0)));
    let frame = FrameLayout::build(&function);

    assert_eq!(frame.frame_size(), 16);
}

#[test]
fn frame_size_is_16_byte_aligned() {
    let body = compound(&["x", "y", "z"], vec![]);
    let function = make_function("f", &[], body);
    let frame = FrameLayout::build(&function);

    // Three 8-byte slots round up to 32.
    assert_eq!(frame.frame_size(), 32);
    assert_eq!(frame.lookup("z"), Some(-24));
}

#[test]
fn duplicate_names_overwrite_earlier_slots() {
    // Block scoping is not modeled; the later declaration wins.
    let body = compound(&["x"], vec![AstStatement::Return(var("x"))]);
    let function = make_function("f", &["x"], body);

    let frame = FrameLayout::build(&function);

    assert_eq!(frame.lookup("x"), Some(-16));
}

#[test]
fn stack_passed_parameters_resolve_into_the_callers_frame() {
    let params = ["p0", "p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8"];
    let function = make_function("f", &params, AstStatement::Return(var("p8")));

    let frame = FrameLayout::build(&function);

    // Nine slots round up to 80; the ninth parameter sits above the frame in the
    // caller's 16-byte argument slots.
    assert_eq!(frame.frame_size(), 80);
    assert_eq!(frame.lookup("p7"), Some(-64));
    assert_eq!(frame.lookup("p8"), Some(96));
}
