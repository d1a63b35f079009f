// Copyright 2025-2026 Neil Henderson

use super::super::label_maker::AsmLabelMaker;

#[test]
fn unique_labels() {
    let mut maker = AsmLabelMaker::new();

    let lb1 = maker.make_unique_label("while_start");
    let lb2 = maker.make_unique_label("while_start");
    let lb3 = maker.make_unique_label("while_end");

    assert_ne!(lb1, lb2);
    assert_ne!(lb1, lb3);
    assert_ne!(lb2, lb3);
}

#[test]
fn labels_are_prefix_then_counter() {
    let mut maker = AsmLabelMaker::new();

    assert_eq!(maker.make_unique_label("if_else").0, "if_else_0");
    assert_eq!(maker.make_unique_label("if_end").0, "if_end_1");
    assert_eq!(maker.make_unique_label("if_else").0, "if_else_2");
}

#[test]
fn counter_is_shared_across_prefixes() {
    // The counter is global to one translation, so labels never collide even when
    // prefixes repeat across functions.
    let mut maker = AsmLabelMaker::new();

    let lb1 = maker.make_unique_label("and_false");
    let lb2 = maker.make_unique_label("or_true");
    let lb3 = maker.make_unique_label("and_false");

    assert_eq!(lb1.0, "and_false_0");
    assert_eq!(lb2.0, "or_true_1");
    assert_eq!(lb3.0, "and_false_2");
}

#[test]
fn epilogue_labels_use_the_function_name() {
    let maker = AsmLabelMaker::new();

    assert_eq!(maker.make_epilogue_label("main").0, "_epilogue_main");
    assert_eq!(maker.make_epilogue_label("calculate").0, "_epilogue_calculate");
}
