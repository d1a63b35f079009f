// Copyright 2025-2026 Neil Henderson
//
//! The `expr` module lowers MinC expressions.
//!
//! Contract: every expression leaves its evaluated 64-bit value in `x0`. A binary
//! operator saves its left operand in the scratch register selected by the current
//! nesting depth, so the right operand can only disturb higher-numbered scratches.
//! Nesting deeper than the seven-register pool saturates at `x15` and is unsupported.

use crate::ICE;
use crate::ast::{AstBinaryOp, AstExpression, AstUnaryOp};
use crate::error::CodegenError;

use super::Generator;
use super::super::ast::{AsmBinaryOp, AsmInstruction, ConditionCode};
use super::super::frame::FrameLayout;
use super::super::registers::{HwRegister, MAX_REGISTER_ARGS};

/// Each pushed call argument occupies its own 16-byte slot to keep `sp` aligned.
const ARG_SLOT_SIZE: i64 = 16;

/// Lowers an expression, leaving its value in `x0`.
pub fn generate_expression(
    expr: &AstExpression,
    depth: usize,
    frame: &FrameLayout,
    generator: &mut Generator,
    instructions: &mut Vec<AsmInstruction>,
) -> Result<(), CodegenError> {
    match expr {
        AstExpression::IntLiteral(value) => {
            instructions.push(AsmInstruction::MovImm { dst: HwRegister::X0, value: *value });
            Ok(())
        }

        AstExpression::Ident(name) => {
            let offset = resolve_variable(name, frame)?;
            instructions.push(AsmInstruction::Ldr { dst: HwRegister::X0, base: HwRegister::FP, offset });
            Ok(())
        }

        // Grouping is purely syntactic.
        AstExpression::Paren(inner) => generate_expression(inner, depth, frame, generator, instructions),

        AstExpression::Assignment { target, value } => {
            generate_expression(value, depth + 1, frame, generator, instructions)?;

            let offset = resolve_variable(target, frame)?;
            instructions.push(AsmInstruction::Str { src: HwRegister::X0, base: HwRegister::FP, offset });

            // The expression's result is the stored value, already in x0.
            Ok(())
        }

        AstExpression::Unary { op, operand } => {
            generate_expression(operand, depth + 1, frame, generator, instructions)?;

            match op {
                AstUnaryOp::Negate => {
                    instructions.push(AsmInstruction::Neg { dst: HwRegister::X0, src: HwRegister::X0 });
                }
                AstUnaryOp::LogicalNot => {
                    instructions.push(AsmInstruction::CmpImm { reg: HwRegister::X0, value: 0 });
                    instructions.push(AsmInstruction::CSet { dst: HwRegister::X0, cond: ConditionCode::Eq });
                }
            }

            Ok(())
        }

        AstExpression::Binary { op, left, right } => {
            generate_binary_operation(op, left, right, depth, frame, generator, instructions)
        }

        AstExpression::Call { callee, args } => {
            generate_call(callee, args, depth, frame, generator, instructions)
        }
    }
}

fn resolve_variable(name: &str, frame: &FrameLayout) -> Result<i64, CodegenError> {
    frame.lookup(name).ok_or_else(|| CodegenError::UndefinedVariable(name.to_string()))
}

fn generate_binary_operation(
    op: &AstBinaryOp,
    left: &AstExpression,
    right: &AstExpression,
    depth: usize,
    frame: &FrameLayout,
    generator: &mut Generator,
    instructions: &mut Vec<AsmInstruction>,
) -> Result<(), CodegenError> {
    match op {
        AstBinaryOp::LogicalAnd => generate_logical_and(left, right, depth, frame, generator, instructions),
        AstBinaryOp::LogicalOr => generate_logical_or(left, right, depth, frame, generator, instructions),
        _ if op.is_relational() => generate_comparison(op, left, right, depth, frame, generator, instructions),
        _ => generate_arithmetic(op, left, right, depth, frame, generator, instructions),
    }
}

fn generate_arithmetic(
    op: &AstBinaryOp,
    left: &AstExpression,
    right: &AstExpression,
    depth: usize,
    frame: &FrameLayout,
    generator: &mut Generator,
    instructions: &mut Vec<AsmInstruction>,
) -> Result<(), CodegenError> {
    // Immediate-operand peephole: a literal right operand needs no save of the left
    // value through a scratch register. Remainder has no immediate form.
    if let AstExpression::IntLiteral(value) = right
        && !matches!(op, AstBinaryOp::Remainder)
    {
        return generate_arithmetic_with_literal(op, left, *value, depth, frame, generator, instructions);
    }

    let scratch = HwRegister::scratch(depth);

    generate_expression(left, depth + 1, frame, generator, instructions)?;
    instructions.push(AsmInstruction::MovReg { dst: scratch, src: HwRegister::X0 });
    generate_expression(right, depth + 1, frame, generator, instructions)?;

    match op {
        AstBinaryOp::Add => instructions.push(AsmInstruction::Binary {
            op: AsmBinaryOp::Add,
            dst: HwRegister::X0,
            lhs: scratch,
            rhs: HwRegister::X0,
        }),
        AstBinaryOp::Subtract => instructions.push(AsmInstruction::Binary {
            op: AsmBinaryOp::Sub,
            dst: HwRegister::X0,
            lhs: scratch,
            rhs: HwRegister::X0,
        }),
        AstBinaryOp::Multiply => instructions.push(AsmInstruction::Binary {
            op: AsmBinaryOp::Mul,
            dst: HwRegister::X0,
            lhs: scratch,
            rhs: HwRegister::X0,
        }),
        AstBinaryOp::Divide => instructions.push(AsmInstruction::Binary {
            op: AsmBinaryOp::SDiv,
            dst: HwRegister::X0,
            lhs: scratch,
            rhs: HwRegister::X0,
        }),
        AstBinaryOp::Remainder => {
            // r = lhs - (lhs / rhs) * rhs. The right operand is fully evaluated, so its
            // scratch level is free to hold the quotient.
            let quotient = HwRegister::scratch(depth + 1);

            instructions.push(AsmInstruction::Binary {
                op: AsmBinaryOp::SDiv,
                dst: quotient,
                lhs: scratch,
                rhs: HwRegister::X0,
            });
            instructions.push(AsmInstruction::Binary {
                op: AsmBinaryOp::Mul,
                dst: quotient,
                lhs: quotient,
                rhs: HwRegister::X0,
            });
            instructions.push(AsmInstruction::Binary {
                op: AsmBinaryOp::Sub,
                dst: HwRegister::X0,
                lhs: scratch,
                rhs: quotient,
            });
        }
        _ => ICE!("Operator '{op}' is not an arithmetic operator"),
    }

    Ok(())
}

fn generate_arithmetic_with_literal(
    op: &AstBinaryOp,
    left: &AstExpression,
    value: i64,
    depth: usize,
    frame: &FrameLayout,
    generator: &mut Generator,
    instructions: &mut Vec<AsmInstruction>,
) -> Result<(), CodegenError> {
    generate_expression(left, depth + 1, frame, generator, instructions)?;

    match op {
        AstBinaryOp::Add => instructions.push(AsmInstruction::BinaryImm {
            op: AsmBinaryOp::Add,
            dst: HwRegister::X0,
            src: HwRegister::X0,
            value,
        }),
        AstBinaryOp::Subtract => instructions.push(AsmInstruction::BinaryImm {
            op: AsmBinaryOp::Sub,
            dst: HwRegister::X0,
            src: HwRegister::X0,
            value,
        }),
        AstBinaryOp::Multiply | AstBinaryOp::Divide => {
            // No immediate forms; load the literal into the scratch the operator would
            // have used anyway.
            let scratch = HwRegister::scratch(depth);
            let op = if matches!(op, AstBinaryOp::Multiply) { AsmBinaryOp::Mul } else { AsmBinaryOp::SDiv };

            instructions.push(AsmInstruction::MovImm { dst: scratch, value });
            instructions.push(AsmInstruction::Binary { op, dst: HwRegister::X0, lhs: HwRegister::X0, rhs: scratch });
        }
        _ => ICE!("Operator '{op}' has no immediate-operand form"),
    }

    Ok(())
}

/// Lowers both operands of a comparison and emits the `cmp`, leaving the result in the
/// condition flags. Shared with the compare-branch peephole in statement lowering.
pub fn generate_compare_operands(
    left: &AstExpression,
    right: &AstExpression,
    depth: usize,
    frame: &FrameLayout,
    generator: &mut Generator,
    instructions: &mut Vec<AsmInstruction>,
) -> Result<(), CodegenError> {
    let scratch = HwRegister::scratch(depth);

    generate_expression(left, depth + 1, frame, generator, instructions)?;
    instructions.push(AsmInstruction::MovReg { dst: scratch, src: HwRegister::X0 });
    generate_expression(right, depth + 1, frame, generator, instructions)?;
    instructions.push(AsmInstruction::Cmp { lhs: scratch, rhs: HwRegister::X0 });

    Ok(())
}

fn generate_comparison(
    op: &AstBinaryOp,
    left: &AstExpression,
    right: &AstExpression,
    depth: usize,
    frame: &FrameLayout,
    generator: &mut Generator,
    instructions: &mut Vec<AsmInstruction>,
) -> Result<(), CodegenError> {
    generate_compare_operands(left, right, depth, frame, generator, instructions)?;
    instructions.push(AsmInstruction::CSet { dst: HwRegister::X0, cond: condition_code_for(op) });

    Ok(())
}

/// The condition code materialized by the given relational operator.
pub fn condition_code_for(op: &AstBinaryOp) -> ConditionCode {
    match op {
        AstBinaryOp::LessThan => ConditionCode::Lt,
        AstBinaryOp::GreaterThan => ConditionCode::Gt,
        AstBinaryOp::LessThanOrEqualTo => ConditionCode::Le,
        AstBinaryOp::GreaterThanOrEqualTo => ConditionCode::Ge,
        AstBinaryOp::EqualTo => ConditionCode::Eq,
        AstBinaryOp::NotEqualTo => ConditionCode::Ne,
        _ => ICE!("Operator '{op}' is not a relational operator"),
    }
}

fn generate_logical_and(
    left: &AstExpression,
    right: &AstExpression,
    depth: usize,
    frame: &FrameLayout,
    generator: &mut Generator,
    instructions: &mut Vec<AsmInstruction>,
) -> Result<(), CodegenError> {
    let false_label = generator.labels.make_unique_label("and_false");
    let end_label = generator.labels.make_unique_label("and_end");

    // The right operand is evaluated only if the left was non-zero.
    generate_expression(left, depth + 1, frame, generator, instructions)?;
    instructions.push(AsmInstruction::CmpImm { reg: HwRegister::X0, value: 0 });
    instructions.push(AsmInstruction::BCond { cond: ConditionCode::Eq, target: false_label.clone() });

    generate_expression(right, depth + 1, frame, generator, instructions)?;
    instructions.push(AsmInstruction::CmpImm { reg: HwRegister::X0, value: 0 });
    instructions.push(AsmInstruction::BCond { cond: ConditionCode::Eq, target: false_label.clone() });

    instructions.push(AsmInstruction::MovImm { dst: HwRegister::X0, value: 1 });
    instructions.push(AsmInstruction::B { target: end_label.clone() });

    instructions.push(AsmInstruction::Label { id: false_label });
    instructions.push(AsmInstruction::MovImm { dst: HwRegister::X0, value: 0 });

    instructions.push(AsmInstruction::Label { id: end_label });

    Ok(())
}

fn generate_logical_or(
    left: &AstExpression,
    right: &AstExpression,
    depth: usize,
    frame: &FrameLayout,
    generator: &mut Generator,
    instructions: &mut Vec<AsmInstruction>,
) -> Result<(), CodegenError> {
    let true_label = generator.labels.make_unique_label("or_true");
    let end_label = generator.labels.make_unique_label("or_end");

    // The right operand is evaluated only if the left was zero.
    generate_expression(left, depth + 1, frame, generator, instructions)?;
    instructions.push(AsmInstruction::CmpImm { reg: HwRegister::X0, value: 0 });
    instructions.push(AsmInstruction::BCond { cond: ConditionCode::Ne, target: true_label.clone() });

    generate_expression(right, depth + 1, frame, generator, instructions)?;
    instructions.push(AsmInstruction::CmpImm { reg: HwRegister::X0, value: 0 });
    instructions.push(AsmInstruction::BCond { cond: ConditionCode::Ne, target: true_label.clone() });

    instructions.push(AsmInstruction::MovImm { dst: HwRegister::X0, value: 0 });
    instructions.push(AsmInstruction::B { target: end_label.clone() });

    instructions.push(AsmInstruction::Label { id: true_label });
    instructions.push(AsmInstruction::MovImm { dst: HwRegister::X0, value: 1 });

    instructions.push(AsmInstruction::Label { id: end_label });

    Ok(())
}

/// Lowers a function call, leaving the callee's return value in `x0`.
///
/// Arguments are evaluated right-to-left and pushed to the stack, so the leftmost
/// argument ends up on top; the first eight are then popped into `x0..x7`. Surplus
/// arguments stay in their pushed slots, each 16 bytes wide rather than the 8 the
/// procedure-call standard specifies, so externally-compiled callees cannot consume them.
fn generate_call(
    callee: &AstExpression,
    args: &[AstExpression],
    depth: usize,
    frame: &FrameLayout,
    generator: &mut Generator,
    instructions: &mut Vec<AsmInstruction>,
) -> Result<(), CodegenError> {
    for arg in args.iter().rev() {
        generate_expression(arg, depth + 1, frame, generator, instructions)?;
        instructions.push(AsmInstruction::Push { src: HwRegister::X0 });
    }

    let register_args = args.len().min(MAX_REGISTER_ARGS);
    for index in 0..register_args {
        instructions.push(AsmInstruction::Pop { dst: HwRegister::argument(index) });
    }

    // Reposition sp at the first stack argument for the call, and reclaim afterwards.
    let surplus = (args.len() - register_args) as i64;
    if surplus > 0 {
        instructions.push(AsmInstruction::BinaryImm {
            op: AsmBinaryOp::Sub,
            dst: HwRegister::SP,
            src: HwRegister::SP,
            value: ARG_SLOT_SIZE * surplus,
        });
    }

    if let AstExpression::Ident(name) = callee {
        instructions.push(AsmInstruction::Bl { callee: name.clone() });
    } else {
        generate_expression(callee, depth, frame, generator, instructions)?;
        instructions.push(AsmInstruction::Blr { target: HwRegister::X0 });
    }

    if surplus > 0 {
        instructions.push(AsmInstruction::BinaryImm {
            op: AsmBinaryOp::Add,
            dst: HwRegister::SP,
            src: HwRegister::SP,
            value: ARG_SLOT_SIZE * surplus,
        });
    }

    Ok(())
}
