// Copyright 2025-2026 Neil Henderson
//
//! The `stmt` module lowers MinC statements.
//!
//! Contract: after each statement, control has either fallen through to the next
//! instruction in source order or branched to a labeled target within the function.
//! Statements never leave a useful value in `x0`.

use crate::ast::{AstExpression, AstStatement};
use crate::error::CodegenError;

use super::{Generator, expr};
use super::super::ast::{AsmInstruction, AsmLabelName, ConditionCode};
use super::super::frame::FrameLayout;
use super::super::registers::HwRegister;

/// Lowers a statement.
pub fn generate_statement(
    stmt: &AstStatement,
    frame: &FrameLayout,
    return_label: &AsmLabelName,
    generator: &mut Generator,
    instructions: &mut Vec<AsmInstruction>,
) -> Result<(), CodegenError> {
    match stmt {
        AstStatement::Null => Ok(()),

        AstStatement::Expression(full_expr) => {
            // Lowered for its side effects only; the value left in x0 is discarded.
            expr::generate_expression(full_expr, 0, frame, generator, instructions)
        }

        AstStatement::Return(full_expr) => {
            expr::generate_expression(full_expr, 0, frame, generator, instructions)?;
            instructions.push(AsmInstruction::B { target: return_label.clone() });
            Ok(())
        }

        AstStatement::Break => {
            let target = generator.loops.current_break()?;
            instructions.push(AsmInstruction::B { target });
            Ok(())
        }

        AstStatement::Continue => {
            let target = generator.loops.current_continue()?;
            instructions.push(AsmInstruction::B { target });
            Ok(())
        }

        AstStatement::Compound { stmts, .. } => {
            // Declarations were already collected into the frame layout.
            for stmt in stmts {
                generate_statement(stmt, frame, return_label, generator, instructions)?;
            }
            Ok(())
        }

        AstStatement::If { controlling_expr, then_stmt, else_stmt } => generate_if_statement(
            controlling_expr,
            then_stmt,
            else_stmt.as_deref(),
            frame,
            return_label,
            generator,
            instructions,
        ),

        AstStatement::While { controlling_expr, body } => {
            generate_while_statement(controlling_expr, body, frame, return_label, generator, instructions)
        }
    }
}

fn generate_if_statement(
    controlling_expr: &AstExpression,
    then_stmt: &AstStatement,
    else_stmt: Option<&AstStatement>,
    frame: &FrameLayout,
    return_label: &AsmLabelName,
    generator: &mut Generator,
    instructions: &mut Vec<AsmInstruction>,
) -> Result<(), CodegenError> {
    let else_label = generator.labels.make_unique_label("if_else");
    let end_label = generator.labels.make_unique_label("if_end");

    generate_condition_branch(controlling_expr, &else_label, frame, generator, instructions)?;

    // Then clause
    generate_statement(then_stmt, frame, return_label, generator, instructions)?;
    instructions.push(AsmInstruction::B { target: end_label.clone() });

    // Else clause
    instructions.push(AsmInstruction::Label { id: else_label });
    if let Some(else_stmt) = else_stmt {
        generate_statement(else_stmt, frame, return_label, generator, instructions)?;
    }

    instructions.push(AsmInstruction::Label { id: end_label });

    Ok(())
}

fn generate_while_statement(
    controlling_expr: &AstExpression,
    body: &AstStatement,
    frame: &FrameLayout,
    return_label: &AsmLabelName,
    generator: &mut Generator,
    instructions: &mut Vec<AsmInstruction>,
) -> Result<(), CodegenError> {
    let start_label = generator.labels.make_unique_label("while_start");
    let end_label = generator.labels.make_unique_label("while_end");

    // `continue` re-evaluates the condition, so it shares the start label.
    generator.loops.push(end_label.clone(), start_label.clone());

    instructions.push(AsmInstruction::Label { id: start_label.clone() });
    generate_condition_branch(controlling_expr, &end_label, frame, generator, instructions)?;

    generate_statement(body, frame, return_label, generator, instructions)?;
    instructions.push(AsmInstruction::B { target: start_label });

    instructions.push(AsmInstruction::Label { id: end_label });
    generator.loops.pop();

    Ok(())
}

/// Lowers a controlling expression and branches to `false_target` when it evaluates
/// to zero.
///
/// A condition that is itself a comparison is lowered straight to the flags and branched
/// on the inverted condition, skipping the `cset` materialization. Anything else takes
/// the generic compare-with-zero path.
fn generate_condition_branch(
    cond: &AstExpression,
    false_target: &AsmLabelName,
    frame: &FrameLayout,
    generator: &mut Generator,
    instructions: &mut Vec<AsmInstruction>,
) -> Result<(), CodegenError> {
    if let AstExpression::Binary { op, left, right } = cond
        && op.is_relational()
    {
        expr::generate_compare_operands(left, right, 0, frame, generator, instructions)?;
        instructions.push(AsmInstruction::BCond {
            cond: expr::condition_code_for(op).inverse(),
            target: false_target.clone(),
        });

        return Ok(());
    }

    expr::generate_expression(cond, 0, frame, generator, instructions)?;
    instructions.push(AsmInstruction::CmpImm { reg: HwRegister::X0, value: 0 });
    instructions.push(AsmInstruction::BCond { cond: ConditionCode::Eq, target: false_target.clone() });

    Ok(())
}
