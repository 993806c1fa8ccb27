//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Computes the result of the single pending binary operation.
//! CONTEXT: Arithmetic is plain IEEE-754 double arithmetic. Division by zero
//! is not guarded: it yields Infinity, -Infinity or NaN, and that text is
//! what the reducer stores as the result.

use crate::action::Operation;
use crate::number_text::{number_to_string, parse_operand};
use crate::state::CalculatorState;

/// Apply an operation to two numbers.
pub fn apply(operation: Operation, left: f64, right: f64) -> f64 {
    match operation {
        Operation::Add => left + right,
        Operation::Subtract => left - right,
        Operation::Multiply => left * right,
        Operation::Divide => left / right,
    }
}

/// Evaluate `previous_operand <operation> current_operand`.
///
/// Returns an empty string when either operand does not parse as a number
/// or no operation is pending. Callers render that as a blank display.
pub fn evaluate(state: &CalculatorState) -> String {
    let left = state.previous_operand.as_deref().and_then(parse_operand);
    let right = state.current_operand.as_deref().and_then(parse_operand);

    match (left, right, state.operation) {
        (Some(left), Some(right), Some(operation)) => number_to_string(apply(operation, left, right)),
        _ => String::new(),
    }
}
