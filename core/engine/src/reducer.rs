//! FILENAME: core/engine/src/reducer.rs
//! PURPOSE: The calculator state machine.
//! CONTEXT: `transition` is a pure, total function: every (state, action)
//! pair yields a new state and nothing else happens. The logical modes are
//! carried by the state fields themselves:
//!
//! - empty:                  no operands
//! - entering first operand: current only
//! - operator chosen:        previous + operation
//! - entering second:        previous + operation + current
//! - result displayed:       current + overwrite
//!
//! Operator chaining ("3 + 4 *") evaluates the pending operation and
//! continues with the new operator.

use crate::action::{Action, Operation};
use crate::evaluator::evaluate;
use crate::state::{operand, CalculatorState};

/// Compute the state that follows `action`.
pub fn transition(state: &CalculatorState, action: &Action) -> CalculatorState {
    match *action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::DeleteDigit => delete_digit(state),
        Action::ChooseOperation(operation) => choose_operation(state, operation),
        Action::Clear => CalculatorState::new(),
        Action::Evaluate => evaluate_pending(state),
    }
}

/// Fold a sequence of actions over a starting state.
pub fn apply_actions<'a, I>(state: &CalculatorState, actions: I) -> CalculatorState
where
    I: IntoIterator<Item = &'a Action>,
{
    actions
        .into_iter()
        .fold(state.clone(), |acc, action| transition(&acc, action))
}

fn add_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current().unwrap_or("");

    // No "00", and at most one decimal point.
    if digit == '0' && current == "0" {
        return state.clone();
    }
    if digit == '.' && current.contains('.') {
        return state.clone();
    }

    let mut text = String::with_capacity(current.len() + 1);
    text.push_str(current);
    text.push(digit);

    CalculatorState {
        current_operand: Some(text),
        ..state.clone()
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    // A displayed result is discarded entirely, not trimmed.
    if state.overwrite {
        return CalculatorState {
            overwrite: false,
            current_operand: None,
            ..state.clone()
        };
    }

    let current = match state.current() {
        Some(current) => current,
        None => return state.clone(),
    };

    let mut chars = current.chars();
    chars.next_back();
    let remaining = chars.as_str();

    CalculatorState {
        current_operand: operand(remaining.to_string()),
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, operation: Operation) -> CalculatorState {
    match (state.previous(), state.current()) {
        (None, None) => state.clone(),
        (None, Some(current)) => CalculatorState {
            operation: Some(operation),
            previous_operand: Some(current.to_string()),
            current_operand: None,
            ..state.clone()
        },
        // Changing the operator before the second operand is typed.
        (Some(_), None) => CalculatorState {
            operation: Some(operation),
            ..state.clone()
        },
        (Some(_), Some(_)) => CalculatorState {
            operation: Some(operation),
            previous_operand: operand(evaluate(state)),
            current_operand: None,
            ..state.clone()
        },
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    if !state.has_pending_operation() {
        return state.clone();
    }

    CalculatorState {
        overwrite: true,
        previous_operand: None,
        operation: None,
        current_operand: operand(evaluate(state)),
    }
}
