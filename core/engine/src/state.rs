//! FILENAME: core/engine/src/state.rs
//! PURPOSE: The calculator state value.
//! CONTEXT: A state is never mutated in place; the reducer returns a new one
//! for every action. Operands are kept as text so the display can show
//! exactly what was typed (trailing zeros, a lone decimal point).

use serde::{Deserialize, Serialize};

use crate::action::Operation;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// The operand being typed, or the last result.
    pub current_operand: Option<String>,
    /// Left-hand operand of the pending operation.
    pub previous_operand: Option<String>,
    pub operation: Option<Operation>,
    /// When set, the next digit replaces `current_operand` instead of appending.
    pub overwrite: bool,
}

impl CalculatorState {
    /// The state at startup and after `Clear`.
    pub fn new() -> Self {
        CalculatorState::default()
    }

    /// Current operand text, treating an empty string as absent.
    pub fn current(&self) -> Option<&str> {
        present(&self.current_operand)
    }

    /// Previous operand text, treating an empty string as absent.
    pub fn previous(&self) -> Option<&str> {
        present(&self.previous_operand)
    }

    /// True when both operands and an operation are available to evaluate.
    pub fn has_pending_operation(&self) -> bool {
        self.operation.is_some() && self.current().is_some() && self.previous().is_some()
    }
}

fn present(operand: &Option<String>) -> Option<&str> {
    operand.as_deref().filter(|s| !s.is_empty())
}

/// Store text as an operand; empty text becomes absent.
pub(crate) fn operand(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
