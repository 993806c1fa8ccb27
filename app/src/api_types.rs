//! FILENAME: app/src/api_types.rs
// PURPOSE: Shared type definitions for frontend communication.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use engine::{format_operand_with, CalculatorState, GroupingStyle};
use serde::{Deserialize, Serialize};

/// What the display shows after every transition.
/// Only formatted text leaves the bridge; the overwrite flag stays internal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayData {
    pub previous_operand: String,
    /// Operation symbol, or "" when none is pending.
    pub operation: String,
    pub current_operand: String,
}

impl DisplayData {
    pub fn from_state(state: &CalculatorState, style: &GroupingStyle) -> Self {
        DisplayData {
            previous_operand: format_operand_with(state.previous().unwrap_or(""), style),
            operation: state
                .operation
                .map(|op| op.symbol().to_string())
                .unwrap_or_default(),
            current_operand: format_operand_with(state.current().unwrap_or(""), style),
        }
    }

    /// The upper display row: previous operand followed by the operation.
    pub fn previous_line(&self) -> String {
        match (self.previous_operand.is_empty(), self.operation.is_empty()) {
            (_, true) => self.previous_operand.clone(),
            (true, false) => self.operation.clone(),
            (false, false) => format!("{} {}", self.previous_operand, self.operation),
        }
    }
}

/// A keypad key as the frontend renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonData {
    pub label: String,
    /// Wire tag of the action the key sends.
    pub action: String,
    /// Grid columns the key occupies (1 or 2).
    pub span: u8,
}
