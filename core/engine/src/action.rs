//! FILENAME: core/engine/src/action.rs
//! PURPOSE: The closed set of user intents the calculator understands.
//! CONTEXT: The presentation layer sends one of these per button press.
//! On the wire an action is a tagged object `{ "type": ..., "payload": {...} }`,
//! decoded here into the typed `Action` enum before it reaches the reducer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EngineError;

/// A binary arithmetic operation offered on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// The symbol shown on the keypad and in the display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "÷",
        }
    }

    pub fn from_symbol(symbol: &str) -> Result<Self, EngineError> {
        Operation::ALL
            .into_iter()
            .find(|op| op.symbol() == symbol)
            .ok_or_else(|| EngineError::UnknownOperation(symbol.to_string()))
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single user intent. Each variant carries only the payload it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a digit ('0'..='9') or the decimal point to the current operand.
    AddDigit(char),
    DeleteDigit,
    ChooseOperation(Operation),
    Clear,
    Evaluate,
}

impl Action {
    /// The wire tag for this action.
    pub fn tag(&self) -> &'static str {
        match self {
            Action::AddDigit(_) => "add_digit",
            Action::DeleteDigit => "delete_digit",
            Action::ChooseOperation(_) => "choose_operation",
            Action::Clear => "clear",
            Action::Evaluate => "evaluate",
        }
    }
}

/// Returns true for the characters a digit key may carry.
pub fn is_digit_key(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

// ============================================================================
// WIRE DECODING
// ============================================================================

/// Raw tagged form of an action as produced by the frontend.
#[derive(Debug, Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

/// Decode a JSON action.
///
/// Returns `Ok(None)` for a well-formed action whose tag is not part of the
/// closed set; callers leave the state unchanged in that case.
pub fn decode_action(json: &str) -> Result<Option<Action>, EngineError> {
    let raw: RawAction =
        serde_json::from_str(json).map_err(|e| EngineError::MalformedAction(e.to_string()))?;

    let action = match raw.kind.as_str() {
        "add_digit" => {
            let digit = payload_str(&raw.payload, "digit")?;
            Action::AddDigit(parse_digit(digit)?)
        }
        "delete_digit" => Action::DeleteDigit,
        "choose_operation" => {
            let symbol = payload_str(&raw.payload, "operation")?;
            Action::ChooseOperation(Operation::from_symbol(symbol)?)
        }
        "clear" => Action::Clear,
        "evaluate" => Action::Evaluate,
        _ => return Ok(None),
    };

    Ok(Some(action))
}

fn payload_str<'a>(payload: &'a Value, field: &str) -> Result<&'a str, EngineError> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| EngineError::MalformedAction(format!("missing string payload field '{}'", field)))
}

/// A digit payload must be exactly one digit character or ".".
pub fn parse_digit(text: &str) -> Result<char, EngineError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_digit_key(c) => Ok(c),
        _ => Err(EngineError::InvalidDigit(text.to_string())),
    }
}
