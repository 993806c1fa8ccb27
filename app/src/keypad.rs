//! FILENAME: app/src/keypad.rs
// PURPOSE: The keypad layout and the mapping from key labels to actions.
// CONTEXT: Labels are what the frontend sends when a key is pressed.

use engine::{parse_digit, Action, Operation};

use crate::api_types::ButtonData;

pub const CLEAR_LABEL: &str = "AC";
pub const DELETE_LABEL: &str = "DEL";
pub const EQUALS_LABEL: &str = "=";

/// Keys in render order, four columns per row.
pub const LAYOUT: [&str; 18] = [
    CLEAR_LABEL, DELETE_LABEL, "÷",
    "1", "2", "3", "*",
    "4", "5", "6", "+",
    "7", "8", "9", "-",
    ".", "0", EQUALS_LABEL,
];

/// Map a key label to its action. Unknown labels yield None.
///
/// "/" is accepted as an alias for "÷" so the keypad can be driven from a
/// plain keyboard; the engine itself only knows the four keypad symbols.
pub fn action_for_label(label: &str) -> Option<Action> {
    match label {
        l if l.eq_ignore_ascii_case(CLEAR_LABEL) => Some(Action::Clear),
        l if l.eq_ignore_ascii_case(DELETE_LABEL) => Some(Action::DeleteDigit),
        EQUALS_LABEL => Some(Action::Evaluate),
        "/" => Some(Action::ChooseOperation(Operation::Divide)),
        _ => Operation::from_symbol(label)
            .map(Action::ChooseOperation)
            .or_else(|_| parse_digit(label).map(Action::AddDigit))
            .ok(),
    }
}

/// The full keypad description sent to the frontend.
pub fn keypad() -> Vec<ButtonData> {
    LAYOUT
        .iter()
        .filter_map(|label| {
            let action = action_for_label(label)?;
            let span = if matches!(action, Action::Clear | Action::Evaluate) { 2 } else { 1 };
            Some(ButtonData {
                label: label.to_string(),
                action: action.tag().to_string(),
                span,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_layout_key_has_an_action() {
        for label in LAYOUT {
            assert!(action_for_label(label).is_some(), "no action for {}", label);
        }
    }

    #[test]
    fn test_label_mapping() {
        assert_eq!(action_for_label("AC"), Some(Action::Clear));
        assert_eq!(action_for_label("del"), Some(Action::DeleteDigit));
        assert_eq!(action_for_label("="), Some(Action::Evaluate));
        assert_eq!(action_for_label("7"), Some(Action::AddDigit('7')));
        assert_eq!(action_for_label("."), Some(Action::AddDigit('.')));
        assert_eq!(action_for_label("*"), Some(Action::ChooseOperation(Operation::Multiply)));
        assert_eq!(action_for_label("/"), Some(Action::ChooseOperation(Operation::Divide)));
        assert_eq!(action_for_label("%"), None);
        assert_eq!(action_for_label("12"), None);
    }

    #[test]
    fn test_keypad_spans() {
        let keys = keypad();
        assert_eq!(keys.len(), LAYOUT.len());
        let wide: Vec<&str> = keys
            .iter()
            .filter(|k| k.span == 2)
            .map(|k| k.label.as_str())
            .collect();
        assert_eq!(wide, vec!["AC", "="]);
        // 2 + 1 + 1 + 4 * 3 + 1 + 1 + 2 = 20 columns = five rows of four
        let columns: u32 = keys.iter().map(|k| k.span as u32).sum();
        assert_eq!(columns, 20);
    }
}
