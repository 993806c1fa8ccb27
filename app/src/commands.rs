//! FILENAME: app/src/commands.rs
// PURPOSE: Commands the frontend invokes against the calculator state.
// CONTEXT: Every command replaces the state wholesale under the lock and
//          returns the new display. Bad input is logged and ignored.

use engine::{apply_actions, decode_action, transition, Action, CalculatorState, GroupingStyle};

use crate::api_types::{ButtonData, DisplayData};
use crate::keypad;
use crate::AppState;
use crate::{log_debug, log_enter, log_exit, log_info, log_warn};

fn display_of(state: &AppState, calculator: &CalculatorState) -> DisplayData {
    let grouping = state.grouping();
    DisplayData::from_state(calculator, &grouping)
}

/// Apply one action and return the new display.
pub fn dispatch_action(state: &AppState, action: Action) -> DisplayData {
    log_enter!("CMD", "dispatch_action", "action={:?}", action);

    let next = {
        let mut calculator = state.calculator();
        let next = transition(&calculator, &action);
        if next == *calculator {
            log_debug!("CMD", "{} left state unchanged", action.tag());
        }
        *calculator = next.clone();
        next
    };

    let display = display_of(state, &next);
    log_exit!(
        "CMD",
        "dispatch_action",
        "display={:?} {:?} {:?}",
        display.previous_operand,
        display.operation,
        display.current_operand
    );
    display
}

/// Decode and apply a JSON action. Unknown tags and malformed input are no-ops.
pub fn dispatch_json(state: &AppState, json: &str) -> DisplayData {
    match decode_action(json) {
        Ok(Some(action)) => dispatch_action(state, action),
        Ok(None) => {
            log_warn!("CMD", "ignoring action with unknown type: {}", json);
            get_display(state)
        }
        Err(e) => {
            log_warn!("CMD", "ignoring action: {}", e);
            get_display(state)
        }
    }
}

/// Press a keypad key by its label.
pub fn press_button(state: &AppState, label: &str) -> DisplayData {
    match keypad::action_for_label(label) {
        Some(action) => dispatch_action(state, action),
        None => {
            log_warn!("CMD", "ignoring unknown key label {:?}", label);
            get_display(state)
        }
    }
}

/// Press a sequence of keys as one update. Unknown labels are skipped.
pub fn press_buttons(state: &AppState, labels: &[&str]) -> DisplayData {
    log_enter!("CMD", "press_buttons", "labels={:?}", labels);

    let actions: Vec<Action> = labels
        .iter()
        .filter_map(|label| {
            let action = keypad::action_for_label(label);
            if action.is_none() {
                log_warn!("CMD", "ignoring unknown key label {:?}", label);
            }
            action
        })
        .collect();

    let next = {
        let mut calculator = state.calculator();
        let next = apply_actions(&calculator, &actions);
        *calculator = next.clone();
        next
    };

    let display = display_of(state, &next);
    log_exit!("CMD", "press_buttons", "applied {} actions", actions.len());
    display
}

pub fn get_display(state: &AppState) -> DisplayData {
    let calculator = state.calculator().clone();
    display_of(state, &calculator)
}

/// Raw state snapshot, for diagnostics.
pub fn get_state(state: &AppState) -> CalculatorState {
    state.calculator().clone()
}

pub fn get_keypad() -> Vec<ButtonData> {
    keypad::keypad()
}

/// Switch the grouping locale. Operands are untouched; only the display changes.
pub fn set_locale(state: &AppState, locale: &str) -> DisplayData {
    let style = GroupingStyle::for_locale(locale);
    log_info!("CMD", "set_locale {} separator={:?}", locale, style.separator);
    state.set_grouping(style);
    get_display(state)
}
