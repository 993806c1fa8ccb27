//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for calculator bridge integration tests.

#![allow(dead_code)]

use app_lib::commands;
use app_lib::{create_app_state, AppState, DisplayData};
use engine::{CalculatorState, Operation};

/// Test harness for creating and driving an app state.
pub struct TestHarness {
    pub state: AppState,
}

impl TestHarness {
    /// Create a new test harness with the initial state.
    pub fn new() -> Self {
        TestHarness {
            state: create_app_state(),
        }
    }

    /// Create a harness whose state has `previous <op>` pending and `current` typed.
    pub fn with_pending(previous: &str, operation: Operation, current: &str) -> Self {
        let harness = Self::new();
        *harness.state.calculator() = CalculatorState {
            previous_operand: Some(previous.to_string()),
            operation: Some(operation),
            current_operand: Some(current.to_string()),
            overwrite: false,
        };
        harness
    }

    /// Press each whitespace-separated key label; returns the last display.
    pub fn press(&self, keys: &str) -> DisplayData {
        let mut display = commands::get_display(&self.state);
        for label in keys.split_whitespace() {
            display = commands::press_button(&self.state, label);
        }
        display
    }

    pub fn snapshot(&self) -> CalculatorState {
        commands::get_state(&self.state)
    }
}

/// Assert the two display rows.
pub fn assert_display(display: &DisplayData, previous_line: &str, current: &str) {
    assert_eq!(display.previous_line(), previous_line, "previous row of {:?}", display);
    assert_eq!(display.current_operand, current, "current row of {:?}", display);
}
