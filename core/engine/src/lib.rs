//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the calculator engine.
//! CONTEXT: Re-exports public types and modules for use by the app bridge.
//!
//! PIPELINE: Action JSON --> decode_action --> Action --> transition --> State --> format_operand
//!
//! The engine is pure: no I/O, no logging, no global state.

pub mod action;
pub mod error;
pub mod evaluator;
pub mod number_format;
pub mod number_text;
pub mod reducer;
pub mod state;


// Re-export commonly used types at the crate root
pub use action::{decode_action, parse_digit, Action, Operation};
pub use error::EngineError;
pub use evaluator::{apply, evaluate};
pub use number_format::{format_integer_grouped, format_operand, format_operand_with, GroupingStyle, FRACTION_JOIN};
pub use number_text::{number_to_string, parse_operand};
pub use reducer::{apply_actions, transition};
pub use state::CalculatorState;
