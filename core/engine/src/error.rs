//! FILENAME: core/engine/src/error.rs

use thiserror::Error;

/// Errors raised while decoding inbound actions.
/// The reducer itself is total and never produces these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Malformed action: {0}")]
    MalformedAction(String),

    #[error("Invalid digit: {0:?}")]
    InvalidDigit(String),

    #[error("Unknown operation: {0:?}")]
    UnknownOperation(String),
}
