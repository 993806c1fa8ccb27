//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point (frontend bridge).
// CONTEXT: Owns the single calculator state and exposes the commands a
//          keypad frontend calls. The engine does the work; this crate
//          adds state ownership, logging and configuration.

use std::sync::{Mutex, MutexGuard};

use engine::{CalculatorState, GroupingStyle};

pub mod api_types;
pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod keypad;
pub mod logging;

pub use api_types::{ButtonData, DisplayData};
pub use config::AppConfig;
pub use error::AppError;
pub use logging::{get_log_path, init_log_file, next_seq, write_log};

// ============================================================================
// APPLICATION STATE
// ============================================================================

pub struct AppState {
    /// The one calculator state; replaced wholesale by every command.
    pub calculator: Mutex<CalculatorState>,
    /// Digit grouping used when formatting the display.
    pub grouping: Mutex<GroupingStyle>,
}

impl AppState {
    /// Lock the calculator state. A poisoned lock still holds a whole,
    /// valid state because commands only ever assign complete values.
    pub fn calculator(&self) -> MutexGuard<'_, CalculatorState> {
        self.calculator.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn grouping(&self) -> GroupingStyle {
        self.grouping
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn set_grouping(&self, style: GroupingStyle) {
        *self.grouping.lock().unwrap_or_else(|e| e.into_inner()) = style;
    }
}

/// State with en-US grouping.
pub fn create_app_state() -> AppState {
    log_info!("SYS", "Creating AppState");
    AppState {
        calculator: Mutex::new(CalculatorState::new()),
        grouping: Mutex::new(GroupingStyle::en_us()),
    }
}

/// State with the grouping resolved from configuration.
pub fn create_app_state_with(config: &AppConfig) -> AppState {
    let grouping = config.grouping();
    log_info!(
        "SYS",
        "Creating AppState locale={} separator={:?}",
        config.resolved_locale(),
        grouping.separator
    );
    AppState {
        calculator: Mutex::new(CalculatorState::new()),
        grouping: Mutex::new(grouping),
    }
}

/// Load configuration, start logging and serve stdin/stdout until EOF.
pub fn run() -> Result<(), AppError> {
    let config = AppConfig::load(std::env::args_os().nth(1).map(Into::into))?;

    match init_log_file(config.log_path.as_deref()) {
        Ok(path) => {
            log_info!("SYS", "calculator starting, log={}", path.display());
        }
        Err(e) => {
            eprintln!("[LOG_INIT] FAILED: {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
        }
    }

    let state = create_app_state_with(&config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let handled = host::run_host(&state, stdin.lock(), stdout.lock())?;

    log_info!("SYS", "calculator exiting after {} requests", handled);
    Ok(())
}
