//! FILENAME: app/src/host.rs
// PURPOSE: Line-oriented host loop that lets any frontend drive the calculator.
// CONTEXT: Reads one request per line and answers each with one JSON line.
//
// REQUESTS:
// - {"type": "...", "payload": {...}}  a JSON action
// - 1 2 + 3 =                          whitespace-separated key labels
// - :state                             raw state snapshot
// - :keypad                            keypad layout
// - :locale <tag>                      switch digit grouping

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::commands;
use crate::error::AppError;
use crate::AppState;
use crate::{log_debug, log_info};

/// Run until the input is exhausted. Returns the number of requests handled.
pub fn run_host<R: BufRead, W: Write>(
    state: &AppState,
    input: R,
    mut output: W,
) -> Result<usize, AppError> {
    log_info!("HOST", "host loop started");
    let mut handled = 0;

    for line in input.lines() {
        let line = line?;
        let request = line.trim();
        if request.is_empty() {
            continue;
        }

        log_debug!("HOST", "request {:?}", request);
        handle_request(state, request, &mut output)?;
        handled += 1;
    }

    log_info!("HOST", "input closed after {} requests", handled);
    Ok(handled)
}

fn handle_request<W: Write>(state: &AppState, request: &str, output: &mut W) -> Result<(), AppError> {
    if request == ":state" {
        return write_line(output, &commands::get_state(state));
    }
    if request == ":keypad" {
        return write_line(output, &commands::get_keypad());
    }
    if let Some(tag) = request.strip_prefix(":locale") {
        return write_line(output, &commands::set_locale(state, tag.trim()));
    }

    let display = if request.starts_with('{') {
        commands::dispatch_json(state, request)
    } else {
        let labels: Vec<&str> = request.split_whitespace().collect();
        commands::press_buttons(state, &labels)
    };

    write_line(output, &display)
}

fn write_line<W: Write, T: Serialize>(output: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer(&mut *output, value)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
