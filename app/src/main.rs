//! FILENAME: app/src/main.rs
// PURPOSE: Entry point. Serves the line protocol on stdin/stdout.
// USAGE: calculator [config.json]

fn main() {
    if let Err(e) = app_lib::run() {
        eprintln!("calculator: {}", e);
        std::process::exit(1);
    }
}
