//! FILENAME: tests/test_logging.rs
//! The unified log file is process-global, so this binary holds a single test.

use app_lib::commands::press_button;
use app_lib::{create_app_state, get_log_path, init_log_file, write_log};

#[test]
fn test_unified_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("calc.log");

    let opened = init_log_file(Some(&path)).unwrap();
    assert_eq!(opened, path);
    assert_eq!(get_log_path(), Some(path.clone()));

    write_log("I", "TEST", "hello");
    let state = create_app_state();
    press_button(&state, "7");
    press_button(&state, "bogus");

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[0].contains("|I|SYS|session started"));
    assert!(lines.iter().any(|l| l.ends_with("|I|TEST|hello")));
    assert!(lines.iter().any(|l| l.contains("|D|CMD|ENTER dispatch_action")));
    assert!(lines.iter().any(|l| l.contains("|W|CMD|ignoring unknown key label")));

    // Sequence numbers are strictly increasing.
    let seqs: Vec<u64> = lines
        .iter()
        .map(|l| l.split('|').next().unwrap().parse().unwrap())
        .collect();
    assert!(seqs.windows(2).all(|w| w[0] < w[1]));
}
