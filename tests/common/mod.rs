#![allow(dead_code)]

use std::path::Path;

use launchlog::fs::FileSystem;

#[allow(unused_imports)]
pub use launchlog_test_utils::init_tracing;

/// All lines currently in the log, or none if it doesn't exist yet.
pub fn log_lines(fs: &dyn FileSystem, path: &Path) -> Vec<String> {
    fs.read_to_string(path)
        .map(|text| text.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn is_start_marker(line: &str) -> bool {
    line.starts_with("==== Starting at ") && line.ends_with(" ====")
}

pub fn is_finished_marker(line: &str) -> bool {
    line.starts_with("Finished. ")
}
