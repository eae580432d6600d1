#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub mod integration;
pub mod utils;

/// Writes `contents` to a fresh temporary `.csv` file, removed on drop.
pub fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}
