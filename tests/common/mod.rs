//! Shared fixtures for the integration tests.
#![allow(dead_code)] // not every test binary uses every helper

use contact_sweep::reader::InputFormat;
use contact_sweep::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary working directory holding one CSV input file.
pub struct CsvFixture {
    pub dir: TempDir,
    pub input: PathBuf,
}

/// Write a CSV input file into a fresh working directory.
pub fn csv_fixture(name: &str, content: &str) -> CsvFixture {
    let dir = tempfile::tempdir().expect("create tempdir");
    let input = dir.path().join(name);
    std::fs::write(&input, content).expect("write fixture");
    CsvFixture { dir, input }
}

/// Default configuration pointed at a CSV working directory, with the
/// interactive pause disabled.
pub fn csv_config(dir: &Path) -> Config {
    Config {
        input_dir: dir.to_path_buf(),
        output_dir: dir.to_path_buf(),
        format: InputFormat::Csv,
        pause_on_exit: false,
        ..Config::default()
    }
}

/// Parse the written cleaned file back into rows of strings.
pub fn read_output(path: &Path, delimiter: u8) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .from_path(path)
        .expect("open output");
    reader
        .records()
        .map(|record| {
            record
                .expect("parse output record")
                .iter()
                .map(|field| field.to_string())
                .collect()
        })
        .collect()
}
