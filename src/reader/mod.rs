//! Input discovery and table loading.
//!
//! The core transform takes an explicit input path; scanning a working
//! directory for exactly one candidate file is a convenience wrapper in
//! [`discover`]. Loading goes through the [`TableReader`] seam so the
//! pipeline does not care whether the table came from a CSV export or a
//! spreadsheet.

pub mod csv_reader;
pub mod discover;
pub mod traits;
pub mod xlsx_reader;

pub use csv_reader::CsvReader;
pub use discover::discover_input;
pub use traits::TableReader;
pub use xlsx_reader::XlsxReader;

use clap::ValueEnum;
use std::fmt;

/// Supported input file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Comma/semicolon-separated text export.
    Csv,

    /// Excel workbook.
    Xlsx,
}

impl InputFormat {
    /// File extension used for discovery.
    pub fn extension(&self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
