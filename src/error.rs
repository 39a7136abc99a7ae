//! Error types for contact-sweep.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! File discovery and load failures are fatal for a single run; per-cell data-quality
//! problems never appear here — they are absorbed into sentinel cells and validity
//! flags inside the pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating the input file.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// No file with the expected extension was found in the working directory.
    #[error("no .{} file found in {}", extension, dir.display())]
    NoCandidates { dir: PathBuf, extension: String },

    /// More than one candidate file was found; the run refuses to choose.
    #[error("{count} .{extension} files found; only one input file can be cleaned per run")]
    TooManyCandidates { count: usize, extension: String },

    /// Reading the directory failed.
    #[error("failed to scan directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while loading the input table.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Every attempted (encoding, delimiter) combination failed.
    #[error("no parse candidate succeeded for {}: {}", path.display(), attempts.join("; "))]
    Unparsable { path: PathBuf, attempts: Vec<String> },

    /// The file parsed but contained no data rows.
    #[error("input file is empty")]
    Empty,

    /// The header row contained none of the expected columns.
    #[error("no expected column found in header")]
    NoKnownColumns,

    /// Workbook-level XLSX failure (missing sheet, corrupt archive).
    #[error("failed to read workbook: {0}")]
    Workbook(String),

    /// CSV parse failure for a single attempt.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while building the run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration field has an invalid value.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    /// A dedup key or schema column does not exist in the final column list.
    #[error("unknown column {column:?} in {context}")]
    UnknownColumn { column: String, context: String },
}

/// Errors that can occur while writing the cleaned output file.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Creating the output directory or file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a record failed.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results with DiscoveryError
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// Convenience type alias for Results with LoadError
pub type LoadResult<T> = Result<T, LoadError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with OutputError
pub type OutputResult<T> = Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DiscoveryError::TooManyCandidates {
            count: 3,
            extension: "xlsx".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "3 .xlsx files found; only one input file can be cleaned per run"
        );

        let err = ConfigError::UnknownColumn {
            column: "telefone".to_string(),
            context: "dedup keys".to_string(),
        };
        assert!(err.to_string().contains("telefone"));

        let err = LoadError::Empty;
        assert_eq!(err.to_string(), "input file is empty");
    }

    #[test]
    fn test_unparsable_lists_attempts() {
        let err = LoadError::Unparsable {
            path: PathBuf::from("contacts.csv"),
            attempts: vec!["utf-8 + ','".to_string(), "windows-1252 + ';'".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("contacts.csv"));
        assert!(msg.contains("utf-8 + ','"));
        assert!(msg.contains("windows-1252 + ';'"));
    }
}
