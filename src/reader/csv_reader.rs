//! CSV loading with encoding/delimiter candidates.
//!
//! The exports this tool cleans come from whatever spreadsheet editor the
//! campaign volunteers had at hand, so neither the text encoding nor the
//! field separator can be trusted. Instead of sniffing heuristically, the
//! reader folds over a small ordered list of (encoding, delimiter)
//! candidates and keeps the first one that parses into a usable table.
//! Each attempt is isolated; a failure never corrupts the next try.

use crate::domain::Cell;
use crate::error::{LoadError, LoadResult};
use crate::models::Table;
use crate::reader::TableReader;
use encoding_rs::{Encoding, UTF_8};
use std::path::Path;
use tracing::{debug, info};

/// Delimiters tried for every candidate encoding.
const DELIMITERS: [u8; 2] = [b',', b';'];

/// CSV reader restricted to an allow-list of column names.
pub struct CsvReader {
    columns: Vec<String>,
    fallback_encoding: &'static Encoding,
}

impl CsvReader {
    /// Create a reader for the given column allow-list.
    ///
    /// `fallback_encoding` is tried after the sniffed encoding and before
    /// the UTF-8 last resort; legacy exports around here are usually
    /// latin1/windows-1252.
    pub fn new(columns: Vec<String>, fallback_encoding: &'static Encoding) -> Self {
        Self {
            columns,
            fallback_encoding,
        }
    }

    /// Ordered candidate encodings: BOM-sniffed (UTF-8 when no BOM is
    /// present), the configured fallback, then strict UTF-8. Duplicates
    /// are collapsed while preserving order.
    fn candidate_encodings(&self, bytes: &[u8]) -> Vec<&'static Encoding> {
        let sniffed = Encoding::for_bom(bytes)
            .map(|(encoding, _)| encoding)
            .unwrap_or(UTF_8);

        let mut encodings: Vec<&'static Encoding> = Vec::new();
        for candidate in [sniffed, self.fallback_encoding, UTF_8] {
            if !encodings.contains(&candidate) {
                encodings.push(candidate);
            }
        }
        encodings
    }

    /// Parse decoded text with one delimiter, projecting onto the
    /// allow-list.
    fn parse(&self, text: &str, delimiter: u8) -> LoadResult<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        let projection: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter_map(|(idx, header)| {
                let header = header.trim();
                self.columns
                    .iter()
                    .any(|c| c == header)
                    .then(|| (idx, header.to_string()))
            })
            .collect();

        if projection.is_empty() {
            return Err(LoadError::NoKnownColumns);
        }

        let mut table = Table::new(projection.iter().map(|(_, name)| name.clone()).collect());
        for record in reader.records() {
            let record = record?;
            table.push_row(
                projection
                    .iter()
                    .map(|(idx, _)| Cell::from_raw(record.get(*idx).unwrap_or("")))
                    .collect(),
            );
        }

        if table.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(table)
    }
}

impl TableReader for CsvReader {
    fn read(&self, path: &Path) -> LoadResult<Table> {
        let bytes = std::fs::read(path)?;
        let mut attempts = Vec::new();

        for encoding in self.candidate_encodings(&bytes) {
            let (text, _, had_errors) = encoding.decode(&bytes);
            if had_errors {
                attempts.push(format!("{}: decode error", encoding.name()));
                debug!(encoding = encoding.name(), "decoding failed, trying next");
                continue;
            }

            for delimiter in DELIMITERS {
                let delim_char = delimiter as char;
                match self.parse(&text, delimiter) {
                    Ok(table) => {
                        info!(
                            encoding = encoding.name(),
                            delimiter = %delim_char,
                            rows = table.len(),
                            "input parsed"
                        );
                        return Ok(table);
                    }
                    Err(err) => {
                        debug!(
                            encoding = encoding.name(),
                            delimiter = %delim_char,
                            %err,
                            "parse candidate failed, trying next"
                        );
                        attempts.push(format!(
                            "{} + '{}': {}",
                            encoding.name(),
                            delim_char,
                            err
                        ));
                    }
                }
            }
        }

        Err(LoadError::Unparsable {
            path: path.to_path_buf(),
            attempts,
        })
    }
}
