//! Duplicate-row removal by key-column subset.

use crate::domain::Cell;
use crate::models::Table;
use clap::ValueEnum;
use std::collections::HashMap;
use std::fmt;
use tracing::info;

/// Which occurrence survives when several rows share a duplicate key.
///
/// The historical variants of this tool disagreed on this, so it is an
/// explicit choice instead of a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeepPolicy {
    /// Keep the earliest submission of each duplicate key.
    First,

    /// Keep the latest submission of each duplicate key.
    Last,
}

impl fmt::Display for KeepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepPolicy::First => f.write_str("first"),
            KeepPolicy::Last => f.write_str("last"),
        }
    }
}

/// Remove rows whose key-column values exactly match another row's.
///
/// Missing cells participate in the key and compare equal to each other.
/// Surviving rows keep their original relative order. Returns the number
/// of rows removed; the caller's arithmetic
/// `input_rows - output_rows == removed` always holds.
pub fn deduplicate(table: &mut Table, key_columns: &[String], policy: KeepPolicy) -> usize {
    let key_indices: Vec<usize> = key_columns
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();
    if key_indices.is_empty() || table.is_empty() {
        return 0;
    }

    let keys: Vec<Vec<Cell>> = table
        .rows()
        .iter()
        .map(|row| key_indices.iter().map(|&i| row[i].clone()).collect())
        .collect();

    // winner per key: first or last occurrence index
    let mut winners: HashMap<&Vec<Cell>, usize> = HashMap::new();
    for (idx, key) in keys.iter().enumerate() {
        match policy {
            KeepPolicy::First => {
                winners.entry(key).or_insert(idx);
            }
            KeepPolicy::Last => {
                winners.insert(key, idx);
            }
        }
    }

    let removed = table.retain_rows(|idx| winners[&keys[idx]] == idx);
    info!(removed, policy = %policy, "deduplication finished");
    removed
}
