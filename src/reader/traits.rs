use crate::error::LoadResult;
use crate::models::Table;
use std::path::Path;

/// Loads a raw contact table from a file.
///
/// Provides abstraction over the input format, enabling different
/// implementations (CSV export, Excel workbook, in-memory test doubles).
/// Implementations restrict the loaded columns to their configured
/// allow-list and turn absent cells into `Cell::Missing`.
pub trait TableReader {
    /// Read the file into a table.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the file cannot be parsed at all; this is
    /// fatal for the run. Per-cell problems are never errors.
    fn read(&self, path: &Path) -> LoadResult<Table>;
}
