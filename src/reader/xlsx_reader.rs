//! XLSX loading via calamine.

use crate::domain::Cell;
use crate::error::{LoadError, LoadResult};
use crate::models::Table;
use crate::reader::TableReader;
use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use std::path::Path;
use tracing::info;

/// Excel reader restricted to an allow-list of column names.
///
/// Reads the first worksheet; the first row is the header. Cells are
/// stringified the way the sheet displays them, and empty cells become
/// `Cell::Missing`.
pub struct XlsxReader {
    columns: Vec<String>,
}

impl XlsxReader {
    /// Create a reader for the given column allow-list.
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    fn cell_text(cell: &Data) -> String {
        match cell {
            Data::Empty => String::new(),
            Data::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl TableReader for XlsxReader {
    fn read(&self, path: &Path) -> LoadResult<Table> {
        let mut workbook: Xlsx<_> =
            open_workbook(path).map_err(|e: XlsxError| LoadError::Workbook(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| LoadError::Workbook("no worksheet found".to_string()))?
            .map_err(|e| LoadError::Workbook(e.to_string()))?;

        let mut rows = range.rows();
        let header = rows.next().ok_or(LoadError::Empty)?;

        let projection: Vec<(usize, String)> = header
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| {
                let name = Self::cell_text(cell).trim().to_string();
                self.columns.iter().any(|c| *c == name).then_some((idx, name))
            })
            .collect();

        if projection.is_empty() {
            return Err(LoadError::NoKnownColumns);
        }

        let mut table = Table::new(projection.iter().map(|(_, name)| name.clone()).collect());
        for row in rows {
            table.push_row(
                projection
                    .iter()
                    .map(|(idx, _)| {
                        row.get(*idx)
                            .map(|cell| Cell::from_raw(&Self::cell_text(cell)))
                            .unwrap_or(Cell::Missing)
                    })
                    .collect(),
            );
        }

        if table.is_empty() {
            return Err(LoadError::Empty);
        }

        info!(rows = table.len(), "workbook parsed");
        Ok(table)
    }
}
