//! Ordered in-memory table of contact records.

use crate::domain::Cell;
use serde::Serialize;

/// One contact record: cells positionally aligned with the owning
/// table's column list.
pub type Record = Vec<Cell>;

/// An ordered sequence of records sharing a declared column set.
///
/// Rows are stored in insertion order and stay that way until the
/// deduplication stage drops some of them. Column operations keep every
/// row aligned: adding a column pads all rows, selecting a column order
/// re-projects all rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    /// Create an empty table with the given column set.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Declared column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, in order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, padding or truncating it to the column count.
    pub fn push_row(&mut self, mut cells: Record) {
        cells.resize(self.columns.len(), Cell::Missing);
        self.rows.push(cells);
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// True when the column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at (row, column name), if both exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    /// The values of one column, cloned in row order. A column absent
    /// from the table yields all-Missing values, one per row — the
    /// caller decides whether that matters.
    pub fn column_values(&self, name: &str) -> Vec<Cell> {
        match self.column_index(name) {
            Some(idx) => self.rows.iter().map(|r| r[idx].clone()).collect(),
            None => vec![Cell::Missing; self.rows.len()],
        }
    }

    /// Add a derived column (or overwrite an existing one) from a full
    /// vector of values.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not have exactly one cell per row; derived
    /// columns are always computed from this table so a mismatch is a bug.
    pub fn set_column(&mut self, name: &str, values: Vec<Cell>) {
        assert_eq!(
            values.len(),
            self.rows.len(),
            "derived column {:?} must have one value per row",
            name
        );
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
    }

    /// Ensure a column exists, filling it with `Missing` when absent.
    pub fn ensure_column(&mut self, name: &str) {
        if !self.has_column(name) {
            self.columns.push(name.to_string());
            for row in &mut self.rows {
                row.push(Cell::Missing);
            }
        }
    }

    /// Transform every cell of one column in place. Does nothing if the
    /// column is absent.
    pub fn map_column(&mut self, name: &str, f: impl Fn(&Cell) -> Cell) {
        if let Some(idx) = self.column_index(name) {
            for row in &mut self.rows {
                row[idx] = f(&row[idx]);
            }
        }
    }

    /// Re-project the table onto `columns`, in that order, dropping
    /// everything else. Every requested column must already exist
    /// (callers run [`Table::ensure_column`] first).
    pub fn select(&mut self, columns: &[String]) {
        let selected: Vec<(String, usize)> = columns
            .iter()
            .filter_map(|name| self.column_index(name).map(|i| (name.clone(), i)))
            .collect();
        self.rows = self
            .rows
            .iter()
            .map(|row| selected.iter().map(|(_, i)| row[*i].clone()).collect())
            .collect();
        self.columns = selected.into_iter().map(|(name, _)| name).collect();
    }

    /// Keep only the rows whose index satisfies the predicate, preserving
    /// order. Returns the number of rows removed.
    pub fn retain_rows(&mut self, mut keep: impl FnMut(usize) -> bool) -> usize {
        let before = self.rows.len();
        let mut idx = 0;
        self.rows.retain(|_| {
            let keep_it = keep(idx);
            idx += 1;
            keep_it
        });
        before - self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn val(s: &str) -> Cell {
        Cell::Value(s.to_string())
    }

    fn sample() -> Table {
        let mut table = Table::new(cols(&["nome", "cel"]));
        table.push_row(vec![val("ana"), val("21 98888-7777")]);
        table.push_row(vec![val("bia")]);
        table
    }

    #[test]
    fn test_push_row_pads_short_rows() {
        let table = sample();
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(1, "cel"), Some(&Cell::Missing));
    }

    #[test]
    fn test_set_column_adds_and_overwrites() {
        let mut table = sample();
        table.set_column("name", vec![val("Ana"), val("Bia")]);
        assert_eq!(table.columns(), &cols(&["nome", "cel", "name"]));
        assert_eq!(table.cell(0, "name"), Some(&val("Ana")));

        table.set_column("name", vec![val("ANA"), val("BIA")]);
        assert_eq!(table.columns().len(), 3);
        assert_eq!(table.cell(1, "name"), Some(&val("BIA")));
    }

    #[test]
    #[should_panic(expected = "one value per row")]
    fn test_set_column_rejects_wrong_length() {
        let mut table = sample();
        table.set_column("name", vec![val("Ana")]);
    }

    #[test]
    fn test_ensure_column_fills_missing() {
        let mut table = sample();
        table.ensure_column("lgpd");
        assert!(table.has_column("lgpd"));
        assert_eq!(table.cell(0, "lgpd"), Some(&Cell::Missing));

        // existing column untouched
        table.ensure_column("nome");
        assert_eq!(table.cell(0, "nome"), Some(&val("ana")));
    }

    #[test]
    fn test_map_column() {
        let mut table = sample();
        table.map_column("nome", |c| c.map_value(|v| v.to_uppercase()));
        assert_eq!(table.cell(0, "nome"), Some(&val("ANA")));
        // absent column is a no-op
        table.map_column("ghost", |_| val("x"));
        assert!(!table.has_column("ghost"));
    }

    #[test]
    fn test_select_reorders_and_drops() {
        let mut table = sample();
        table.set_column("name", vec![val("Ana"), val("Bia")]);
        table.select(&cols(&["name", "nome"]));
        assert_eq!(table.columns(), &cols(&["name", "nome"]));
        assert_eq!(table.rows()[0], vec![val("Ana"), val("ana")]);
    }

    #[test]
    fn test_retain_rows_reports_removed() {
        let mut table = sample();
        let removed = table.retain_rows(|i| i == 1);
        assert_eq!(removed, 1);
        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, "nome"), Some(&val("bia")));
    }

    #[test]
    fn test_column_values_for_absent_column() {
        let table = sample();
        assert_eq!(
            table.column_values("ghost"),
            vec![Cell::Missing, Cell::Missing]
        );
    }
}
