//! Cell value object.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Sentinel written for absent cells so the output stays column-uniform.
pub const MISSING_SENTINEL: &str = "no_data";

/// A single table cell that may be absent.
///
/// Spreadsheet exports routinely carry empty cells; earlier versions of
/// this tool patched them with the literal string `"no_data"` and then
/// had to remember which strings were real data. `Cell` keeps the
/// distinction in the type: a `Missing` cell is not a string, it only
/// *renders* as the legacy sentinel when the table is written out.
///
/// # Example
///
/// ```
/// use contact_sweep::domain::Cell;
///
/// assert_eq!(Cell::from_raw("  "), Cell::Missing);
/// assert_eq!(Cell::from_raw("Ana").render(), "Ana");
/// assert_eq!(Cell::Missing.render(), "no_data");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    /// The source had no value for this cell.
    Missing,

    /// A present, non-empty value.
    Value(String),
}

impl Cell {
    /// Build a cell from a raw field, treating empty/whitespace-only
    /// input as absent.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Cell::Missing
        } else {
            Cell::Value(trimmed.to_string())
        }
    }

    /// The present value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Cell::Missing => None,
            Cell::Value(v) => Some(v),
        }
    }

    /// Render for output: the value itself, or the legacy `no_data`
    /// sentinel for absent cells.
    pub fn render(&self) -> &str {
        match self {
            Cell::Missing => MISSING_SENTINEL,
            Cell::Value(v) => v,
        }
    }

    /// True when the source had no value.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Apply a string transform to a present value; `Missing` is untouched.
    pub fn map_value(&self, f: impl FnOnce(&str) -> String) -> Cell {
        match self {
            Cell::Missing => Cell::Missing,
            Cell::Value(v) => Cell::Value(f(v)),
        }
    }
}

// Serde support - serialize as the rendered string
impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.render().serialize(serializer)
    }
}

// Serde support - deserialize from string, mapping the sentinel back to Missing
impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s == MISSING_SENTINEL {
            Ok(Cell::Missing)
        } else {
            Ok(Cell::from_raw(&s))
        }
    }
}

// Display support
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
