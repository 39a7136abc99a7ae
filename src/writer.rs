//! Cleaned-CSV output.

use crate::error::OutputResult;
use crate::models::Table;
use std::path::{Path, PathBuf};
use tracing::info;

/// Subdirectory created under the output root.
pub const OUTPUT_SUBDIR: &str = "cleaned";

/// Prefix of the generated file name.
pub const OUTPUT_PREFIX: &str = "cleaned";

/// Path the cleaned file will be written to:
/// `<root>/cleaned/cleaned-<input stem>.csv`.
pub fn output_path(root: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    root.join(OUTPUT_SUBDIR)
        .join(format!("{}-{}.csv", OUTPUT_PREFIX, stem))
}

/// Write the table as UTF-8 CSV with no header row.
///
/// The parent directory is created if needed. Missing cells render as
/// the `no_data` sentinel so every row has a value in every column.
pub fn write_cleaned(table: &Table, path: &Path, delimiter: u8) -> OutputResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| cell.render()))?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = table.len(), "cleaned file written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn table() -> Table {
        let mut table = Table::new(vec!["name".to_string(), "whatsapp".to_string()]);
        table.push_row(vec![
            Cell::Value("Ana".to_string()),
            Cell::Value("=\"+5521988887777\"".to_string()),
        ]);
        table.push_row(vec![Cell::Value("Bia".to_string()), Cell::Missing]);
        table
    }

    #[test]
    fn test_output_path_layout() {
        let path = output_path(Path::new("/work"), Path::new("/work/contacts.xlsx"));
        assert_eq!(path, Path::new("/work/cleaned/cleaned-contacts.csv"));
    }

    #[test]
    fn test_writes_without_header_and_renders_sentinels() {
        let dir = tempfile::tempdir().unwrap();
        let path = output_path(dir.path(), Path::new("contacts.xlsx"));
        write_cleaned(&table(), &path, b',').unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Ana,"));
        assert_eq!(lines[1], "Bia,no_data");
        // the formula escape forces quoting, plus survives intact
        assert!(lines[0].contains("+5521988887777"));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned").join("cleaned-x.csv");
        write_cleaned(&table(), &path, b';').unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.lines().next().unwrap().contains(';'));
    }
}
