//! Console reporting.
//!
//! The report is the user-facing product of a run, so it goes to stdout;
//! diagnostics go to stderr through `tracing`. Nothing in here mutates
//! data.

use crate::config::Config;
use crate::models::Table;
use crate::pipeline::{KeepPolicy, PipelineOutcome};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Machine-readable summary of one run, also the source of the
/// human-readable report.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// When the run started.
    pub started: DateTime<Local>,

    /// Where the cleaned file was written.
    pub output_path: PathBuf,

    /// Rows found in the source file.
    pub input_rows: usize,

    /// Rows written to the cleaned file.
    pub retained_rows: usize,

    /// Duplicate rows found and removed.
    pub duplicates_removed: usize,

    /// Columns forming the duplicate key.
    pub dedup_keys: Vec<String>,

    /// Which duplicate occurrence was kept.
    pub keep_policy: KeepPolicy,

    /// Output column order.
    pub final_columns: Vec<String>,
}

impl RunSummary {
    /// Assemble a summary from the run's pieces.
    pub fn new(
        started: DateTime<Local>,
        output_path: PathBuf,
        outcome: &PipelineOutcome,
        config: &Config,
    ) -> Self {
        Self {
            started,
            output_path,
            input_rows: outcome.input_rows,
            retained_rows: outcome.retained_rows,
            duplicates_removed: outcome.duplicates_removed,
            dedup_keys: config.dedup_keys.clone(),
            keep_policy: config.keep_policy,
            final_columns: config.final_columns.clone(),
        }
    }
}

/// Print the startup banner: what the tool expects and where it is
/// looking.
pub fn print_banner(config: &Config, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "NOTE: the input file must live in the working directory being cleaned."
    )?;
    writeln!(out, "Expected columns: {}", config.input_columns.join(", "))?;
    writeln!(out, "Working directory: {}", config.input_dir.display())?;
    writeln!(out, "{}", "-".repeat(30))?;
    Ok(())
}

/// Print the post-run summary and a preview of the first rows.
pub fn print_summary(
    summary: &RunSummary,
    table: &Table,
    preview_rows: usize,
    out: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(out, "Run finished")?;
    writeln!(out, "{}", "-".repeat(30))?;
    writeln!(out, "Cleaned file written to:\n{}", summary.output_path.display())?;
    writeln!(out)?;
    writeln!(out, "{} contacts found in the source file.", summary.input_rows)?;
    writeln!(out, "{} contacts kept.", summary.retained_rows)?;
    writeln!(
        out,
        "{} duplicated contacts found and removed.",
        summary.duplicates_removed
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "Duplicates were matched on: {}.",
        summary.dedup_keys.join(", ")
    )?;
    writeln!(
        out,
        "When duplicated, the {} submission was kept.",
        summary.keep_policy
    )?;
    writeln!(out)?;
    writeln!(out, "Output columns: {}", summary.final_columns.join(", "))?;
    writeln!(out)?;

    write_preview(table, preview_rows, out)?;
    writeln!(out, "{}", "-".repeat(30))?;
    Ok(())
}

/// First-N-rows preview, header included.
fn write_preview(table: &Table, rows: usize, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", table.columns().join(" | "))?;
    for row in table.rows().iter().take(rows) {
        let line: Vec<&str> = row.iter().map(|cell| cell.render()).collect();
        writeln!(out, "{}", line.join(" | "))?;
    }
    Ok(())
}

/// Serialize the summary as pretty JSON.
pub fn summary_json(summary: &RunSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

/// Block until the user presses ENTER.
///
/// Purely an interactive nicety so the console window does not vanish
/// with the report; skipped with `--no-pause`.
pub fn wait_for_enter(out: &mut impl Write, input: &mut impl BufRead) -> std::io::Result<()> {
    write!(out, "Press ENTER to close this window.")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn summary() -> RunSummary {
        let config = Config::default();
        RunSummary::new(
            Local::now(),
            PathBuf::from("/work/cleaned/cleaned-contacts.csv"),
            &PipelineOutcome {
                input_rows: 10,
                retained_rows: 8,
                duplicates_removed: 2,
            },
            &config,
        )
    }

    fn table() -> Table {
        let mut table = Table::new(vec!["name".to_string(), "email".to_string()]);
        for i in 0..3 {
            table.push_row(vec![
                Cell::Value(format!("Contact {}", i)),
                Cell::Missing,
            ]);
        }
        table
    }

    #[test]
    fn test_summary_report_content() {
        let mut out = Vec::new();
        print_summary(&summary(), &table(), 2, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("10 contacts found"));
        assert!(text.contains("8 contacts kept"));
        assert!(text.contains("2 duplicated contacts"));
        assert!(text.contains("whatsapp, email, interesse"));
        assert!(text.contains("the last submission was kept"));
        // preview is capped at the requested row count
        assert!(text.contains("Contact 0"));
        assert!(text.contains("Contact 1"));
        assert!(!text.contains("Contact 2"));
    }

    #[test]
    fn test_banner_names_columns_and_directory() {
        let mut out = Vec::new();
        print_banner(&Config::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("timestamp"));
        assert!(text.contains("cel"));
        assert!(text.contains("Working directory"));
    }

    #[test]
    fn test_summary_json_round_trips() {
        let json = summary_json(&summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["input_rows"], 10);
        assert_eq!(value["keep_policy"], "last");
    }

    #[test]
    fn test_wait_for_enter_consumes_a_line() {
        let mut out = Vec::new();
        let mut input = std::io::Cursor::new(b"\n".to_vec());
        wait_for_enter(&mut out, &mut input).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Press ENTER"));
    }
}
