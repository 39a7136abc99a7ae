//! contact-sweep - main entry point.
//!
//! Wires configuration, the reader, the pipeline, the writer and the
//! report into one sequential run. Diagnostics go to stderr via
//! `tracing`; stdout carries the human-readable report.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use contact_sweep::reader::{discover_input, CsvReader, InputFormat, TableReader, XlsxReader};
use contact_sweep::{report, writer, Cli, Config, Pipeline, RunSummary};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // .env first so the CLI env fallbacks can see it
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging (stderr only; stdout carries the report)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli(&cli).context("invalid configuration")?;
    let started = Local::now();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::print_banner(&config, &mut out)?;

    let input = match &config.input {
        Some(path) => path.clone(),
        None => discover_input(&config.input_dir, config.format.extension())
            .context("could not pick an input file")?,
    };
    info!(input = %input.display(), "input selected");

    let reader: Box<dyn TableReader> = match config.format {
        InputFormat::Csv => Box::new(CsvReader::new(
            config.input_columns.clone(),
            config.fallback_encoding,
        )),
        InputFormat::Xlsx => Box::new(XlsxReader::new(config.input_columns.clone())),
    };
    let mut table = reader
        .read(&input)
        .with_context(|| format!("could not load {}", input.display()))?;

    let outcome = Pipeline::new(&config).run(&mut table);

    let output = writer::output_path(&config.output_dir, &input);
    writer::write_cleaned(&table, &output, config.output_delimiter)
        .with_context(|| format!("could not write {}", output.display()))?;

    let summary = RunSummary::new(started, output, &outcome, &config);
    report::print_summary(&summary, &table, config.preview_rows, &mut out)?;
    if config.summary_json {
        use std::io::Write;
        writeln!(out, "{}", report::summary_json(&summary)?)?;
    }

    if config.pause_on_exit {
        let stdin = std::io::stdin();
        report::wait_for_enter(&mut out, &mut stdin.lock())?;
    }

    Ok(())
}
