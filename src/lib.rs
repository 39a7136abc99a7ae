//! contact-sweep - a single-pass contact-list sanitizer.
//!
//! Ingests one spreadsheet/CSV of raw contact submissions, normalizes
//! names, phone numbers and emails, deduplicates records, and emits a
//! cleaned CSV report. The run is one blocking call chain:
//! load -> normalize -> deduplicate -> write -> report.
//!
//! # Architecture
//!
//! - **domain**: value objects (cells that may be absent, decomposed phone numbers)
//! - **models**: the ordered in-memory table the pipeline owns
//! - **reader**: input discovery and format-specific table loading
//! - **normalize**: pure text/phone/email transforms
//! - **pipeline**: stage orchestration, schema reconciliation, deduplication
//! - **writer**: cleaned-CSV output
//! - **report**: console banner and post-run summary
//! - **config**/**cli**: per-run configuration covering all schema variants
//! - **error**: custom error types for precise error handling

// Re-export commonly used types
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod writer;

pub use cli::Cli;
pub use config::Config;
pub use domain::{Cell, PhoneDefaults, PhoneNumber, Segment};
pub use error::{ConfigError, DiscoveryError, LoadError, OutputError};
pub use models::{Record, Table};
pub use pipeline::{KeepPolicy, Pipeline, PipelineOutcome};
pub use reader::{discover_input, CsvReader, InputFormat, TableReader, XlsxReader};
pub use report::RunSummary;
