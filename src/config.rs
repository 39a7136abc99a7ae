//! Run configuration.
//!
//! The historical variants of this tool disagreed on the required
//! columns, the duplicate key, and the output separator, so all of that
//! is configuration rather than constants: one configuration serves
//! every observed variant. Values come from CLI flags with
//! `CONTACT_SWEEP_*` env fallbacks and are validated here.

use crate::cli::Cli;
use crate::domain::PhoneDefaults;
use crate::error::{ConfigError, ConfigResult};
use crate::pipeline::KeepPolicy;
use crate::reader::InputFormat;
use encoding_rs::{Encoding, WINDOWS_1252};
use std::path::PathBuf;

/// Columns read from the source sheet when none are configured.
pub const DEFAULT_INPUT_COLUMNS: [&str; 10] = [
    "timestamp",
    "nome",
    "cel",
    "email",
    "bairro",
    "regiao",
    "interesse",
    "outros_interesses",
    "lgpd",
    "matriz",
];

/// Output column order when none is configured.
pub const DEFAULT_FINAL_COLUMNS: [&str; 14] = [
    "timestamp",
    "matriz",
    "name",
    "first_name",
    "whatsapp",
    "valid_num",
    "email",
    "bairro",
    "regiao",
    "interesse",
    "outros_interesses",
    "lgpd",
    "nome",
    "cel",
];

/// Validated configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit input file, when discovery is bypassed.
    pub input: Option<PathBuf>,

    /// Working directory scanned for the input file.
    pub input_dir: PathBuf,

    /// Input file format.
    pub format: InputFormat,

    /// Root under which the `cleaned/` directory is created.
    pub output_dir: PathBuf,

    /// Output field separator.
    pub output_delimiter: u8,

    /// CSV encoding tried after the sniffed one.
    pub fallback_encoding: &'static Encoding,

    /// Column allow-list for loading.
    pub input_columns: Vec<String>,

    /// Output columns, in order.
    pub final_columns: Vec<String>,

    /// Columns forming the duplicate key.
    pub dedup_keys: Vec<String>,

    /// Which duplicate occurrence survives.
    pub keep_policy: KeepPolicy,

    /// Lower-case/accent-fold every column before the name stage.
    pub fold_all_columns: bool,

    /// Defaults applied to short phone numbers.
    pub phone_defaults: PhoneDefaults,

    /// Rows shown in the post-run preview.
    pub preview_rows: usize,

    /// Wait for ENTER before exiting.
    pub pause_on_exit: bool,

    /// Also print the run summary as JSON.
    pub summary_json: bool,
}

impl Config {
    /// Build and validate a configuration from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the output delimiter is not a single
    /// byte, the fallback encoding label is unknown, the phone defaults
    /// are not two-digit codes, or a dedup key names a column outside
    /// the final column list.
    pub fn from_cli(cli: &Cli) -> ConfigResult<Self> {
        let output_delimiter = match cli.out_delimiter.as_bytes() {
            [single] => *single,
            _ => {
                return Err(ConfigError::InvalidValue {
                    field: "out-delimiter".to_string(),
                    reason: format!("must be a single character, got {:?}", cli.out_delimiter),
                })
            }
        };

        let fallback_encoding = Encoding::for_label(cli.fallback_encoding.as_bytes())
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "fallback-encoding".to_string(),
                reason: format!("unknown encoding label {:?}", cli.fallback_encoding),
            })?;

        let phone_defaults = PhoneDefaults::new(&cli.default_ddi, &cli.default_ddd)
            .map_err(|e| ConfigError::InvalidValue {
                field: "default-ddi/default-ddd".to_string(),
                reason: e.to_string(),
            })?;

        let input_columns = cli
            .columns
            .clone()
            .unwrap_or_else(|| DEFAULT_INPUT_COLUMNS.map(String::from).to_vec());
        let final_columns = cli
            .final_columns
            .clone()
            .unwrap_or_else(|| DEFAULT_FINAL_COLUMNS.map(String::from).to_vec());

        for key in &cli.dedup_keys {
            if !final_columns.contains(key) {
                return Err(ConfigError::UnknownColumn {
                    column: key.clone(),
                    context: "dedup keys".to_string(),
                });
            }
        }

        let output_dir = cli
            .out_dir
            .clone()
            .unwrap_or_else(|| cli.dir.clone());

        Ok(Self {
            input: cli.input.clone(),
            input_dir: cli.dir.clone(),
            format: cli.format,
            output_dir,
            output_delimiter,
            fallback_encoding,
            input_columns,
            final_columns,
            dedup_keys: cli.dedup_keys.clone(),
            keep_policy: cli.keep,
            fold_all_columns: !cli.no_fold,
            phone_defaults,
            preview_rows: cli.preview_rows,
            pause_on_exit: !cli.no_pause,
            summary_json: cli.summary_json,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            input_dir: PathBuf::from("."),
            format: InputFormat::Xlsx,
            output_dir: PathBuf::from("."),
            output_delimiter: b',',
            fallback_encoding: WINDOWS_1252,
            input_columns: DEFAULT_INPUT_COLUMNS.map(String::from).to_vec(),
            final_columns: DEFAULT_FINAL_COLUMNS.map(String::from).to_vec(),
            dedup_keys: vec![
                "whatsapp".to_string(),
                "email".to_string(),
                "interesse".to_string(),
            ],
            keep_policy: KeepPolicy::Last,
            fold_all_columns: true,
            phone_defaults: PhoneDefaults::default(),
            preview_rows: 10,
            pause_on_exit: true,
            summary_json: false,
        }
    }
}
