//! Command-line surface.
//!
//! Every flag has a default that reproduces the historical run: scan the
//! current directory for one `.xlsx`, fold all columns, dedup on
//! whatsapp/email/interesse keeping the last submission, write
//! comma-separated output, pause at the end. Defaults can also be set
//! through `CONTACT_SWEEP_*` environment variables (a `.env` file is
//! honored).

use crate::pipeline::KeepPolicy;
use crate::reader::InputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Single-pass contact-list sanitizer.
#[derive(Debug, Parser)]
#[command(name = "contact-sweep", version, about)]
pub struct Cli {
    /// Input file to clean (bypasses directory discovery)
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory scanned for exactly one input file
    #[arg(long, default_value = ".", env = "CONTACT_SWEEP_DIR", value_name = "DIR")]
    pub dir: PathBuf,

    /// Input file format
    #[arg(long, value_enum, default_value_t = InputFormat::Xlsx, env = "CONTACT_SWEEP_FORMAT")]
    pub format: InputFormat,

    /// Root for the cleaned/ output directory (defaults to the input directory)
    #[arg(long, env = "CONTACT_SWEEP_OUT_DIR", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Output field separator
    #[arg(long, default_value = ",", env = "CONTACT_SWEEP_OUT_DELIMITER")]
    pub out_delimiter: String,

    /// Encoding tried after the sniffed one when reading CSV
    #[arg(long, default_value = "latin1", env = "CONTACT_SWEEP_FALLBACK_ENCODING")]
    pub fallback_encoding: String,

    /// Columns read from the input (comma-separated allow-list)
    #[arg(long, value_delimiter = ',', env = "CONTACT_SWEEP_COLUMNS")]
    pub columns: Option<Vec<String>>,

    /// Output columns, in order (comma-separated)
    #[arg(long, value_delimiter = ',', env = "CONTACT_SWEEP_FINAL_COLUMNS")]
    pub final_columns: Option<Vec<String>>,

    /// Columns forming the duplicate key (comma-separated)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "whatsapp,email,interesse",
        env = "CONTACT_SWEEP_DEDUP_KEYS"
    )]
    pub dedup_keys: Vec<String>,

    /// Which duplicate occurrence to keep
    #[arg(long, value_enum, default_value_t = KeepPolicy::Last, env = "CONTACT_SWEEP_KEEP")]
    pub keep: KeepPolicy,

    /// Default country code (DDI) for numbers without one
    #[arg(long, default_value = "55", env = "CONTACT_SWEEP_DEFAULT_DDI")]
    pub default_ddi: String,

    /// Default area code (DDD) for numbers without one
    #[arg(long, default_value = "21", env = "CONTACT_SWEEP_DEFAULT_DDD")]
    pub default_ddd: String,

    /// Do not lower-case/accent-fold every column before cleaning
    #[arg(long)]
    pub no_fold: bool,

    /// Rows shown in the post-run preview
    #[arg(long, default_value_t = 10, env = "CONTACT_SWEEP_PREVIEW_ROWS")]
    pub preview_rows: usize,

    /// Exit without waiting for a keypress (for scripts and tests)
    #[arg(long)]
    pub no_pause: bool,

    /// Also print the run summary as JSON
    #[arg(long)]
    pub summary_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_the_historical_run() {
        let cli = Cli::parse_from(["contact-sweep"]);
        assert_eq!(cli.dir, PathBuf::from("."));
        assert_eq!(cli.format, InputFormat::Xlsx);
        assert_eq!(cli.out_delimiter, ",");
        assert_eq!(cli.dedup_keys, vec!["whatsapp", "email", "interesse"]);
        assert_eq!(cli.keep, KeepPolicy::Last);
        assert_eq!(cli.default_ddi, "55");
        assert_eq!(cli.default_ddd, "21");
        assert!(!cli.no_fold);
        assert!(!cli.no_pause);
    }

    #[test]
    fn test_flag_overrides() {
        let cli = Cli::parse_from([
            "contact-sweep",
            "--input",
            "contacts.csv",
            "--format",
            "csv",
            "--dedup-keys",
            "whatsapp,email",
            "--keep",
            "first",
            "--no-pause",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("contacts.csv")));
        assert_eq!(cli.format, InputFormat::Csv);
        assert_eq!(cli.dedup_keys, vec!["whatsapp", "email"]);
        assert_eq!(cli.keep, KeepPolicy::First);
        assert!(cli.no_pause);
    }
}
