//! The linear transform pipeline.
//!
//! One blocking call chain over the in-memory table:
//! fold -> names -> phone numbers -> emails -> schema -> dedup.
//! Stages only derive or rewrite columns; nothing here performs I/O.

pub mod dedup;
pub mod reconcile;

pub use dedup::{deduplicate, KeepPolicy};
pub use reconcile::reconcile;

use crate::config::Config;
use crate::domain::{Cell, PhoneDefaults, PhoneNumber};
use crate::models::Table;
use crate::normalize::{first_word, fold_text, normalize_email, strip_accents, title_case};
use tracing::info;

/// Raw name column from the source sheet.
pub const COL_RAW_NAME: &str = "nome";
/// Raw phone column from the source sheet.
pub const COL_RAW_PHONE: &str = "cel";
/// Email column.
pub const COL_EMAIL: &str = "email";
/// Derived normalized full name.
pub const COL_NAME: &str = "name";
/// Derived first name.
pub const COL_FIRST_NAME: &str = "first_name";
/// Derived canonical phone string.
pub const COL_WHATSAPP: &str = "whatsapp";
/// Derived phone validity flag.
pub const COL_VALID_NUM: &str = "valid_num";

/// Row counts produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    /// Rows loaded from the input file.
    pub input_rows: usize,

    /// Rows surviving deduplication.
    pub retained_rows: usize,

    /// Duplicate rows removed.
    pub duplicates_removed: usize,
}

/// The sanitizer pipeline, configured once per run.
pub struct Pipeline {
    phone_defaults: PhoneDefaults,
    final_columns: Vec<String>,
    dedup_keys: Vec<String>,
    keep_policy: KeepPolicy,
    fold_all_columns: bool,
}

impl Pipeline {
    /// Build a pipeline from the run configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            phone_defaults: config.phone_defaults.clone(),
            final_columns: config.final_columns.clone(),
            dedup_keys: config.dedup_keys.clone(),
            keep_policy: config.keep_policy,
            fold_all_columns: config.fold_all_columns,
        }
    }

    /// Run every stage over the table, in place.
    ///
    /// Data-quality problems never abort: invalid phones become flagged
    /// rows, absent columns are filled with the `no_data` sentinel.
    pub fn run(&self, table: &mut Table) -> PipelineOutcome {
        let input_rows = table.len();

        if self.fold_all_columns {
            self.fold_columns(table);
        }
        self.clean_names(table);
        self.clean_numbers(table);
        self.clean_email(table);
        reconcile(table, &self.final_columns);
        let duplicates_removed = deduplicate(table, &self.dedup_keys, self.keep_policy);

        let outcome = PipelineOutcome {
            input_rows,
            retained_rows: table.len(),
            duplicates_removed,
        };
        info!(
            input = outcome.input_rows,
            retained = outcome.retained_rows,
            removed = outcome.duplicates_removed,
            "pipeline finished"
        );
        outcome
    }

    /// Accent-strip and lower-case every cell (older schema variants
    /// normalized the whole sheet, not just the name column).
    fn fold_columns(&self, table: &mut Table) {
        for column in table.columns().to_vec() {
            table.map_column(&column, |cell| cell.map_value(fold_text));
        }
    }

    /// Derive `name` (accent-free, title-cased) and `first_name` from the
    /// raw name column.
    fn clean_names(&self, table: &mut Table) {
        let names: Vec<Cell> = table
            .column_values(COL_RAW_NAME)
            .iter()
            .map(|cell| cell.map_value(|raw| title_case(&strip_accents(raw))))
            .collect();
        let first_names: Vec<Cell> = names
            .iter()
            .map(|cell| cell.map_value(first_word))
            .collect();

        table.set_column(COL_NAME, names);
        table.set_column(COL_FIRST_NAME, first_names);
    }

    /// Derive `whatsapp` (canonical international string) and `valid_num`
    /// from the raw phone column.
    ///
    /// The validity flag renders as `True`/`False`; invalid rows are
    /// flagged, never dropped.
    fn clean_numbers(&self, table: &mut Table) {
        let phones: Vec<PhoneNumber> = table
            .column_values(COL_RAW_PHONE)
            .iter()
            .map(|cell| PhoneNumber::parse(cell, &self.phone_defaults))
            .collect();

        let whatsapp: Vec<Cell> = phones
            .iter()
            .map(|phone| Cell::Value(phone.canonical()))
            .collect();
        let valid: Vec<Cell> = phones
            .iter()
            .map(|phone| {
                Cell::Value(if phone.is_valid() { "True" } else { "False" }.to_string())
            })
            .collect();

        table.set_column(COL_WHATSAPP, whatsapp);
        table.set_column(COL_VALID_NUM, valid);
    }

    /// Strip whitespace from emails and lower-case them.
    fn clean_email(&self, table: &mut Table) {
        table.map_column(COL_EMAIL, |cell| cell.map_value(normalize_email));
    }
}
