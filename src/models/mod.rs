//! In-memory table model.
//!
//! The whole run operates on one ordered [`Table`] owned by the pipeline;
//! rows keep their insertion order until deduplication.

pub mod table;

pub use table::{Record, Table};
