//! Domain value objects and types.
//!
//! This module contains type-safe representations for the concepts the
//! cleaner works with: table cells that may be absent, and decomposed
//! phone numbers with per-segment validity. These types replace the
//! string sentinels ("no_data", "invalid") of earlier incarnations of
//! this tool with explicit tagged values, while still rendering the
//! legacy sentinels on output.

pub mod cell;
pub mod errors;
pub mod phone;

pub use cell::Cell;
pub use errors::ValidationError;
pub use phone::{PhoneDefaults, PhoneNumber, Segment};
