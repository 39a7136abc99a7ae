//! Email cleanup.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// Syntactic cleanup only: remove all whitespace and lower-case.
///
/// No format or domain validation is performed — a garbage address stays
/// garbage, just tidier.
pub fn normalize_email(email: &str) -> String {
    WHITESPACE.replace_all(email, "").to_lowercase()
}
