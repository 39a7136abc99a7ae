//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The default country code is not a two-digit string.
    InvalidCountryCode(String),

    /// The default area code is not a two-digit string.
    InvalidAreaCode(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCountryCode(code) => {
                write!(f, "Invalid default country code (expected 2 digits): {}", code)
            }
            Self::InvalidAreaCode(code) => {
                write!(f, "Invalid default area code (expected 2 digits): {}", code)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
