//! PhoneNumber value object.
//!
//! A raw phone string is decomposed from the right into three segments:
//! the last 9 digits are the subscriber suffix, the 2 digits before it
//! are the area code (DDD), and anything left is the country code (DDI).
//! DDI and DDD are defaulted when too short; the suffix is never
//! defaulted — a number without 9 subscriber digits is invalid.

use super::cell::Cell;
use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Sentinel rendered for segments that could not be recovered.
pub const INVALID_SENTINEL: &str = "invalid";

/// Expected subscriber suffix length (Brazilian mobile convention).
pub const SUFFIX_LEN: usize = 9;

/// Expected DDI/DDD segment length.
pub const CODE_LEN: usize = 2;

/// Default country and area codes applied when the raw number is too
/// short to carry its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneDefaults {
    country_code: String,
    area_code: String,
}

impl PhoneDefaults {
    /// Create defaults, validating that both codes are exactly two digits.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if either code is not a two-digit string.
    pub fn new(
        country_code: impl Into<String>,
        area_code: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let country_code = country_code.into();
        let area_code = area_code.into();

        if !Self::is_two_digits(&country_code) {
            return Err(ValidationError::InvalidCountryCode(country_code));
        }
        if !Self::is_two_digits(&area_code) {
            return Err(ValidationError::InvalidAreaCode(area_code));
        }

        Ok(Self {
            country_code,
            area_code,
        })
    }

    fn is_two_digits(code: &str) -> bool {
        code.len() == CODE_LEN && code.chars().all(|c| c.is_ascii_digit())
    }

    /// Default DDI (country calling code).
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Default DDD (area code).
    pub fn area_code(&self) -> &str {
        &self.area_code
    }
}

impl Default for PhoneDefaults {
    /// Brazil, Rio de Janeiro.
    fn default() -> Self {
        Self {
            country_code: "55".to_string(),
            area_code: "21".to_string(),
        }
    }
}

/// One segment of a decomposed phone number.
///
/// Validity is an explicit state, not a magic substring. The legacy
/// `invalid` sentinel only appears when the segment is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// The segment holds usable digits.
    Valid(String),

    /// The segment could not be recovered from the input.
    Invalid,
}

impl Segment {
    /// True unless the segment is `Invalid`.
    pub fn is_valid(&self) -> bool {
        matches!(self, Segment::Valid(_))
    }

    /// Render for output: the digits, or the legacy `invalid` sentinel.
    pub fn render(&self) -> &str {
        match self {
            Segment::Valid(digits) => digits,
            Segment::Invalid => INVALID_SENTINEL,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// A phone number decomposed into DDI, DDD and subscriber suffix.
///
/// Parsing is total: any input (including an absent cell) produces a
/// `PhoneNumber`, and per-segment problems are carried as
/// [`Segment::Invalid`] rather than errors, so a bad number never aborts
/// a run.
///
/// # Example
///
/// ```
/// use contact_sweep::domain::{Cell, PhoneDefaults, PhoneNumber};
///
/// let defaults = PhoneDefaults::default();
/// let phone = PhoneNumber::parse(&Cell::from_raw("(21) 98888-7777"), &defaults);
/// assert!(phone.is_valid());
/// assert_eq!(phone.canonical(), "=\"+5521988887777\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    ddi: Segment,
    ddd: Segment,
    suffix: Segment,
}

impl PhoneNumber {
    /// Parse a raw phone cell into segments.
    ///
    /// All non-digit characters are stripped and the digit string is
    /// split from the right: suffix (last 9), DDD (next 2), DDI
    /// (remainder). Short DDI/DDD segments fall back to the configured
    /// defaults; a short suffix is invalid. An absent cell parses as an
    /// empty digit string, so the codes default and the suffix is
    /// invalid.
    pub fn parse(raw: &Cell, defaults: &PhoneDefaults) -> Self {
        let digits: String = raw
            .value()
            .map(|raw| raw.chars().filter(|c| c.is_ascii_digit()).collect())
            .unwrap_or_default();
        Self::from_digits(&digits, defaults)
    }

    fn from_digits(digits: &str, defaults: &PhoneDefaults) -> Self {
        // digits is ASCII-only after stripping, so byte slicing is safe
        let split = digits.len().saturating_sub(SUFFIX_LEN);
        let (prefix, suffix) = digits.split_at(split);
        let code_split = prefix.len().saturating_sub(CODE_LEN);
        let (ddi, ddd) = prefix.split_at(code_split);

        let ddi = if ddi.len() == CODE_LEN {
            Segment::Valid(ddi.to_string())
        } else {
            Segment::Valid(defaults.country_code().to_string())
        };

        let ddd = if ddd.len() == CODE_LEN {
            Segment::Valid(ddd.to_string())
        } else {
            Segment::Valid(defaults.area_code().to_string())
        };

        let suffix = if suffix.len() < SUFFIX_LEN {
            Segment::Invalid
        } else {
            Segment::Valid(suffix.to_string())
        };

        Self { ddi, ddd, suffix }
    }

    /// Country code segment.
    pub fn ddi(&self) -> &Segment {
        &self.ddi
    }

    /// Area code segment.
    pub fn ddd(&self) -> &Segment {
        &self.ddd
    }

    /// Subscriber suffix segment.
    pub fn suffix(&self) -> &Segment {
        &self.suffix
    }

    /// A number is valid iff all three segments are valid.
    pub fn is_valid(&self) -> bool {
        self.ddi.is_valid() && self.ddd.is_valid() && self.suffix.is_valid()
    }

    /// Canonical display string.
    ///
    /// The leading `="+` and trailing `"` are a spreadsheet-formula
    /// escape so the plus sign and any leading zero survive the file
    /// being opened in a spreadsheet editor. Invalid segments render as
    /// the legacy `invalid` sentinel.
    pub fn canonical(&self) -> String {
        format!("=\"+{}{}{}\"", self.ddi, self.ddd, self.suffix)
    }
}

// Serde support - serialize as the canonical string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.canonical().serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> PhoneDefaults {
        PhoneDefaults::default()
    }

    fn parse(raw: &str) -> PhoneNumber {
        PhoneNumber::parse(&Cell::from_raw(raw), &defaults())
    }

    #[test]
    fn test_defaults_validate_length() {
        assert!(PhoneDefaults::new("55", "21").is_ok());
        assert!(matches!(
            PhoneDefaults::new("5", "21"),
            Err(ValidationError::InvalidCountryCode(_))
        ));
        assert!(matches!(
            PhoneDefaults::new("55", "021"),
            Err(ValidationError::InvalidAreaCode(_))
        ));
        assert!(PhoneDefaults::new("55", "2a").is_err());
    }

    #[test]
    fn test_full_international_number() {
        let phone = parse("+55 (21) 98888-7777");
        assert_eq!(phone.ddi(), &Segment::Valid("55".to_string()));
        assert_eq!(phone.ddd(), &Segment::Valid("21".to_string()));
        assert_eq!(phone.suffix(), &Segment::Valid("988887777".to_string()));
        assert!(phone.is_valid());
        assert_eq!(phone.canonical(), "=\"+5521988887777\"");
    }

    #[test]
    fn test_eleven_digits_splits_from_the_right() {
        // 11 digits: DDD present, DDI too short and defaulted
        let phone = parse("11988887777");
        assert_eq!(phone.ddi(), &Segment::Valid("55".to_string()));
        assert_eq!(phone.ddd(), &Segment::Valid("11".to_string()));
        assert_eq!(phone.suffix(), &Segment::Valid("988887777".to_string()));
        assert!(phone.is_valid());
    }

    #[test]
    fn test_nine_digits_defaults_both_codes() {
        let phone = parse("98888-7777");
        assert_eq!(phone.ddi(), &Segment::Valid("55".to_string()));
        assert_eq!(phone.ddd(), &Segment::Valid("21".to_string()));
        assert_eq!(phone.suffix(), &Segment::Valid("988887777".to_string()));
        assert!(phone.is_valid());
    }

    #[test]
    fn test_ten_digits_keeps_partial_area_code_as_default() {
        // 10 digits: one digit left over for the DDD, too short, defaulted
        let phone = parse("1988887777");
        assert_eq!(phone.ddd(), &Segment::Valid("21".to_string()));
        assert!(phone.is_valid());
    }

    #[test]
    fn test_short_number_is_invalid() {
        let phone = parse("123");
        assert_eq!(phone.suffix(), &Segment::Invalid);
        assert!(!phone.is_valid());
        assert!(phone.canonical().contains(INVALID_SENTINEL));
        // defaulting still applies to the other segments
        assert_eq!(phone.ddi(), &Segment::Valid("55".to_string()));
        assert_eq!(phone.ddd(), &Segment::Valid("21".to_string()));
    }

    #[test]
    fn test_non_numeric_input_is_invalid() {
        let phone = parse("call me maybe");
        assert!(!phone.is_valid());
        assert_eq!(phone.canonical(), "=\"+5521invalid\"");
    }

    #[test]
    fn test_missing_cell_defaults_codes_and_invalidates_suffix() {
        // same outcome as an empty digit string: codes come from the
        // defaults, only the suffix is unrecoverable
        let phone = PhoneNumber::parse(&Cell::Missing, &defaults());
        assert_eq!(phone.ddi(), &Segment::Valid("55".to_string()));
        assert_eq!(phone.ddd(), &Segment::Valid("21".to_string()));
        assert_eq!(phone.suffix(), &Segment::Invalid);
        assert!(!phone.is_valid());
        assert_eq!(phone.canonical(), "=\"+5521invalid\"");
    }

    #[test]
    fn test_empty_string_cell_defaults_codes_and_invalidates_suffix() {
        let phone = parse("");
        assert_eq!(phone.canonical(), "=\"+5521invalid\"");
        assert!(!phone.is_valid());
    }

    #[test]
    fn test_overlong_country_code_is_replaced() {
        // 14 digits leaves a 3-digit DDI, which is not exactly 2 and is
        // replaced by the default
        let phone = parse("00552198888-7777");
        assert_eq!(phone.ddi(), &Segment::Valid("55".to_string()));
        assert_eq!(phone.ddd(), &Segment::Valid("21".to_string()));
        assert!(phone.is_valid());
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = PhoneDefaults::new("54", "11").unwrap();
        let phone = PhoneNumber::parse(&Cell::from_raw("98888-7777"), &defaults);
        assert_eq!(phone.canonical(), "=\"+5411988887777\"");
    }

    #[test]
    fn test_serialization() {
        let phone = parse("21988887777");
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"=\\\"+5521988887777\\\"\"");
    }
}
