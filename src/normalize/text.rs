//! Text normalization helpers.
//!
//! Accent stripping transliterates to the ASCII range without touching
//! word boundaries; case changes are the caller's choice. All functions
//! are idempotent: running them over already-normalized text is a no-op.

use deunicode::deunicode;

/// Strip diacritics by transliterating to plain ASCII-range letters.
///
/// `"joão"` becomes `"joao"`; already-unaccented text passes through
/// unchanged. Word boundaries and case are preserved.
pub fn strip_accents(text: &str) -> String {
    deunicode(text)
}

/// Title-case a string: the first letter of every word is upper-cased,
/// the rest lower-cased. A "word" starts after any non-alphabetic
/// character, matching the behavior the spreadsheet crowd expects from
/// their tooling.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alphabetic = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}

/// First whitespace-separated word, or the empty string.
pub fn first_word(text: &str) -> String {
    text.split_whitespace().next().unwrap_or("").to_string()
}

/// Whole-table folding used by the older schema variants: strip accents,
/// then lower-case.
pub fn fold_text(text: &str) -> String {
    strip_accents(text).to_lowercase()
}
