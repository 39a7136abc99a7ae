//! Pure column-wise transforms.
//!
//! Everything in here is a plain function over strings or cells with no
//! side effects; the pipeline decides which columns they apply to.

pub mod email;
pub mod text;

pub use email::normalize_email;
pub use text::{first_word, fold_text, strip_accents, title_case};
