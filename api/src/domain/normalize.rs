//! Text normalization helpers
//!
//! - Digit extraction for phones, zip codes and tax ids
//! - Label folding for category search (diacritics stripped, lowercase)

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Keep only ASCII digits
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize an optional phone number to its digits.
///
/// Blank or digit-free input is treated as absent, so `"(19) 99999-9999"`
/// and `"19999999999"` normalize to the same value.
pub fn normalize_phone(raw: Option<&str>) -> Option<String> {
    raw.map(digits_only).filter(|digits| !digits.is_empty())
}

/// Fold a category label into its searchable form.
///
/// ```text
/// "Cafés "  -> "cafes"
/// "AÇAÍ"    -> "acai"
/// ```
pub fn normalize_label(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}
