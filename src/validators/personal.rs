//! Personal-data checks: age, name and identity document.

use super::primitive::{all_digits, all_letters, char_len, collapse_whitespace, strip_chars};

/// Maximum accepted age.
pub const MAX_AGE: u32 = 150;

/// Name length bounds, in characters after whitespace collapse.
pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;

/// Document length bounds, in digits after separators are stripped.
pub const DOCUMENT_MIN_DIGITS: usize = 7;
pub const DOCUMENT_MAX_DIGITS: usize = 12;

const DOCUMENT_SEPARATORS: [char; 2] = [' ', '-'];

/// True iff `value` is a plain digit string whose value is between 0 and 150.
///
/// # Example
///
/// ```
/// use persona_validators::validators::valid_age;
///
/// assert!(valid_age("25"));
/// assert!(!valid_age("200"));
/// assert!(!valid_age("-5"));
/// ```
pub fn valid_age(value: &str) -> bool {
    if !all_digits(value) {
        return false;
    }

    // Overflowing digit strings are far above the limit.
    value.parse::<u32>().is_ok_and(|age| age <= MAX_AGE)
}

/// True iff `value`, with whitespace collapsed, is 2-50 letters and inner spaces.
pub fn valid_name(value: &str) -> bool {
    if value.is_empty() || char_len(value.trim()) < NAME_MIN_LEN {
        return false;
    }

    let collapsed = collapse_whitespace(value);
    let len = char_len(&collapsed);
    all_letters(&collapsed) && (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len)
}

/// True iff `value`, without spaces and hyphens, is 7-12 digits.
pub fn valid_document_id(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }

    let stripped = strip_chars(value, &DOCUMENT_SEPARATORS);
    all_digits(&stripped) && (DOCUMENT_MIN_DIGITS..=DOCUMENT_MAX_DIGITS).contains(&stripped.len())
}
