//! Contact-data checks: email, phone and postal address.

use super::primitive::{all_digits, char_len, collapse_whitespace, strip_chars};
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum email length, in characters.
pub const EMAIL_MAX_LEN: usize = 100;

/// Phone length bounds, in digits after formatting is stripped.
pub const PHONE_MIN_DIGITS: usize = 8;
pub const PHONE_MAX_DIGITS: usize = 15;

/// Address length bounds, in characters after whitespace collapse.
pub const ADDRESS_MIN_LEN: usize = 5;
pub const ADDRESS_MAX_LEN: usize = 200;

const PHONE_SEPARATORS: [char; 5] = [' ', '-', '(', ')', '+'];

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});

static ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9áéíóúÁÉÍÓÚñÑüÜ\s.,#-]+$").expect("Failed to compile address regex")
});

/// True iff `value` has the `local@domain.tld` shape and is at most 100 characters.
///
/// The final domain label must be two or more letters.
///
/// # Example
///
/// ```
/// use persona_validators::validators::valid_email;
///
/// assert!(valid_email("usuario@ejemplo.com"));
/// assert!(!valid_email("correo_invalido"));
/// ```
pub fn valid_email(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }

    EMAIL_REGEX.is_match(value) && char_len(value) <= EMAIL_MAX_LEN
}

/// True iff `value`, without spaces, hyphens, parentheses and plus signs, is 8-15 digits.
pub fn valid_phone(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }

    let stripped = strip_chars(value, &PHONE_SEPARATORS);
    all_digits(&stripped) && (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&stripped.len())
}

/// True iff `value`, with whitespace collapsed, is 5-200 characters drawn from
/// letters, digits, spaces and `. , # -`.
pub fn valid_address(value: &str) -> bool {
    if value.is_empty() || char_len(value.trim()) < ADDRESS_MIN_LEN {
        return false;
    }

    let collapsed = collapse_whitespace(value);
    let len = char_len(&collapsed);
    ADDRESS_REGEX.is_match(&collapsed) && (ADDRESS_MIN_LEN..=ADDRESS_MAX_LEN).contains(&len)
}
