//! Character-class checks shared by the personal and contact validators.

use once_cell::sync::Lazy;
use regex::Regex;

/// Letters, Spanish accented letters and whitespace, across the whole string.
static LETTERS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑüÜ\s]+$").expect("Failed to compile letters regex")
});

/// Same as [`LETTERS_REGEX`] plus ASCII digits.
static ALPHANUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9áéíóúÁÉÍÓÚñÑüÜ\s]+$").expect("Failed to compile alphanumeric regex")
});

/// True iff `value` is non-empty and made only of ASCII digits `0`-`9`.
///
/// Signs, whitespace and separators are rejected.
///
/// # Example
///
/// ```
/// use persona_validators::validators::all_digits;
///
/// assert!(all_digits("12345"));
/// assert!(!all_digits("abc123"));
/// assert!(!all_digits(""));
/// ```
pub fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// True iff `value` is non-empty and every character is an ASCII letter,
/// a Spanish accented vowel, `ñ`/`Ñ`, `ü`/`Ü`, or whitespace.
pub fn all_letters(value: &str) -> bool {
    LETTERS_REGEX.is_match(value)
}

/// Like [`all_letters`] but also accepts ASCII digits.
pub fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC_REGEX.is_match(value)
}

/// Trim `value` and collapse every run of whitespace into a single space.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove every occurrence of the `separators` characters from `value`.
pub fn strip_chars(value: &str, separators: &[char]) -> String {
    value.chars().filter(|c| !separators.contains(c)).collect()
}

/// Length in characters, not bytes.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}
