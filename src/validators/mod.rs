//! Pure validation predicates for personal and contact data.
//!
//! The checks are grouped in three tiers:
//!
//! - **primitive**: character-class checks (`all_digits`, `all_letters`, `is_alphanumeric`)
//! - **personal**: `valid_age`, `valid_name`, `valid_document_id`
//! - **contact**: `valid_email`, `valid_phone`, `valid_address`
//!
//! Every predicate takes a `&str`, returns `bool` and never panics. Patterns are
//! matched against the whole string.

pub mod contact;
pub mod personal;
pub mod primitive;

pub use contact::{valid_address, valid_email, valid_phone};
pub use personal::{valid_age, valid_document_id, valid_name};
pub use primitive::{all_digits, all_letters, collapse_whitespace, is_alphanumeric, strip_chars};
