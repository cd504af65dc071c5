//! Error types for persona validators.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Validators themselves only answer `bool`; these errors are produced by the
//! record setters and by configuration loading.

use crate::models::Field;
use thiserror::Error;

/// Errors raised while assembling a [`PersonRecord`](crate::models::PersonRecord).
///
/// Every variant except `MissingRequiredField` carries the rejected input
/// exactly as the caller passed it, together with the rule it broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Name rejected by `valid_name`
    #[error("Invalid name '{value}': {rule}")]
    InvalidName { value: String, rule: &'static str },

    /// Age rejected by `valid_age`
    #[error("Invalid age {value}: {rule}")]
    InvalidAge { value: i64, rule: &'static str },

    /// Identity document rejected by `valid_document_id`
    #[error("Invalid document id '{value}': {rule}")]
    InvalidDocumentId { value: String, rule: &'static str },

    /// Email rejected by `valid_email`
    #[error("Invalid email '{value}': {rule}")]
    InvalidEmail { value: String, rule: &'static str },

    /// Phone rejected by `valid_phone`
    #[error("Invalid phone '{value}': {rule}")]
    InvalidPhone { value: String, rule: &'static str },

    /// Address rejected by `valid_address`
    #[error("Invalid address '{value}': {rule}")]
    InvalidAddress { value: String, rule: &'static str },

    /// A mandatory field was unset at finalize time
    #[error("Required field missing: {}", .field.as_str())]
    MissingRequiredField { field: Field },
}

impl RecordError {
    /// The field this error refers to.
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidName { .. } => Field::Name,
            Self::InvalidAge { .. } => Field::Age,
            Self::InvalidDocumentId { .. } => Field::DocumentId,
            Self::InvalidEmail { .. } => Field::Email,
            Self::InvalidPhone { .. } => Field::Phone,
            Self::InvalidAddress { .. } => Field::Address,
            Self::MissingRequiredField { field } => *field,
        }
    }

    /// The human-readable rule that was violated.
    pub fn rule(&self) -> &'static str {
        match self {
            Self::InvalidName { rule, .. }
            | Self::InvalidAge { rule, .. }
            | Self::InvalidDocumentId { rule, .. }
            | Self::InvalidEmail { rule, .. }
            | Self::InvalidPhone { rule, .. }
            | Self::InvalidAddress { rule, .. } => *rule,
            Self::MissingRequiredField { .. } => "field is mandatory",
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
