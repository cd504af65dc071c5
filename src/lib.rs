//! Persona Validators - validation rules for personal and contact data, and a
//! person record that only ever stores validated values.
//!
//! # Architecture
//!
//! - **validators**: Pure `&str -> bool` predicates in three tiers (primitive, personal, contact)
//! - **models**: The person record, its field identifiers and data views
//! - **builder**: Factory shortcuts (`basic`, `copy_from`)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration for the demo binary
//!
//! # Example
//!
//! ```
//! use persona_validators::{PersonRecord, RecordError};
//!
//! let mut record = PersonRecord::new();
//! record.set_name("María González").unwrap();
//!
//! let err = record.set_email("correo_invalido").unwrap_err();
//! assert!(matches!(err, RecordError::InvalidEmail { .. }));
//! assert!(record.email().is_none());
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod models;
pub mod validators;

// Re-export commonly used types
pub use builder::PersonBuilder;
pub use config::{Config, OutputFormat};
pub use error::{ConfigError, ConfigResult, RecordError, RecordResult};
pub use models::{ContactData, Field, PersonData, PersonRecord, PersonalData};
