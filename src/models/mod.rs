//! Data models for person records.
//!
//! This module contains the validated person record, its field identifiers and
//! the personal/contact data views it exposes.

pub mod field;
pub mod person;

pub use field::Field;
pub use person::{ContactData, PersonData, PersonRecord, PersonalData};
