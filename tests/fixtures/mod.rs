//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable person records built through the public setters.

use persona_validators::PersonRecord;

/// A record with all six fields populated.
pub fn full_record() -> PersonRecord {
    let mut record = PersonRecord::new();
    record
        .set_name("  Juan Carlos Pérez ")
        .and_then(|r| r.set_age(30))
        .and_then(|r| r.set_document_id("123-45-678"))
        .and_then(|r| r.set_email("Juan.Perez@Email.com"))
        .and_then(|r| r.set_phone("+591 (4) 444-5555"))
        .and_then(|r| r.set_address("  Avenida Principal   123, Ciudad "))
        .and_then(|r| r.finalize())
        .expect("fixture values are valid");
    record
}

/// A record with only the mandatory name set.
#[allow(dead_code)]
pub fn name_only(name: &str) -> PersonRecord {
    let mut record = PersonRecord::new();
    record.set_name(name).expect("fixture name is valid");
    record
}
