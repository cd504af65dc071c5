//! Factory shortcuts for building person records.

use crate::error::RecordResult;
use crate::models::PersonRecord;

/// Entry points that create a [`PersonRecord`] already populated in one call.
///
/// # Example
///
/// ```
/// use persona_validators::PersonBuilder;
///
/// let ana = PersonBuilder::basic("Ana María Silva", 25).unwrap();
/// let copy = PersonBuilder::copy_from(&ana).unwrap();
/// assert_eq!(copy, ana);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonBuilder;

impl PersonBuilder {
    /// A fresh, empty record.
    pub fn new_person() -> PersonRecord {
        PersonRecord::new()
    }

    /// A record with name and age set, in that order.
    ///
    /// # Errors
    ///
    /// Returns the first setter failure; the age is not attempted when the name fails.
    pub fn basic(name: impl AsRef<str>, age: i64) -> RecordResult<PersonRecord> {
        let mut record = PersonRecord::new();
        record.set_name(name)?.set_age(age)?;
        Ok(record)
    }

    /// A new record holding the same data as `source`.
    ///
    /// Every populated field is routed back through its setter, so the copy
    /// never holds a value its own validators would reject.
    ///
    /// # Errors
    ///
    /// Returns the first setter failure, in field declaration order.
    pub fn copy_from(source: &PersonRecord) -> RecordResult<PersonRecord> {
        let mut record = PersonRecord::new();

        if let Some(name) = source.name() {
            record.set_name(name)?;
        }
        if let Some(age) = source.age() {
            record.set_age(i64::from(age))?;
        }
        if let Some(document_id) = source.document_id() {
            record.set_document_id(document_id)?;
        }
        if let Some(email) = source.email() {
            record.set_email(email)?;
        }
        if let Some(phone) = source.phone() {
            record.set_phone(phone)?;
        }
        if let Some(address) = source.address() {
            record.set_address(address)?;
        }

        tracing::debug!(fields = record.populated_fields().len(), "Record copied");
        Ok(record)
    }
}
