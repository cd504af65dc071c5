//! Person record assembled field by field through validating setters.

use super::field::Field;
use crate::error::{RecordError, RecordResult};
use crate::validators::{
    valid_address, valid_age, valid_document_id, valid_email, valid_name, valid_phone,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person's personal and contact data.
///
/// Each field is populated only if it passed its validator when it was set.
/// Setters take `&mut self` and hand the record back, so calls chain with `?`:
///
/// ```
/// use persona_validators::PersonRecord;
///
/// # fn main() -> Result<(), persona_validators::RecordError> {
/// let mut record = PersonRecord::new();
/// record
///     .set_name("Juan Pérez")?
///     .set_age(30)?
///     .set_email("Juan@Email.com")?
///     .finalize()?;
///
/// assert_eq!(record.name(), Some("Juan Pérez"));
/// assert_eq!(record.email(), Some("juan@email.com"));
/// # Ok(())
/// # }
/// ```
///
/// `finalize` does not freeze the record; setters remain callable afterwards.
/// The record is not internally synchronized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordInput")]
pub struct PersonRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    document_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

/// Personal-data view: name, age and identity document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalData {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub document_id: Option<String>,
}

/// Contact-data view: email, phone and address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactData {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Incoming field map for deserialization. The age is wide enough that any
/// JSON integer reaches `set_age`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecordInput {
    name: Option<String>,
    age: Option<i64>,
    document_id: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
}

/// Combined view of every field. Unset fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonData {
    #[serde(flatten)]
    pub personal: PersonalData,

    #[serde(flatten)]
    pub contact: ContactData,
}

impl PersonRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name. Stores the trimmed value.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidName` if `valid_name` rejects the value.
    pub fn set_name(&mut self, name: impl AsRef<str>) -> RecordResult<&mut Self> {
        let name = name.as_ref();
        if !valid_name(name) {
            return Err(self.reject(RecordError::InvalidName {
                value: name.to_string(),
                rule: Field::Name.rule(),
            }));
        }

        self.name = Some(name.trim().to_string());
        tracing::trace!(field = %Field::Name, "Field stored");
        Ok(self)
    }

    /// Set the age.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidAge` if the value is negative or above 150.
    pub fn set_age(&mut self, age: i64) -> RecordResult<&mut Self> {
        let accepted = if valid_age(&age.to_string()) {
            u8::try_from(age).ok()
        } else {
            None
        };

        let Some(age) = accepted else {
            return Err(self.reject(RecordError::InvalidAge {
                value: age,
                rule: Field::Age.rule(),
            }));
        };

        self.age = Some(age);
        tracing::trace!(field = %Field::Age, "Field stored");
        Ok(self)
    }

    /// Set the identity document. Stores the input as given, separators included.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidDocumentId` if `valid_document_id` rejects the value.
    pub fn set_document_id(&mut self, document_id: impl AsRef<str>) -> RecordResult<&mut Self> {
        let document_id = document_id.as_ref();
        if !valid_document_id(document_id) {
            return Err(self.reject(RecordError::InvalidDocumentId {
                value: document_id.to_string(),
                rule: Field::DocumentId.rule(),
            }));
        }

        self.document_id = Some(document_id.to_string());
        tracing::trace!(field = %Field::DocumentId, "Field stored");
        Ok(self)
    }

    /// Set the email. Stores the lower-cased, trimmed value.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidEmail` if `valid_email` rejects the value.
    pub fn set_email(&mut self, email: impl AsRef<str>) -> RecordResult<&mut Self> {
        let email = email.as_ref();
        if !valid_email(email) {
            return Err(self.reject(RecordError::InvalidEmail {
                value: email.to_string(),
                rule: Field::Email.rule(),
            }));
        }

        self.email = Some(email.trim().to_lowercase());
        tracing::trace!(field = %Field::Email, "Field stored");
        Ok(self)
    }

    /// Set the phone number. Stores the input as given, formatting included.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidPhone` if `valid_phone` rejects the value.
    pub fn set_phone(&mut self, phone: impl AsRef<str>) -> RecordResult<&mut Self> {
        let phone = phone.as_ref();
        if !valid_phone(phone) {
            return Err(self.reject(RecordError::InvalidPhone {
                value: phone.to_string(),
                rule: Field::Phone.rule(),
            }));
        }

        self.phone = Some(phone.to_string());
        tracing::trace!(field = %Field::Phone, "Field stored");
        Ok(self)
    }

    /// Set the address. Stores the trimmed value; inner whitespace is kept as given.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidAddress` if `valid_address` rejects the value.
    pub fn set_address(&mut self, address: impl AsRef<str>) -> RecordResult<&mut Self> {
        let address = address.as_ref();
        if !valid_address(address) {
            return Err(self.reject(RecordError::InvalidAddress {
                value: address.to_string(),
                rule: Field::Address.rule(),
            }));
        }

        self.address = Some(address.trim().to_string());
        tracing::trace!(field = %Field::Address, "Field stored");
        Ok(self)
    }

    /// Finish construction. Only the name is mandatory.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingRequiredField` if no name has been set.
    pub fn finalize(&mut self) -> RecordResult<&mut Self> {
        if self.name.is_none() {
            return Err(self.reject(RecordError::MissingRequiredField { field: Field::Name }));
        }
        Ok(self)
    }

    fn reject(&self, err: RecordError) -> RecordError {
        tracing::debug!(field = %err.field(), rule = err.rule(), "Value rejected");
        err
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn age(&self) -> Option<u8> {
        self.age
    }

    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Whether no field has been populated.
    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| !self.is_set(field))
    }

    /// Whether `field` currently holds a value.
    pub fn is_set(&self, field: Field) -> bool {
        self.value_of(field).is_some()
    }

    /// The stored value of `field`, rendered as a string.
    pub fn value_of(&self, field: Field) -> Option<String> {
        match field {
            Field::Name => self.name.clone(),
            Field::Age => self.age.map(|age| age.to_string()),
            Field::DocumentId => self.document_id.clone(),
            Field::Email => self.email.clone(),
            Field::Phone => self.phone.clone(),
            Field::Address => self.address.clone(),
        }
    }

    /// Name, age and identity document.
    pub fn personal_data(&self) -> PersonalData {
        PersonalData {
            name: self.name.clone(),
            age: self.age,
            document_id: self.document_id.clone(),
        }
    }

    /// Email, phone and address.
    pub fn contact_data(&self) -> ContactData {
        ContactData {
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }

    /// Every field, personal data first.
    pub fn all_data(&self) -> PersonData {
        PersonData {
            personal: self.personal_data(),
            contact: self.contact_data(),
        }
    }

    /// Populated fields only, in declaration order.
    pub fn populated_fields(&self) -> Vec<(Field, String)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.value_of(field).map(|value| (field, value)))
            .collect()
    }
}

impl fmt::Display for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .populated_fields()
            .into_iter()
            .map(|(field, value)| format!("{}: {}", field.label(), value))
            .collect();
        write!(f, "Person({})", parts.join(", "))
    }
}

/// Deserialized records go through the setters like any other input.
impl TryFrom<RecordInput> for PersonRecord {
    type Error = RecordError;

    fn try_from(input: RecordInput) -> Result<Self, Self::Error> {
        let mut record = PersonRecord::new();

        if let Some(name) = input.name {
            record.set_name(name)?;
        }
        if let Some(age) = input.age {
            record.set_age(age)?;
        }
        if let Some(document_id) = input.document_id {
            record.set_document_id(document_id)?;
        }
        if let Some(email) = input.email {
            record.set_email(email)?;
        }
        if let Some(phone) = input.phone {
            record.set_phone(phone)?;
        }
        if let Some(address) = input.address {
            record.set_address(address)?;
        }

        Ok(record)
    }
}
