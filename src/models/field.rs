//! Field identifiers for a person record.

use std::fmt;

/// One of the six fields a [`PersonRecord`](super::PersonRecord) can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Age,
    DocumentId,
    Email,
    Phone,
    Address,
}

impl Field {
    /// All fields in declaration order (personal data first, then contact data).
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Age,
        Field::DocumentId,
        Field::Email,
        Field::Phone,
        Field::Address,
    ];

    /// Snake-case key used in data views and serialized records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::DocumentId => "document_id",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
        }
    }

    /// Label used by the record's `Display` rendering.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Age => "Age",
            Self::DocumentId => "Document",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
        }
    }

    /// Human-readable description of the rule a value must satisfy.
    pub fn rule(self) -> &'static str {
        match self {
            Self::Name => "must be letters only, 2-50 chars",
            Self::Age => "must be 0-150",
            Self::DocumentId => "digits only, 7-12 digits",
            Self::Email => "must be a valid email shape",
            Self::Phone => "must be 8-15 digits",
            Self::Address => "5-200 chars, restricted character set",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys() {
        let keys: Vec<&str> = Field::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            keys,
            vec!["name", "age", "document_id", "email", "phone", "address"]
        );
    }

    #[test]
    fn test_field_display() {
        assert_eq!(format!("{}", Field::DocumentId), "document_id");
        assert_eq!(Field::DocumentId.label(), "Document");
    }
}
