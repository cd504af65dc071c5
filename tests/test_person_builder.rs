//! Record assembly through setters, finalize and the factory shortcuts.

mod fixtures;

use fixtures::{full_record, name_only};
use persona_validators::{Field, PersonBuilder, PersonRecord, RecordError};

#[test]
fn test_full_chain_stores_normalized_values() {
    let record = full_record();

    assert_eq!(record.name(), Some("Juan Carlos Pérez"));
    assert_eq!(record.age(), Some(30));
    assert_eq!(record.document_id(), Some("123-45-678"));
    assert_eq!(record.email(), Some("juan.perez@email.com"));
    assert_eq!(record.phone(), Some("+591 (4) 444-5555"));
    assert_eq!(record.address(), Some("Avenida Principal   123, Ciudad"));
}

#[test]
fn test_failed_set_leaves_record_untouched() {
    let before = full_record();
    let mut record = before.clone();

    assert!(record.set_name("R2D2").is_err());
    assert!(record.set_age(151).is_err());
    assert!(record.set_document_id("12-34").is_err());
    assert!(record.set_email("nobody@nowhere").is_err());
    assert!(record.set_phone("call me").is_err());
    assert!(record.set_address("???").is_err());

    assert_eq!(record, before);
}

#[test]
fn test_errors_carry_raw_input_and_rule() {
    let mut record = PersonRecord::new();

    let err = record.set_document_id(" 12-34 ").unwrap_err();
    assert_eq!(
        err,
        RecordError::InvalidDocumentId {
            value: " 12-34 ".to_string(),
            rule: "digits only, 7-12 digits",
        }
    );

    let err = record.set_address("   ").unwrap_err();
    assert_eq!(err.field(), Field::Address);
    assert_eq!(err.rule(), "5-200 chars, restricted character set");
    assert!(record.is_empty());
}

#[test]
fn test_set_name_is_idempotent() {
    let mut once = PersonRecord::new();
    once.set_name(" Ana Lucía ").unwrap();

    let mut twice = PersonRecord::new();
    twice.set_name(" Ana Lucía ").unwrap().set_name(" Ana Lucía ").unwrap();

    assert_eq!(once.name(), twice.name());
    assert_eq!(once, twice);
}

#[test]
fn test_values_may_be_overwritten() {
    let mut record = name_only("Ana");
    record.set_age(20).unwrap().set_age(21).unwrap();
    assert_eq!(record.age(), Some(21));
}

#[test]
fn test_finalize_without_name_fails() {
    let mut record = PersonRecord::new();
    record.set_email("ana@correo.com").unwrap();

    let err = record.finalize().unwrap_err();
    assert!(matches!(
        err,
        RecordError::MissingRequiredField { field: Field::Name }
    ));
}

#[test]
fn test_finalize_with_only_name() {
    let mut record = name_only("Ana");
    let built = record.finalize().unwrap();

    assert_eq!(built.name(), Some("Ana"));
    assert!(built.age().is_none());
    assert!(built.document_id().is_none());
    assert!(built.email().is_none());
    assert!(built.phone().is_none());
    assert!(built.address().is_none());
}

#[test]
fn test_basic_rejects_name_first() {
    let err = PersonBuilder::basic("123abc", 30).unwrap_err();
    assert!(matches!(err, RecordError::InvalidName { ref value, .. } if value == "123abc"));
}

#[test]
fn test_basic_then_extend() {
    let mut record = PersonBuilder::basic("Ana María Silva", 25).unwrap();
    record.set_email("ana.silva@correo.com").unwrap();

    assert_eq!(
        record.to_string(),
        "Person(Name: Ana María Silva, Age: 25, Email: ana.silva@correo.com)"
    );
}

#[test]
fn test_copy_from_preserves_populated_fields() {
    let source = full_record();
    let copy = PersonBuilder::copy_from(&source).unwrap();

    assert_eq!(copy.populated_fields(), source.populated_fields());
    assert_eq!(copy.all_data(), source.all_data());
    assert_eq!(copy, source);
}

#[test]
fn test_copy_from_partial_record() {
    let mut source = name_only("Ana");
    source.set_phone("70012345").unwrap();

    let copy = PersonBuilder::copy_from(&source).unwrap();
    assert_eq!(copy.populated_fields(), source.populated_fields());
    assert!(copy.email().is_none());
}

#[test]
fn test_copy_from_unicode_whitespace_values() {
    let mut source = PersonRecord::new();
    source
        .set_name("\u{a0}Ana\u{2003}Lucía\u{3000}")
        .unwrap()
        .set_age(0)
        .unwrap()
        .set_document_id(" 1234 5678 ")
        .unwrap()
        .set_email("ANA.LUCIA@Correo.ORG")
        .unwrap()
        .set_phone(" +591 (4) 444-5555 ")
        .unwrap()
        .set_address("\u{2003}Calle\u{a0}\u{a0}Ñuñoa #12,\tDepto. 3-B\u{a0}")
        .unwrap();

    assert_eq!(source.name(), Some("Ana\u{2003}Lucía"));
    assert_eq!(source.address(), Some("Calle\u{a0}\u{a0}Ñuñoa #12,\tDepto. 3-B"));

    let copy = PersonBuilder::copy_from(&source).unwrap();
    assert_eq!(copy.populated_fields(), source.populated_fields());
    assert_eq!(copy, source);
}

#[test]
fn test_copy_from_boundary_lengths() {
    let mut source = PersonRecord::new();
    source
        .set_name(format!("{} {}", "a".repeat(24), "ñ".repeat(25)))
        .unwrap()
        .set_age(150)
        .unwrap()
        .set_document_id("123456789012")
        .unwrap()
        .set_phone("123456789012345")
        .unwrap()
        .set_address("é".repeat(200))
        .unwrap();

    let copy = PersonBuilder::copy_from(&source).unwrap();
    assert_eq!(copy, source);
}

#[test]
fn test_copy_is_independent() {
    let source = full_record();
    let mut copy = PersonBuilder::copy_from(&source).unwrap();
    copy.set_name("Juan Carlos Pérez Hijo").unwrap();

    assert_eq!(source.name(), Some("Juan Carlos Pérez"));
    assert_eq!(copy.name(), Some("Juan Carlos Pérez Hijo"));
}

#[test]
fn test_display_full_record() {
    assert_eq!(
        full_record().to_string(),
        "Person(Name: Juan Carlos Pérez, Age: 30, Document: 123-45-678, \
         Email: juan.perez@email.com, Phone: +591 (4) 444-5555, \
         Address: Avenida Principal   123, Ciudad)"
    );
}
