//! Tests for the address book and record operations used by the commands.

use contact_assistant::{AddressBook, AssistantError, NotFoundError, PhoneNumber, ValidationError};

mod e2e;
use e2e::fixtures::{invalid_phones, sample_record, sample_record_with_birthday};

/// Ten-digit strings are accepted and kept exactly as entered.
#[test]
fn test_phone_accepts_ten_digits() {
    for raw in ["0000000000", "0123456789", "9999999999", "5551234567"] {
        let phone = PhoneNumber::new(raw).unwrap();
        assert_eq!(phone.as_str(), raw);
        assert_eq!(phone.to_string(), raw);
    }
}

/// Everything else is a validation error.
#[test]
fn test_phone_rejects_everything_else() {
    for raw in invalid_phones() {
        match PhoneNumber::new(raw) {
            Err(ValidationError::InvalidPhone(value)) => assert_eq!(value, raw),
            other => panic!("Expected InvalidPhone for {:?}, got: {:?}", raw, other),
        }
    }
}

/// `find` returns what was added; `delete` removes it.
#[test]
fn test_add_find_delete() {
    let mut book = AddressBook::new();
    let record = sample_record_with_birthday("alice", "1234567890", 1990, 5, 20);

    assert!(book.add_record(record.clone()).is_none());
    assert_eq!(book.find("alice"), Some(&record));

    let removed = book.delete("alice");
    assert_eq!(removed, Some(record));
    assert!(book.find("alice").is_none());
}

/// Deleting an absent name is a no-op.
#[test]
fn test_delete_absent_is_noop() {
    let mut book: AddressBook = vec![sample_record("bob", &["1111111111"])]
        .into_iter()
        .collect();

    assert!(book.delete("alice").is_none());
    assert_eq!(book.len(), 1);
}

/// Re-adding a name replaces the record in place (last write wins).
#[test]
fn test_add_record_replaces_in_place() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("alice", &["1111111111"]));
    book.add_record(sample_record("bob", &["2222222222"]));

    let replaced = book.add_record(sample_record("alice", &["3333333333"]));
    assert_eq!(replaced, Some(sample_record("alice", &["1111111111"])));

    let names: Vec<&str> = book.names().collect();
    assert_eq!(names, vec!["alice", "bob"]);
    assert_eq!(
        book.find("alice").unwrap().primary_phone().unwrap().as_str(),
        "3333333333"
    );
}

/// `require` reports a missing contact as NotFound.
#[test]
fn test_require_missing_contact() {
    let book = AddressBook::new();
    match book.require("ghost") {
        Err(AssistantError::NotFound(NotFoundError::Contact(name))) => assert_eq!(name, "ghost"),
        other => panic!("Expected contact not found, got: {:?}", other),
    }
}

/// Editing keeps the phone count and the edited slot.
#[test]
fn test_edit_phone_keeps_count_and_position() {
    let mut record = sample_record("carol", &["1111111111", "2222222222", "3333333333"]);

    record.edit_phone("1111111111", "4444444444").unwrap();
    assert_eq!(record.phones().len(), 3);
    assert_eq!(record.phones()[0].as_str(), "4444444444");
    assert!(record.find_phone("1111111111").is_none());
}

/// A failed edit leaves the record unchanged.
#[test]
fn test_edit_phone_failures_do_not_mutate() {
    let mut record = sample_record("carol", &["1111111111", "2222222222"]);
    let before = record.clone();

    assert!(matches!(
        record.edit_phone("9999999999", "4444444444"),
        Err(AssistantError::NotFound(NotFoundError::Phone { .. }))
    ));
    assert!(matches!(
        record.edit_phone("1111111111", "44"),
        Err(AssistantError::Validation(ValidationError::InvalidPhone(_)))
    ));
    assert!(matches!(
        record.edit_phone("1111111111", "2222222222"),
        Err(AssistantError::Validation(ValidationError::DuplicatePhone(_)))
    ));
    assert_eq!(record, before);
}

/// Records survive a JSON round-trip with their birthday.
#[test]
fn test_record_json_round_trip() {
    let record = sample_record_with_birthday("dana", "1234567890", 1985, 12, 31);
    let json = serde_json::to_string(&record).unwrap();
    let back: contact_assistant::Record = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

/// Invalid phones in serialized data are rejected on load.
#[test]
fn test_record_json_rejects_invalid_phone() {
    let json = r#"{"name":"dana","phones":["12"]}"#;
    assert!(serde_json::from_str::<contact_assistant::Record>(json).is_err());
}

/// Serialized data cannot smuggle in a phone twice.
#[test]
fn test_record_json_rejects_duplicate_phone() {
    let json = r#"{"name":"dana","phones":["1111111111","2222222222","1111111111"]}"#;
    assert!(serde_json::from_str::<contact_assistant::Record>(json).is_err());

    let json = r#"{"name":"dana","phones":["1111111111","2222222222"]}"#;
    let record: contact_assistant::Record = serde_json::from_str(json).unwrap();
    assert_eq!(record, sample_record("dana", &["1111111111", "2222222222"]));
}
