//! Sample records for address book tests.

#![allow(dead_code)]

use contact_assistant::{Birthday, ContactName, Record};

use super::ymd;

/// A record with a name and the given phones, no birthday.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(ContactName::new(name).expect("valid test name"));
    for phone in phones {
        record.add_phone(phone).expect("valid test phone");
    }
    record
}

/// A record with one phone and a birthday.
pub fn sample_record_with_birthday(
    name: &str,
    phone: &str,
    year: i32,
    month: u32,
    day: u32,
) -> Record {
    let mut record = sample_record(name, &[phone]);
    record.set_birthday(Birthday::from(ymd(year, month, day)));
    record
}

/// Strings that must never be accepted as phone numbers.
pub fn invalid_phones() -> Vec<&'static str> {
    vec![
        "",
        "123",
        "123456789",
        "12345678901",
        "12345abcde",
        "+123456789",
        "123-456-78",
        " 1234567890",
        "1234567890 ",
        "١٢٣٤٥٦٧٨٩٠",
    ]
}
