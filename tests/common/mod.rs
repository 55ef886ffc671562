//! Common test helpers shared across the integration suites.

use multiformat::Record;

/// The record served by default: `{"name": "John", "age": 30, "city": "NYC"}`.
pub fn sample_record() -> Record {
    Record::builder()
        .field("name", "John")
        .field("age", 30)
        .field("city", "NYC")
        .build()
}

/// A record whose values are all text, as used for the CSV scenario.
#[allow(dead_code)]
pub fn text_record() -> Record {
    Record::builder()
        .field("name", "John")
        .field("age", "30")
        .build()
}
