//! JSON encoding of records.
//!
//! Produces a pretty-printed JSON object with two-space indentation. Keys
//! follow the record's insertion order and non-ASCII text is written as-is
//! rather than as `\u` escapes.
//!
//! JSON has no NaN or infinity, so non-finite floats are written as `null`
//! (the `serde_json` behavior).
//!
//! # Examples
//!
//! ```
//! use multiformat::{json, record};
//!
//! let json = json::record_to_json(&record! { "name" => "John", "age" => 30 })?;
//! assert_eq!(json, "{\n  \"name\": \"John\",\n  \"age\": 30\n}");
//! # Ok::<(), multiformat::FormatError>(())
//! ```

use crate::error::{FormatError, Result};
use crate::formats::Encoder;
use crate::record::Record;

/// Media type of [`JsonEncoder`] output.
pub const CONTENT_TYPE: &str = "application/json";

/// Convert a record to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error only if `serde_json` rejects the record, which cannot
/// happen for the scalar values a [`Record`] holds.
pub fn record_to_json(record: &Record) -> Result<String> {
    serde_json::to_string_pretty(record).map_err(|e| FormatError::encoding("json", e))
}

/// [`Encoder`] for `application/json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn encode(&self, record: &Record) -> Result<String> {
        record_to_json(record)
    }

    fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }
}
