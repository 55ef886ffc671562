//! TOML encoding of records.
//!
//! Records are written as a flat top-level table: strings are quoted,
//! integers, floats and booleans are bare. TOML has no null, so a record
//! holding [`Value::Null`] cannot be encoded.

use crate::error::{FormatError, Result};
use crate::formats::Encoder;
use crate::record::{Record, Value};

/// Media type of [`TomlEncoder`] output.
pub const CONTENT_TYPE: &str = "application/toml";

/// Convert a record to a TOML document.
///
/// # Examples
///
/// ```
/// use multiformat::{record, toml};
///
/// let doc = toml::record_to_toml(&record! { "name" => "John", "age" => 30 })?;
/// assert_eq!(doc, "name = \"John\"\nage = 30\n");
/// # Ok::<(), multiformat::FormatError>(())
/// ```
///
/// # Errors
///
/// Returns [`FormatError::UnsupportedValue`] naming the first field that
/// holds a null.
pub fn record_to_toml(record: &Record) -> Result<String> {
    if let Some((name, _)) = record.iter().find(|(_, value)| value.is_null()) {
        return Err(FormatError::unsupported_field(
            "toml",
            name,
            "TOML has no representation for null",
        ));
    }
    ::toml::to_string(record).map_err(|e| FormatError::encoding("toml", e))
}

/// [`Encoder`] for `application/toml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlEncoder;

impl Encoder for TomlEncoder {
    fn encode(&self, record: &Record) -> Result<String> {
        record_to_toml(record)
    }

    fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }
}
