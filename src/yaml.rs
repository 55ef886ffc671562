//! YAML encoding of records.
//!
//! Records are written as a flat block-style mapping in insertion order, with
//! non-ASCII text left unescaped.

use crate::error::{FormatError, Result};
use crate::formats::Encoder;
use crate::record::Record;

/// Media type of [`YamlEncoder`] output.
pub const CONTENT_TYPE: &str = "application/x-yaml";

/// Convert a record to a YAML block mapping.
///
/// # Examples
///
/// ```
/// use multiformat::{record, yaml};
///
/// let yaml = yaml::record_to_yaml(&record! { "name" => "John", "age" => 30 })?;
/// assert_eq!(yaml, "name: John\nage: 30\n");
/// # Ok::<(), multiformat::FormatError>(())
/// ```
///
/// # Errors
///
/// Returns an error only if `serde_yaml` rejects the record.
pub fn record_to_yaml(record: &Record) -> Result<String> {
    serde_yaml::to_string(record).map_err(|e| FormatError::encoding("yaml", e))
}

/// [`Encoder`] for `application/x-yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlEncoder;

impl Encoder for YamlEncoder {
    fn encode(&self, record: &Record) -> Result<String> {
        record_to_yaml(record)
    }

    fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }
}
