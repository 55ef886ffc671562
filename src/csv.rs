//! CSV encoding of records.
//!
//! A record becomes exactly two CSV rows: a header row with the field names
//! and a data row with the field values, both in insertion order. Rows end in
//! `\r\n` as RFC 4180 prescribes, and values containing commas, quotes or line
//! breaks are quoted by the `csv` crate.
//!
//! An empty record still yields two rows, both empty: `\r\n\r\n`.
//!
//! Only single-record encoding is supported.

use crate::error::{FormatError, Result};
use crate::formats::Encoder;
use crate::record::Record;
use ::csv::{Terminator, WriterBuilder};

/// Media type of [`CsvEncoder`] output.
pub const CONTENT_TYPE: &str = "text/csv";

/// Convert a single record to a header row plus a data row.
///
/// # Examples
///
/// ```
/// use multiformat::{csv, record};
///
/// let csv = csv::record_to_csv(&record! { "name" => "John", "age" => "30" })?;
/// assert_eq!(csv, "name,age\r\nJohn,30\r\n");
/// # Ok::<(), multiformat::FormatError>(())
/// ```
///
/// # Errors
///
/// Returns an error if the CSV cannot be written.
pub fn record_to_csv(record: &Record) -> Result<String> {
    // `csv` writes a zero-field row as `""`.
    if record.is_empty() {
        return Ok("\r\n\r\n".to_string());
    }

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(record.keys())
        .map_err(|e| FormatError::encoding("csv", e))?;
    writer
        .write_record(record.values().map(ToString::to_string))
        .map_err(|e| FormatError::encoding("csv", e))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| FormatError::encoding("csv", e))?;
    String::from_utf8(bytes).map_err(|e| FormatError::encoding("csv", e))
}

/// [`Encoder`] for `text/csv`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvEncoder;

impl Encoder for CsvEncoder {
    fn encode(&self, record: &Record) -> Result<String> {
        record_to_csv(record)
    }

    fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;

    #[test]
    fn test_csv_two_lines() {
        let record = crate::record! { "name" => "John", "age" => "30" };
        let csv = record_to_csv(&record).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines, ["name,age", "John,30"]);
        assert!(csv.ends_with("\r\n"));
        assert!(!csv.ends_with("\r\n\r\n"));
    }

    #[test]
    fn test_csv_integer_and_string_render_alike() {
        let as_text = record_to_csv(&crate::record! { "age" => "30" }).unwrap();
        let as_int = record_to_csv(&crate::record! { "age" => 30 }).unwrap();
        assert_eq!(as_text, as_int);
    }

    #[test]
    fn test_csv_escaping() {
        let record = crate::record! { "title" => "Title, with comma", "quote" => "say \"hi\"" };
        let csv = record_to_csv(&record).unwrap();

        assert!(csv.contains("\"Title, with comma\""));
        assert!(csv.contains("\"say \"\"hi\"\"\""));
    }

    #[test]
    fn test_csv_null_is_empty_cell() {
        let record = crate::record! { "a" => 1, "b" => Value::Null, "c" => 3 };
        let csv = record_to_csv(&record).unwrap();
        assert_eq!(csv, "a,b,c\r\n1,,3\r\n");
    }

    #[test]
    fn test_csv_empty_record() {
        let csv = record_to_csv(&Record::new()).unwrap();
        assert_eq!(csv, "\r\n\r\n");
        assert_eq!(csv.lines().collect::<Vec<_>>(), ["", ""]);
    }

    #[test]
    fn test_csv_content_type() {
        assert_eq!(CsvEncoder.content_type(), "text/csv");
    }
}
