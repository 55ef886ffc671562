//! Encoder trait implemented by every output format.
//!
//! An encoder is a stateless strategy: it turns a [`Record`] into text and
//! reports the media type of that text. Encoders hold no mutable state, so a
//! single instance can serve any number of concurrent requests.
//!
//! # Example
//!
//! ```
//! use multiformat::formats::{Encoder, JsonEncoder};
//! use multiformat::record;
//!
//! let encoder = JsonEncoder;
//! let body = encoder.encode(&record! { "name" => "John" })?;
//!
//! assert_eq!(encoder.content_type(), "application/json");
//! assert_eq!(body, "{\n  \"name\": \"John\"\n}");
//! # Ok::<(), multiformat::FormatError>(())
//! ```

use crate::error::Result;
use crate::record::Record;

/// A strategy converting a [`Record`] into one textual representation.
///
/// The trait is object-safe; the [`FormatRegistry`](super::FormatRegistry)
/// stores encoders as `Box<dyn Encoder>`.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Emit fields in the record's insertion order
/// - Return the same bytes for the same record on every call
/// - Report failures only through [`FormatError::UnsupportedValue`](crate::FormatError::UnsupportedValue)
pub trait Encoder: std::fmt::Debug + Send + Sync {
    /// Encode the record.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnsupportedValue`](crate::FormatError::UnsupportedValue)
    /// if the record holds a value this format cannot represent.
    fn encode(&self, record: &Record) -> Result<String>;

    /// Media type of the encoded text. Constant for a given encoder.
    fn content_type(&self) -> &'static str;
}

impl<E: Encoder + ?Sized> Encoder for Box<E> {
    fn encode(&self, record: &Record) -> Result<String> {
        (**self).encode(record)
    }

    fn content_type(&self) -> &'static str {
        (**self).content_type()
    }
}
