//! Error types for format dispatch and encoding.
//!
//! This module provides the [`FormatError`] type returned by every encoder and
//! by the [`FormatRegistry`](crate::formats::FormatRegistry), and the [`Result`]
//! convenience type.

use thiserror::Error;

/// Error type for format resolution and encoding.
///
/// An unknown identifier is a caller mistake; an unsupported value is a
/// mismatch between a record and the format chosen to represent it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The requested format identifier is not registered.
    #[error("Unknown format: {requested}")]
    UnknownFormat {
        /// The identifier the caller asked for.
        requested: String,
        /// Every identifier the registry knows, in registration order.
        available: Vec<String>,
    },

    /// The record holds a value the chosen format cannot represent.
    #[error("Unsupported value for {format}{}: {reason}", field_suffix(.field))]
    UnsupportedValue {
        /// Identifier of the format that rejected the value.
        format: &'static str,
        /// Offending field, when the failure can be pinned to one.
        field: Option<String>,
        /// Human-readable description of the failure.
        reason: String,
    },
}

fn field_suffix(field: &Option<String>) -> String {
    field
        .as_deref()
        .map_or_else(String::new, |name| format!(" (field `{name}`)"))
}

impl FormatError {
    /// Build an [`UnsupportedValue`](Self::UnsupportedValue) error tied to a field.
    pub fn unsupported_field(
        format: &'static str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FormatError::UnsupportedValue {
            format,
            field: Some(field.into()),
            reason: reason.into(),
        }
    }

    /// Build an [`UnsupportedValue`](Self::UnsupportedValue) error from a
    /// failure of the underlying encoding library.
    pub fn encoding(format: &'static str, source: impl std::fmt::Display) -> Self {
        FormatError::UnsupportedValue {
            format,
            field: None,
            reason: source.to_string(),
        }
    }

    /// The identifiers a caller could have used instead.
    ///
    /// Empty for errors other than [`UnknownFormat`](Self::UnknownFormat).
    #[must_use]
    pub fn available(&self) -> &[String] {
        match self {
            FormatError::UnknownFormat { available, .. } => available,
            FormatError::UnsupportedValue { .. } => &[],
        }
    }

    /// Client-facing message listing the valid identifiers.
    ///
    /// ```
    /// use multiformat::FormatRegistry;
    ///
    /// let err = FormatRegistry::standard().resolve("pdf").unwrap_err();
    /// assert_eq!(err.hint(), "Invalid format. Available: json, xml, csv, yaml, toml");
    /// ```
    #[must_use]
    pub fn hint(&self) -> String {
        match self {
            FormatError::UnknownFormat { available, .. } => {
                format!("Invalid format. Available: {}", available.join(", "))
            }
            FormatError::UnsupportedValue { .. } => self.to_string(),
        }
    }

    /// Whether this error was caused by the caller's input rather than by the
    /// record/format pairing.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, FormatError::UnknownFormat { .. })
    }
}

/// Convenience type alias for [`std::result::Result`] with [`FormatError`].
pub type Result<T> = std::result::Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_format_display() {
        let err = FormatError::UnknownFormat {
            requested: "pdf".to_string(),
            available: vec!["json".to_string(), "xml".to_string()],
        };
        assert_eq!(err.to_string(), "Unknown format: pdf");
        assert_eq!(err.hint(), "Invalid format. Available: json, xml");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_unsupported_value_display() {
        let err = FormatError::unsupported_field("toml", "middle_name", "null is not representable");
        assert_eq!(
            err.to_string(),
            "Unsupported value for toml (field `middle_name`): null is not representable"
        );
        assert!(err.available().is_empty());
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_encoding_error_has_no_field() {
        let err = FormatError::encoding("csv", "writer closed");
        assert_eq!(err.to_string(), "Unsupported value for csv: writer closed");
    }
}
