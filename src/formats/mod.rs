//! Format dispatch for records.
//!
//! This module provides the [`Encoder`] trait every output format implements,
//! the [`Format`] enum naming the built-in formats, and the
//! [`FormatRegistry`] that resolves a format identifier to its encoder.
//!
//! # Supported Formats
//!
//! | Identifier | Module | Content type |
//! |------------|--------|--------------|
//! | `json` | [`json`](crate::json) | `application/json` |
//! | `xml`  | [`xml`](crate::xml)   | `application/xml` |
//! | `csv`  | [`csv`](crate::csv)   | `text/csv` |
//! | `yaml` | [`yaml`](crate::yaml) | `application/x-yaml` |
//! | `toml` | [`toml`](crate::toml) | `application/toml` |
//!
//! # Usage
//!
//! ```
//! use multiformat::{record, FormatRegistry};
//!
//! let registry = FormatRegistry::standard();
//! let record = record! { "name" => "John", "age" => 30, "city" => "NYC" };
//!
//! let encoded = registry.encode(&record, "xml")?;
//! assert_eq!(encoded.content_type, "application/xml");
//! assert!(encoded.body.contains("<name>John</name>"));
//!
//! assert!(registry.encode(&record, "pdf").is_err());
//! # Ok::<(), multiformat::FormatError>(())
//! ```

mod registry;
mod traits;

pub use registry::{Encoded, FormatRegistry};
pub use traits::Encoder;

pub use crate::csv::CsvEncoder;
pub use crate::json::JsonEncoder;
pub use crate::toml::TomlEncoder;
pub use crate::xml::XmlEncoder;
pub use crate::yaml::YamlEncoder;

// ============================================================================
// Built-in formats
// ============================================================================

/// Built-in formats, in the order the standard registry lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Format {
    /// JSON object, pretty-printed
    Json,
    /// `<root>` element with one child per field
    Xml,
    /// Header row plus data row
    Csv,
    /// Flat block mapping
    Yaml,
    /// Flat top-level table
    Toml,
}

impl Format {
    /// Every built-in format, in registration order.
    pub const ALL: [Format; 5] = [
        Format::Json,
        Format::Xml,
        Format::Csv,
        Format::Yaml,
        Format::Toml,
    ];

    /// Look up a built-in format by identifier.
    ///
    /// Identifiers are lowercase and matched exactly.
    ///
    /// # Example
    ///
    /// ```
    /// use multiformat::formats::Format;
    ///
    /// assert_eq!(Format::from_identifier("yaml"), Some(Format::Yaml));
    /// assert_eq!(Format::from_identifier("YAML"), None);
    /// ```
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.identifier() == identifier)
    }

    /// The identifier the format is registered under.
    #[must_use]
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Csv => "csv",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }

    /// Get the human-readable name for this format.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Xml => "XML",
            Self::Csv => "CSV",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        }
    }

    /// A fresh encoder for this format.
    #[must_use]
    pub fn encoder(&self) -> Box<dyn Encoder> {
        match self {
            Self::Json => Box::new(JsonEncoder),
            Self::Xml => Box::new(XmlEncoder),
            Self::Csv => Box::new(CsvEncoder),
            Self::Yaml => Box::new(YamlEncoder),
            Self::Toml => Box::new(TomlEncoder),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
