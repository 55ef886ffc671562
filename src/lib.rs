#![warn(missing_docs)]

//! # multiformat
//!
//! Encode a single flat record as JSON, XML, CSV, YAML or TOML, with the
//! output format picked at run time by a short identifier.
//!
//! ## Quick Start
//!
//! ```
//! use multiformat::{record, FormatRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = FormatRegistry::standard();
//! let record = record! { "name" => "John", "age" => 30, "city" => "NYC" };
//!
//! let encoded = registry.encode(&record, "csv")?;
//! assert_eq!(encoded.content_type, "text/csv");
//! assert_eq!(encoded.body, "name,age,city\r\nJohn,30,NYC\r\n");
//!
//! assert_eq!(registry.formats(), ["json", "xml", "csv", "yaml", "toml"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Unknown Formats
//!
//! ```
//! use multiformat::{record, FormatError, FormatRegistry};
//!
//! let err = FormatRegistry::standard()
//!     .encode(&record! { "a" => 1 }, "pdf")
//!     .unwrap_err();
//!
//! assert!(matches!(err, FormatError::UnknownFormat { .. }));
//! assert_eq!(err.hint(), "Invalid format. Available: json, xml, csv, yaml, toml");
//! ```
//!
//! ## Modules
//!
//! - [`record`] — Record and scalar value types
//! - [`formats`] — Encoder trait, built-in format list and registry
//! - [`json`] — JSON encoding
//! - [`xml`] — XML encoding
//! - [`csv`] — CSV encoding
//! - [`yaml`] — YAML encoding
//! - [`toml`] — TOML encoding
//! - [`error`] — Error types and result type
//! - `config` / `server` — HTTP surface (feature `server`)

pub mod csv;
pub mod error;
pub mod formats;
pub mod json;
pub mod macros;
pub mod record;
pub mod toml;
pub mod xml;
pub mod yaml;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use error::{FormatError, Result};
pub use formats::{Encoded, Encoder, Format, FormatRegistry};
pub use record::{Record, RecordBuilder, Value};
