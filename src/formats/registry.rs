//! Registry mapping format identifiers to encoders.

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::{Encoder, Format};
use crate::error::{FormatError, Result};
use crate::record::Record;

/// Output of [`FormatRegistry::encode`]: the body and its media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Encoded record
    pub body: String,
    /// Media type of `body`
    pub content_type: &'static str,
}

/// Ordered mapping from format identifier to [`Encoder`].
///
/// Built once, through explicit [`register`](Self::register) calls or
/// [`standard`](Self::standard), and read-only afterwards. Registration takes
/// `&mut self`, so a registry shared behind an `Arc` can be read from any
/// number of threads without locking.
///
/// Identifiers are listed in registration order.
#[derive(Debug, Default)]
pub struct FormatRegistry {
    encoders: IndexMap<String, Box<dyn Encoder>>,
}

impl FormatRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        FormatRegistry {
            encoders: IndexMap::new(),
        }
    }

    /// Registry holding every built-in [`Format`]: json, xml, csv, yaml, toml.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = FormatRegistry::new();
        for format in Format::ALL {
            registry.register_boxed(format.identifier(), format.encoder());
        }
        registry
    }

    /// Register `encoder` under `identifier`.
    ///
    /// Re-registering an identifier replaces its encoder but keeps its
    /// position in [`formats`](Self::formats). Returns the replaced encoder.
    pub fn register(
        &mut self,
        identifier: impl Into<String>,
        encoder: impl Encoder + 'static,
    ) -> Option<Box<dyn Encoder>> {
        self.register_boxed(identifier, Box::new(encoder))
    }

    /// Register an already boxed encoder. See [`register`](Self::register).
    pub fn register_boxed(
        &mut self,
        identifier: impl Into<String>,
        encoder: Box<dyn Encoder>,
    ) -> Option<Box<dyn Encoder>> {
        let identifier = identifier.into();
        debug!(format = %identifier, content_type = encoder.content_type(), "registering encoder");
        self.encoders.insert(identifier, encoder)
    }

    /// Resolve an identifier to its encoder.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnknownFormat`] listing every registered
    /// identifier if `identifier` is not one of them.
    pub fn resolve(&self, identifier: &str) -> Result<&dyn Encoder> {
        match self.encoders.get(identifier) {
            Some(encoder) => Ok(&**encoder),
            None => {
                debug!(requested = identifier, "unknown format requested");
                Err(FormatError::UnknownFormat {
                    requested: identifier.to_string(),
                    available: self.formats().into_iter().map(str::to_string).collect(),
                })
            }
        }
    }

    /// Content type of the encoder registered under `identifier`.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn content_type(&self, identifier: &str) -> Result<&'static str> {
        self.resolve(identifier)
            .map(|encoder| encoder.content_type())
    }

    /// Resolve `identifier` and encode `record` with it.
    ///
    /// Either both the body and content type are produced or an error is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnknownFormat`] for an unregistered identifier,
    /// or the encoder's [`FormatError::UnsupportedValue`].
    pub fn encode(&self, record: &Record, identifier: &str) -> Result<Encoded> {
        let encoder = self.resolve(identifier)?;
        let body = encoder.encode(record)?;
        trace!(format = identifier, bytes = body.len(), "record encoded");
        Ok(Encoded {
            body,
            content_type: encoder.content_type(),
        })
    }

    /// Registered identifiers, in registration order.
    #[must_use]
    pub fn formats(&self) -> Vec<&str> {
        self.encoders.keys().map(String::as_str).collect()
    }

    /// Returns `true` if `identifier` is registered.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.encoders.contains_key(identifier)
    }

    /// Number of registered formats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }
}
