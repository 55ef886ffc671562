//! Server configuration.
//!
//! Settings are layered with the `config` crate:
//! 1. **Defaults**: bind `127.0.0.1:8000`, default format `json`, and the
//!    sample record `{"name": "John", "age": 30, "city": "NYC"}`.
//! 2. **File**: a TOML file whose path is read from `MULTIFORMAT_CONFIG`.
//!    Keys missing from the file keep their defaults.
//! 3. **Environment**: variables prefixed with `MULTIFORMAT_` override the
//!    matching top-level key (`MULTIFORMAT_BIND`, `MULTIFORMAT_DEFAULT_FORMAT`).
//!
//! # Example file
//!
//! ```toml
//! bind = "0.0.0.0:8080"
//! default_format = "yaml"
//!
//! [record]
//! name = "Ada"
//! born = 1815
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File, FileFormat, Map};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::formats::FormatRegistry;
use crate::record::Record;

/// Environment variable holding the config file path.
pub const CONFIG_PATH_ENV: &str = "MULTIFORMAT_CONFIG";
/// Prefix of environment variables overriding config keys.
pub const ENV_PREFIX: &str = "MULTIFORMAT";

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A source could not be read, or the merged settings do not match
    /// [`ServerConfig`].
    #[error("Config error{}: {source}", file_context(.path))]
    Load {
        /// Config file, if one was requested
        path: Option<PathBuf>,
        /// Underlying `config` error
        #[source]
        source: ::config::ConfigError,
    },

    /// A setting holds a value outside its domain.
    #[error("Invalid setting `{key}`: {reason}")]
    Invalid {
        /// Setting name
        key: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

fn file_context(path: &Option<PathBuf>) -> String {
    path.as_deref()
        .map_or_else(String::new, |p| format!(" in {}", p.display()))
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub bind: SocketAddr,
    /// Format used when a request names none.
    pub default_format: String,
    /// Record served by `/api/data`.
    pub record: Record,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            default_format: "json".to_string(),
            record: crate::record! {
                "name" => "John",
                "age" => 30,
                "city" => "NYC",
            },
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// Reads the file named by `MULTIFORMAT_CONFIG` if set, then applies the
    /// `MULTIFORMAT_*` overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// merged settings do not deserialize.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        Self::load(path.as_deref(), Some(Self::environment(None)))
    }

    /// Load configuration from a TOML file, without environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load(Some(path.as_ref()), None)
    }

    /// `MULTIFORMAT_*` source, read from `vars` instead of the process
    /// environment when given.
    fn environment(vars: Option<Map<String, String>>) -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .source(vars)
    }

    fn load(path: Option<&Path>, env: Option<Environment>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            info!("Loading config from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|source| ConfigError::Load {
                path: path.map(Path::to_path_buf),
                source,
            })
    }

    /// Check the configuration against the registry that will serve it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the default format is not
    /// registered.
    pub fn validate(&self, registry: &FormatRegistry) -> Result<(), ConfigError> {
        registry
            .resolve(&self.default_format)
            .map(|_| ())
            .map_err(|e| ConfigError::Invalid {
                key: "default_format",
                reason: e.hint(),
            })
    }
}
