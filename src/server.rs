//! HTTP surface over a [`FormatRegistry`].
//!
//! Routes:
//! - `GET /api/data?format=<id>` — the configured record in the requested
//!   format (default from [`ServerConfig::default_format`])
//! - `GET /api/formats` — `{"formats": [...]}` in registry order
//! - `GET /health` — liveness probe
//!
//! An unknown format answers `400` with a JSON body whose `detail` field
//! reads `Invalid format. Available: json, xml, csv, yaml, toml`. A record the
//! chosen format cannot represent answers `500`.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::FormatError;
use crate::formats::{Format, FormatRegistry};
use crate::record::Record;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    registry: Arc<FormatRegistry>,
    record: Arc<Record>,
    default_format: Arc<str>,
}

impl AppState {
    /// Bundle a registry with the record it serves.
    #[must_use]
    pub fn new(
        registry: FormatRegistry,
        record: Record,
        default_format: impl Into<Arc<str>>,
    ) -> Self {
        AppState {
            registry: Arc::new(registry),
            record: Arc::new(record),
            default_format: default_format.into(),
        }
    }

    /// State built from a loaded configuration and the standard registry.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        AppState::new(
            FormatRegistry::standard(),
            config.record.clone(),
            config.default_format.as_str(),
        )
    }

    /// The registry requests are resolved against.
    #[must_use]
    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }
}

/// Query string of `/api/data`.
#[derive(Debug, Deserialize)]
pub struct DataQuery {
    /// Requested format identifier
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
struct FormatsResponse<'a> {
    formats: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a str>,
    #[serde(skip_serializing_if = "no_alternatives")]
    available: &'a [String],
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn no_alternatives(available: &&[String]) -> bool {
    available.is_empty()
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

impl IntoResponse for FormatError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let requested = match &self {
            FormatError::UnknownFormat { requested, .. } => Some(requested.as_str()),
            FormatError::UnsupportedValue { .. } => None,
        };
        let body = ErrorResponse {
            detail: self.hint(),
            format: requested,
            available: self.available(),
        };
        (status, Json(body)).into_response()
    }
}

/// Build the router for `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/data", get(get_data))
        .route("/api/formats", get(list_formats))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn get_data(State(state): State<AppState>, Query(query): Query<DataQuery>) -> Response {
    let format = query.format.as_deref().unwrap_or(&state.default_format);

    match state.registry.encode(&state.record, format) {
        Ok(encoded) => (
            [(header::CONTENT_TYPE, encoded.content_type)],
            encoded.body,
        )
            .into_response(),
        Err(err) => {
            if !err.is_client_error() {
                warn!(format, error = %err, "record could not be encoded");
            }
            err.into_response()
        }
    }
}

async fn list_formats(State(state): State<AppState>) -> Response {
    Json(FormatsResponse {
        formats: state.registry.formats(),
    })
    .into_response()
}

async fn health() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate")],
        Json(HealthResponse {
            status: "up",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Bind `config.bind` and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn serve(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind).await?;
    info!(
        addr = %listener.local_addr()?,
        formats = ?format_names(&state.registry),
        default_format = %state.default_format,
        "server listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Display names of the registered formats; custom identifiers are kept as-is.
fn format_names(registry: &FormatRegistry) -> Vec<String> {
    registry
        .formats()
        .into_iter()
        .map(|id| Format::from_identifier(id).map_or_else(|| id.to_string(), |f| f.to_string()))
        .collect()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
