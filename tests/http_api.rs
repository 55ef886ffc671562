//! HTTP API integration tests.

#![cfg(feature = "server")]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use multiformat::config::ServerConfig;
use multiformat::server::{router, AppState};
use serde_json::Value;
use tower::util::ServiceExt;

fn app() -> Router {
    router(AppState::from_config(&ServerConfig::default()))
}

/// Issue a GET and return status, content type and body text.
async fn get(app: &Router, uri: &str) -> (StatusCode, String, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_list_formats() {
    let (status, content_type, body) = get(&app(), "/api/formats").await;
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/json");
    assert_eq!(
        json,
        serde_json::json!({ "formats": ["json", "xml", "csv", "yaml", "toml"] })
    );
}

#[tokio::test]
async fn test_each_format_served_with_its_content_type() {
    let app = app();
    let cases = [
        ("json", "application/json", "\"city\": \"NYC\""),
        ("xml", "application/xml", "<city>NYC</city>"),
        ("csv", "text/csv", "name,age,city\r\nJohn,30,NYC\r\n"),
        ("yaml", "application/x-yaml", "city: NYC"),
        ("toml", "application/toml", "city = \"NYC\""),
    ];

    for (format, expected_type, fragment) in cases {
        let (status, content_type, body) = get(&app, &format!("/api/data?format={format}")).await;

        assert_eq!(status, StatusCode::OK, "{format}");
        assert_eq!(content_type, expected_type, "{format}");
        assert!(body.contains(fragment), "{format}: {body}");
    }
}

#[tokio::test]
async fn test_invalid_format_is_rejected() {
    let (status, _, body) = get(&app(), "/api/data?format=pdf").await;
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["detail"],
        "Invalid format. Available: json, xml, csv, yaml, toml"
    );
    assert_eq!(json["available"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_configured_default_format() {
    let config = ServerConfig {
        default_format: "yaml".to_string(),
        ..ServerConfig::default()
    };
    let app = router(AppState::from_config(&config));

    let (status, content_type, body) = get(&app, "/api/data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/x-yaml");
    assert_eq!(body, "name: John\nage: 30\ncity: NYC\n");
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _, _) = get(&app(), "/api/nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
