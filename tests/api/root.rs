use axum::{Router, http::StatusCode};
use serde_json::json;

use super::get;

pub(super) async fn test_health(app: &Router) {
    let (status, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "database": true }));
}

pub(super) async fn test_openapi(app: &Router) {
    let (status, body) = get(app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    for path in ["/users", "/users/{id}", "/groups/{id}/members", "/locations", "/tournaments"] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}
