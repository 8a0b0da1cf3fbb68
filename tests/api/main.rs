use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use url::Url;

use api::setup_router;
use app::config::{Config, ConfigInner};
use utils::testing::setup_test_db;

mod group;
mod location;
mod root;
mod tournament;
mod user;

fn test_config() -> Config {
    Config::from(ConfigInner {
        db_url: "sqlite::memory:".to_owned(),
        host: "127.0.0.1".to_owned(),
        port: 8000,
        allowed_origin: "http://localhost:3000".to_owned(),
        public_url: Url::parse("http://localhost:8000").unwrap(),
    })
}

async fn test_app() -> Router {
    let db = setup_test_db("sqlite::memory:")
        .await
        .expect("Set up db failed!");
    setup_router(test_config(), db).expect("Set up router failed!")
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

/// Creates a user and returns its id.
async fn create_user(app: &Router, username: &str, country: &str) -> i64 {
    let (status, body) = post(
        app,
        "/users",
        serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "country": country,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn root_main() {
    let app = test_app().await;
    root::test_health(&app).await;
    root::test_openapi(&app).await;
}

#[tokio::test]
async fn user_main() {
    let app = test_app().await;
    user::test_post_users(&app).await;
    user::test_post_users_error(&app).await;
    user::test_get_users(&app).await;
    user::test_get_users_error(&app).await;
    user::test_users_id(&app).await;
}

#[tokio::test]
async fn group_main() {
    let app = test_app().await;
    group::test_groups(&app).await;
}

#[tokio::test]
async fn location_main() {
    let app = test_app().await;
    location::test_locations(&app).await;
}

#[tokio::test]
async fn tournament_main() {
    let app = test_app().await;
    tournament::test_tournaments(&app).await;
}
