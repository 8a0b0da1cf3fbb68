use axum::{
    Router,
    http::{Method, StatusCode},
};
use serde_json::json;

use super::{create_user, get, post, send};

pub(super) async fn test_post_users(app: &Router) {
    assert_eq!(create_user(app, "john_doe", "USA").await, 1);
    assert_eq!(create_user(app, "jane_doe", "USA").await, 2);
    assert_eq!(create_user(app, "ada", "UK").await, 3);
}

pub(super) async fn test_post_users_error(app: &Router) {
    let (status, body) = post(
        app,
        "/users",
        json!({ "username": "john_doe", "email": "another@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");

    let (status, body) = post(app, "/users", json!({ "username": "x", "email": "not-an-email" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Validation error");
    assert!(body["details"]["email"].is_array(), "{body}");
    assert!(body["details"]["username"].is_array(), "{body}");
}

pub(super) async fn test_get_users(app: &Router) {
    let (status, body) = get(
        app,
        "/users?username=DOE&field=username&order=desc&returnFullCount=true",
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let usernames: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|user| user["username"].as_str().unwrap())
        .collect();
    assert_eq!(usernames, ["john_doe", "jane_doe"]);

    let metadata = &body["metadata"];
    assert_eq!(metadata["pagination"], json!({ "page": 1, "pageSize": 10, "total": 2 }));
    assert_eq!(metadata["query"], json!({ "username": "DOE" }));
    assert_eq!(
        metadata["links"]["next"],
        "http://localhost:8000/users?username=DOE&field=username&order=desc&returnFullCount=true&page=2"
    );
    assert_eq!(
        metadata["links"]["prev"],
        "http://localhost:8000/users?username=DOE&field=username&order=desc&returnFullCount=true&page=0"
    );

    // second page of one, no total unless asked for
    let (status, body) = get(app, "/users?pageSize=2&page=2").await;
    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], 3);
    assert!(body["metadata"]["pagination"].get("total").is_none());

    // unknown shape and sort fall back to the defaults
    let (status, body) = get(app, "/users?responseType=galaxyBrain&field=shoeSize&country=USA").await;
    assert_eq!(status, StatusCode::OK);
    let first = &body["results"][0];
    assert_eq!(first["id"], 1);
    assert!(first.get("createdAt").is_some(), "{first}");
    assert!(first.get("bio").is_none(), "{first}");

    let (_, body) = get(app, "/users?responseType=mini").await;
    let keys: Vec<&String> = body["results"][0].as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 2, "{keys:?}");
}

pub(super) async fn test_get_users_error(app: &Router) {
    let (status, _) = get(app, "/users?page=0").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = get(app, "/users?pageSize=101").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = get(app, "/users?page=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

pub(super) async fn test_users_id(app: &Router) {
    let (status, body) = get(app, "/users/1?responseType=admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "john_doe");
    assert_eq!(body["email"], "john_doe@example.com");
    assert_eq!(body["groups"], json!([]));

    let (status, body) = get(app, "/users/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "user not found");

    let (status, body) = send(app, Method::PATCH, "/users/1", Some(json!({ "bio": "Plays chess" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bio"], "Plays chess");
    assert_eq!(body["username"], "john_doe");

    let (status, _) = send(app, Method::PATCH, "/users/999", Some(json!({ "bio": "ghost" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(app, Method::DELETE, "/users/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "ada");

    let (status, _) = get(app, "/users/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(app, Method::DELETE, "/users/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
