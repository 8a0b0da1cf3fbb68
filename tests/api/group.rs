use axum::{Router, http::StatusCode};
use serde_json::json;

use super::{create_user, get, post};

pub(super) async fn test_groups(app: &Router) {
    let owner = create_user(app, "owner", "KE").await;
    let member = create_user(app, "member", "GH").await;
    let outsider = create_user(app, "outsider", "GH").await;

    let (status, body) = post(app, "/groups", json!({ "name": "Chess Club", "ownerId": owner })).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let group = body["id"].as_i64().unwrap();

    let (status, _) = post(app, "/groups", json!({ "name": "Chess Club", "ownerId": member })).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = post(app, "/groups", json!({ "name": "Ghost Club", "ownerId": 999 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // the owner joined on creation
    let members_uri = format!("/groups/{group}/members");
    let (status, _) = post(app, &members_uri, json!({ "userId": owner })).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = post(app, &members_uri, json!({ "userId": member })).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["role"], "member");

    let (status, _) = post(app, "/groups/999/members", json!({ "userId": member })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(app, &format!("/groups/{group}?responseType=withMembers")).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["name"], "Chess Club");
    assert_eq!(body["owner"]["username"], "owner");
    assert_eq!(body["memberCount"].as_f64(), Some(2.0));
    let mut members: Vec<&str> = body["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["username"].as_str().unwrap())
        .collect();
    members.sort_unstable();
    assert_eq!(members, ["member", "owner"]);

    let (status, body) = get(app, &format!("/users?groupId={group}&returnFullCount=true")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metadata"]["pagination"]["total"], 2);
    assert!(
        body["results"]
            .as_array()
            .unwrap()
            .iter()
            .all(|user| user["id"] != outsider)
    );

    let (status, body) = get(app, &format!("/users/{member}?responseType=extended")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["groupCount"].as_f64(), Some(1.0));
    assert_eq!(body["groups"], json!([{ "id": group, "name": "Chess Club" }]));

    let (status, body) = get(app, &format!("/groups?userId={outsider}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], json!([]));
    assert_eq!(body["metadata"]["pagination"]["pageSize"], 12);
}
