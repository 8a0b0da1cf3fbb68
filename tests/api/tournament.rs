use axum::{
    Router,
    http::{Method, StatusCode},
};
use serde_json::json;

use super::{create_user, get, post, send};

pub(super) async fn test_tournaments(app: &Router) {
    let creator = create_user(app, "organiser", "NG").await;
    let (_, body) = post(
        app,
        "/locations",
        json!({ "name": "Town Hall", "country": "NG", "latitude": 6.45, "longitude": 3.39 }),
    )
    .await;
    let location = body["id"].as_i64().unwrap();

    let (status, body) = post(
        app,
        "/tournaments",
        json!({
            "name": "Spring Open",
            "createdBy": creator,
            "locationId": location,
            "startsAt": "2025-04-01T10:00:00Z",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let open = body["id"].as_i64().unwrap();

    let (status, _) = post(
        app,
        "/tournaments",
        json!({
            "name": "Invite Only",
            "privacy": "invitational",
            "createdBy": creator,
            "startsAt": "2025-05-01T10:00:00Z",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = post(
        app,
        "/tournaments",
        json!({ "name": "Nowhere Cup", "createdBy": creator, "locationId": 999, "startsAt": "2025-05-01T10:00:00Z" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(app, &format!("/tournaments/{open}?responseType=extended")).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["privacy"], "open");
    assert_eq!(body["location"], json!({ "id": location, "name": "Town Hall", "country": "NG" }));
    assert_eq!(body["group"], json!(null));
    assert_eq!(body["creator"]["username"], "organiser");

    let (status, body) = get(app, "/tournaments?privacy=invitational&responseType=mini").await;
    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Invite Only");
    assert!(results[0].get("location").is_none());

    let (status, body) = get(app, &format!("/locations/{location}?responseType=extended")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tournamentCount"].as_f64(), Some(1.0));

    let (status, body) = send(
        app,
        Method::PATCH,
        &format!("/tournaments/{open}"),
        Some(json!({ "privacy": "invitational" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["privacy"], "invitational");

    let (_, body) = get(app, "/tournaments?privacy=invitational&returnFullCount=true").await;
    assert_eq!(body["metadata"]["pagination"]["total"], 2);
    assert_eq!(body["metadata"]["query"], json!({ "privacy": "invitational" }));
}
