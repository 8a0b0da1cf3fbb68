use axum::{Router, http::StatusCode};
use serde_json::json;

use super::{get, post};

pub(super) async fn test_locations(app: &Router) {
    for (name, lat, lng) in [
        ("Central Park", 40.7829, -73.9654),
        ("Centre Pompidou", 48.8607, 2.3522),
        ("Kenyatta Hall", -1.2864, 36.8172),
    ] {
        let (status, body) = post(
            app,
            "/locations",
            json!({ "name": name, "latitude": lat, "longitude": lng }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
    }

    let (status, body) = get(app, "/locations?name=cEN&field=name").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Central Park", "Centre Pompidou"]);
    assert_eq!(body["metadata"]["pagination"]["pageSize"], 24);

    // "Kenyatta Hall" contains "hall" but does not start with it
    let (_, body) = get(app, "/locations?name=hall").await;
    assert_eq!(body["results"], json!([]));

    let (status, body) = get(app, "/locations?lat=40.7&lng=-73.9").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "filters lat, lng, distance must be supplied together");

    let (status, _) = get(app, "/locations?distance=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(app, "/locations?lat=40.7&lng=-73.9&distance=50").await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["results"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["results"][0]["name"], "Central Park");
    assert_eq!(body["metadata"]["query"]["distance"], 50.0);

    let (status, body) = get(app, "/locations/2?responseType=extended").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tournamentCount"].as_f64(), Some(0.0));
    assert_eq!(body["latitude"].as_f64(), Some(48.8607));
}
