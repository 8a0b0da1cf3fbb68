use chrono::Utc;
use sea_orm::{DatabaseConnection, Set};

use app::persistence::locations::LocationQuery;
use app::persistence::query::{QueryError, ShapePlan};
use app::persistence::repository::Repository;
use models::domains::locations;
use models::queries::location::{LocationFilters, LocationShape};
use models::schemas::CreatedId;

fn location(name: &str, latitude: f64, longitude: f64) -> locations::ActiveModel {
    locations::ActiveModel {
        name: Set(name.to_owned()),
        latitude: Set(latitude),
        longitude: Set(longitude),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
}

pub(crate) async fn test_repository(db: &DatabaseConnection) {
    let repository = Repository::<locations::Entity>::new(db);

    let created = repository
        .create_entity(location("Arena", 1.0, 2.0))
        .await
        .unwrap();
    assert_eq!(created, vec![CreatedId { id: 1 }]);
    for n in 2..=5 {
        repository
            .create_entity(location(&format!("Hall {n}"), 0.0, 0.0))
            .await
            .unwrap();
    }

    assert!(repository.entity_exists(1).await.unwrap());
    assert!(!repository.entity_exists(99).await.unwrap());

    let rows = repository.get_single_query(1, LocationShape::Mini).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Arena");
    assert!(repository.get_single_query(99, LocationShape::Base).await.unwrap().is_empty());

    let mut query = LocationQuery::with_filters(LocationFilters::default(), 24);
    query.page = Some(2);
    query.page_size = Some(2);
    query.return_full_count = true;
    let page = repository.get_query(&query).await.unwrap();
    let ids: Vec<i64> = page.rows.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, [3, 4]);
    assert_eq!(page.total, Some(5));

    query.page = Some(4);
    let page = repository.get_query(&query).await.unwrap();
    assert!(page.rows.is_empty());
    assert_eq!(page.total, Some(5));

    query.query = LocationFilters {
        lat: Some(1.0),
        ..Default::default()
    };
    let err = repository.get_query(&query).await.unwrap_err();
    assert!(matches!(err, QueryError::InvalidFilterCombination { .. }));

    let updated = repository
        .update_entity(99, locations::ActiveModel {
            name: Set("Nowhere".to_owned()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(updated.is_empty());

    let deleted = repository.delete_entity(5).await.unwrap();
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].name, "Hall 5");
    assert!(repository.delete_entity(5).await.unwrap().is_empty());

    repository
        .create_entity(location("Central Park", 40.7829, -73.9654))
        .await
        .unwrap();
    repository
        .create_entity(location("Centre Pompidou", 48.8607, 2.3522))
        .await
        .unwrap();

    let mut nearby = LocationQuery::with_filters(
        LocationFilters {
            lat: Some(40.7),
            lng: Some(-73.9),
            distance: Some(50.0),
            ..Default::default()
        },
        24,
    );
    nearby.return_full_count = true;
    let page = repository.get_query(&nearby).await.unwrap();
    let names: Vec<&str> = page.rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Central Park"]);
    assert_eq!(page.total, Some(1));

    nearby.query.distance = Some(5.0);
    assert!(repository.get_query(&nearby).await.unwrap().rows.is_empty());

    let mut everything = LocationQuery::with_filters(LocationFilters::default(), 24);
    everything.response_type = LocationShape::Extended;
    let keys = ShapePlan::resolve::<locations::Entity>(LocationShape::Extended).aliases();
    let page = repository.get_query(&everything).await.unwrap();
    assert!(!page.rows.is_empty());
    for row in &page.rows {
        for key in &keys {
            assert!(row.get(*key).is_some(), "{key} missing from {row}");
        }
        assert_eq!(row["tournamentCount"], 0);
    }
}
