use chrono::Utc;
use sea_orm::{DbConn, JsonValue, Set};

use models::domains::locations;
use models::params::location::{CreateLocationParams, UpdateLocationParams};
use models::queries::location::{LocationFilters, LocationShape, LocationSort};
use models::schemas::{CreatedId, pagination::Page};

use super::query::{EntityQuery, Field, Join, Predicate, QueryEntity, QueryError, ShapeLayer};
use crate::error::AppError;

pub type LocationQuery = EntityQuery<locations::Entity>;

const RADIUS_FILTERS: &[&str] = &["lat", "lng", "distance"];

impl QueryEntity for locations::Entity {
    const NAME: &'static str = "location";
    const TABLE: &'static str = "locations";
    const DEFAULT_PAGE_SIZE: u64 = 24;

    type Filters = LocationFilters;
    type Sort = LocationSort;
    type Shape = LocationShape;

    fn primary_key() -> locations::Column {
        locations::Column::Id
    }

    fn predicates(filters: &LocationFilters) -> Result<Vec<Predicate>, QueryError> {
        let mut predicates = Vec::new();
        if let Some(name) = &filters.name {
            predicates.push(Predicate::starts_with("name", name));
        }
        if let Some(country) = &filters.country {
            predicates.push(Predicate::equals("country", country.clone()));
        }
        match (filters.lat, filters.lng, filters.distance) {
            (Some(lat), Some(lng), Some(radius_km)) => predicates.push(Predicate::WithinRadius {
                latitude: "latitude",
                longitude: "longitude",
                lat,
                lng,
                radius_km,
            }),
            (None, None, None) => {}
            _ => {
                return Err(QueryError::InvalidFilterCombination {
                    required: RADIUS_FILTERS,
                });
            }
        }
        Ok(predicates)
    }

    fn layer(shape: LocationShape) -> ShapeLayer {
        match shape {
            LocationShape::Mini => ShapeLayer::fields(vec![
                Field::column("id", "id"),
                Field::column("name", "name"),
            ]),
            LocationShape::Base => ShapeLayer::fields(vec![
                Field::column("country", "country"),
                Field::column("latitude", "latitude"),
                Field::column("longitude", "longitude"),
            ]),
            LocationShape::Extended => ShapeLayer::fields(vec![
                Field::column("address", "address"),
                Field::column("created_at", "createdAt"),
                Field::count("t", "id", "tournamentCount"),
            ])
            .with_joins(vec![Join::many(
                "tournaments",
                "t",
                ("locations", "id"),
                "location_id",
            )]),
        }
    }

    fn sort_column(key: LocationSort) -> locations::Column {
        match key {
            LocationSort::Id => locations::Column::Id,
            LocationSort::Name => locations::Column::Name,
            LocationSort::Country => locations::Column::Country,
        }
    }
}

pub async fn search_locations(
    db: &DbConn,
    query: &LocationQuery,
) -> Result<Page<JsonValue>, AppError> {
    super::search::<locations::Entity>(db, query).await
}

pub async fn get_location(
    db: &DbConn,
    id: i32,
    shape: LocationShape,
) -> Result<JsonValue, AppError> {
    super::find::<locations::Entity>(db, id, shape).await
}

pub async fn create_location(
    db: &DbConn,
    params: CreateLocationParams,
) -> Result<CreatedId, AppError> {
    let location = locations::ActiveModel {
        name: Set(params.name),
        address: Set(params.address),
        country: Set(params.country),
        latitude: Set(params.latitude),
        longitude: Set(params.longitude),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    };
    super::create::<locations::Entity, _>(db, location).await
}

pub async fn update_location(
    db: &DbConn,
    id: i32,
    params: UpdateLocationParams,
) -> Result<locations::Model, AppError> {
    let mut location = locations::ActiveModel::default();
    if let Some(name) = params.name {
        location.name = Set(name);
    }
    if let Some(address) = params.address {
        location.address = Set(Some(address));
    }
    if let Some(country) = params.country {
        location.country = Set(Some(country));
    }
    if let Some(latitude) = params.latitude {
        location.latitude = Set(latitude);
    }
    if let Some(longitude) = params.longitude {
        location.longitude = Set(longitude);
    }
    super::update::<locations::Entity, _>(db, id, location).await
}

pub async fn delete_location(db: &DbConn, id: i32) -> Result<locations::Model, AppError> {
    super::remove::<locations::Entity>(db, id).await
}
