use chrono::Utc;
use sea_orm::{ActiveEnum, DbConn, JsonValue, Set};

use models::domains::{
    groups, locations, sea_orm_active_enums::TournamentPrivacy, tournaments, users,
};
use models::params::tournament::{CreateTournamentParams, UpdateTournamentParams};
use models::queries::tournament::{TournamentFilters, TournamentShape, TournamentSort};
use models::schemas::{CreatedId, pagination::Page};

use super::query::{EntityQuery, Field, Join, Predicate, QueryEntity, QueryError, ShapeLayer};
use crate::error::AppError;

pub type TournamentQuery = EntityQuery<tournaments::Entity>;

const LOCATION_FIELDS: &[(&str, &str)] = &[("id", "id"), ("name", "name"), ("country", "country")];
const GROUP_FIELDS: &[(&str, &str)] = &[("id", "id"), ("name", "name")];
const CREATOR_FIELDS: &[(&str, &str)] = &[("id", "id"), ("username", "username")];

impl QueryEntity for tournaments::Entity {
    const NAME: &'static str = "tournament";
    const TABLE: &'static str = "tournaments";
    const DEFAULT_PAGE_SIZE: u64 = 16;

    type Filters = TournamentFilters;
    type Sort = TournamentSort;
    type Shape = TournamentShape;

    fn primary_key() -> tournaments::Column {
        tournaments::Column::Id
    }

    fn predicates(filters: &TournamentFilters) -> Result<Vec<Predicate>, QueryError> {
        let mut predicates = Vec::new();
        if let Some(name) = &filters.name {
            predicates.push(Predicate::contains("name", name));
        }
        if let Some(privacy) = filters.privacy {
            predicates.push(Predicate::equals("privacy", privacy.to_value()));
        }
        if let Some(group_id) = filters.group_id {
            predicates.push(Predicate::equals("group_id", group_id));
        }
        if let Some(location_id) = filters.location_id {
            predicates.push(Predicate::equals("location_id", location_id));
        }
        if let Some(created_by) = filters.created_by {
            predicates.push(Predicate::equals("created_by", created_by));
        }
        predicates.extend(Predicate::range(
            "starts_at",
            filters.starts_after,
            filters.starts_before,
        ));
        Ok(predicates)
    }

    fn layer(shape: TournamentShape) -> ShapeLayer {
        match shape {
            TournamentShape::Mini => ShapeLayer::fields(vec![
                Field::column("id", "id"),
                Field::column("name", "name"),
                Field::column("starts_at", "startsAt"),
            ]),
            TournamentShape::Base => ShapeLayer::fields(vec![
                Field::column("privacy", "privacy"),
                Field::object("l", LOCATION_FIELDS, "location"),
            ])
            .with_joins(vec![Join::one(
                "locations",
                "l",
                ("tournaments", "location_id"),
                "id",
            )]),
            TournamentShape::Extended => ShapeLayer::fields(vec![
                Field::column("description", "description"),
                Field::object("g", GROUP_FIELDS, "group"),
                Field::object("c", CREATOR_FIELDS, "creator"),
            ])
            .with_joins(vec![
                Join::one("groups", "g", ("tournaments", "group_id"), "id"),
                Join::one("users", "c", ("tournaments", "created_by"), "id"),
            ]),
            TournamentShape::Admin => ShapeLayer::fields(vec![
                Field::column("created_by", "createdBy"),
                Field::column("created_at", "createdAt"),
            ]),
        }
    }

    fn sort_column(key: TournamentSort) -> tournaments::Column {
        match key {
            TournamentSort::Id => tournaments::Column::Id,
            TournamentSort::Name => tournaments::Column::Name,
            TournamentSort::StartsAt => tournaments::Column::StartsAt,
            TournamentSort::CreatedAt => tournaments::Column::CreatedAt,
        }
    }
}

pub async fn search_tournaments(
    db: &DbConn,
    query: &TournamentQuery,
) -> Result<Page<JsonValue>, AppError> {
    super::search::<tournaments::Entity>(db, query).await
}

pub async fn get_tournament(
    db: &DbConn,
    id: i32,
    shape: TournamentShape,
) -> Result<JsonValue, AppError> {
    super::find::<tournaments::Entity>(db, id, shape).await
}

async fn ensure_references(
    db: &DbConn,
    group_id: Option<i32>,
    location_id: Option<i32>,
) -> Result<(), AppError> {
    if let Some(group_id) = group_id {
        super::ensure_exists::<groups::Entity>(db, group_id).await?;
    }
    if let Some(location_id) = location_id {
        super::ensure_exists::<locations::Entity>(db, location_id).await?;
    }
    Ok(())
}

pub async fn create_tournament(
    db: &DbConn,
    params: CreateTournamentParams,
) -> Result<CreatedId, AppError> {
    super::ensure_exists::<users::Entity>(db, params.created_by).await?;
    ensure_references(db, params.group_id, params.location_id).await?;

    let tournament = tournaments::ActiveModel {
        name: Set(params.name),
        description: Set(params.description),
        privacy: Set(params.privacy.unwrap_or(TournamentPrivacy::Open)),
        group_id: Set(params.group_id),
        location_id: Set(params.location_id),
        created_by: Set(params.created_by),
        starts_at: Set(params.starts_at),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    };
    super::create::<tournaments::Entity, _>(db, tournament).await
}

pub async fn update_tournament(
    db: &DbConn,
    id: i32,
    params: UpdateTournamentParams,
) -> Result<tournaments::Model, AppError> {
    ensure_references(db, params.group_id, params.location_id).await?;

    let mut tournament = tournaments::ActiveModel::default();
    if let Some(name) = params.name {
        tournament.name = Set(name);
    }
    if let Some(description) = params.description {
        tournament.description = Set(Some(description));
    }
    if let Some(privacy) = params.privacy {
        tournament.privacy = Set(privacy);
    }
    if let Some(group_id) = params.group_id {
        tournament.group_id = Set(Some(group_id));
    }
    if let Some(location_id) = params.location_id {
        tournament.location_id = Set(Some(location_id));
    }
    if let Some(starts_at) = params.starts_at {
        tournament.starts_at = Set(starts_at);
    }
    super::update::<tournaments::Entity, _>(db, id, tournament).await
}

pub async fn delete_tournament(db: &DbConn, id: i32) -> Result<tournaments::Model, AppError> {
    super::remove::<tournaments::Entity>(db, id).await
}
