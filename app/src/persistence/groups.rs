use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbConn, EntityTrait, JsonValue, Set, TransactionTrait,
};

use models::domains::{group_members, groups, sea_orm_active_enums::MemberRole, users};
use models::params::group::{CreateGroupParams, JoinGroupParams, UpdateGroupParams};
use models::queries::group::{GroupFilters, GroupShape, GroupSort};
use models::schemas::{CreatedId, pagination::Page};

use super::query::{EntityQuery, Field, Join, Predicate, QueryEntity, QueryError, ShapeLayer};
use crate::error::AppError;

pub type GroupQuery = EntityQuery<groups::Entity>;

const OWNER_FIELDS: &[(&str, &str)] = &[("id", "id"), ("username", "username")];
const MEMBER_FIELDS: &[(&str, &str)] = &[("id", "id"), ("username", "username"), ("country", "country")];

impl QueryEntity for groups::Entity {
    const NAME: &'static str = "group";
    const TABLE: &'static str = "groups";
    const DEFAULT_PAGE_SIZE: u64 = 12;

    type Filters = GroupFilters;
    type Sort = GroupSort;
    type Shape = GroupShape;

    fn primary_key() -> groups::Column {
        groups::Column::Id
    }

    fn predicates(filters: &GroupFilters) -> Result<Vec<Predicate>, QueryError> {
        let mut predicates = Vec::new();
        if let Some(name) = &filters.name {
            predicates.push(Predicate::contains("name", name));
        }
        if let Some(country) = &filters.country {
            predicates.push(Predicate::equals("country", country.clone()));
        }
        if let Some(owner_id) = filters.owner_id {
            predicates.push(Predicate::equals("owner_id", owner_id));
        }
        if let Some(user_id) = filters.user_id {
            predicates.push(Predicate::related(
                "group_members",
                "group_id",
                "user_id",
                user_id,
            ));
        }
        Ok(predicates)
    }

    fn layer(shape: GroupShape) -> ShapeLayer {
        match shape {
            GroupShape::Mini => ShapeLayer::fields(vec![
                Field::column("id", "id"),
                Field::column("name", "name"),
            ]),
            GroupShape::Base => ShapeLayer::fields(vec![
                Field::column("country", "country"),
                Field::column("created_at", "createdAt"),
                Field::object("o", OWNER_FIELDS, "owner"),
            ])
            .with_joins(vec![Join::one("users", "o", ("groups", "owner_id"), "id")]),
            GroupShape::Extended => ShapeLayer::fields(vec![
                Field::column("description", "description"),
                Field::count("gm", "user_id", "memberCount"),
            ])
            .with_joins(vec![Join::many(
                "group_members",
                "gm",
                ("groups", "id"),
                "group_id",
            )]),
            GroupShape::WithMembers => ShapeLayer::fields(vec![Field::array(
                "u",
                MEMBER_FIELDS,
                "members",
            )])
            .with_joins(vec![Join::many("users", "u", ("gm", "user_id"), "id")]),
        }
    }

    fn sort_column(key: GroupSort) -> groups::Column {
        match key {
            GroupSort::Id => groups::Column::Id,
            GroupSort::Name => groups::Column::Name,
            GroupSort::CreatedAt => groups::Column::CreatedAt,
        }
    }
}

pub async fn search_groups(db: &DbConn, query: &GroupQuery) -> Result<Page<JsonValue>, AppError> {
    super::search::<groups::Entity>(db, query).await
}

pub async fn get_group(db: &DbConn, id: i32, shape: GroupShape) -> Result<JsonValue, AppError> {
    super::find::<groups::Entity>(db, id, shape).await
}

/// Creates the group and enrols its owner as an admin member, both or
/// neither.
pub async fn create_group(db: &DbConn, params: CreateGroupParams) -> Result<CreatedId, AppError> {
    super::ensure_exists::<users::Entity>(db, params.owner_id).await?;
    let group = groups::ActiveModel {
        name: Set(params.name),
        description: Set(params.description),
        country: Set(params.country),
        owner_id: Set(params.owner_id),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    };
    let txn = db.begin().await?;
    let created = super::create::<groups::Entity, _>(&txn, group).await?;
    add_member(&txn, created.id, params.owner_id, MemberRole::Admin).await?;
    txn.commit().await?;
    Ok(created)
}

pub async fn update_group(
    db: &DbConn,
    id: i32,
    params: UpdateGroupParams,
) -> Result<groups::Model, AppError> {
    let mut group = <groups::ActiveModel as Default>::default();
    if let Some(name) = params.name {
        group.name = Set(name);
    }
    if let Some(description) = params.description {
        group.description = Set(Some(description));
    }
    if let Some(country) = params.country {
        group.country = Set(Some(country));
    }
    super::update::<groups::Entity, _>(db, id, group).await
}

pub async fn delete_group(db: &DbConn, id: i32) -> Result<groups::Model, AppError> {
    super::remove::<groups::Entity>(db, id).await
}

pub async fn join_group(
    db: &DbConn,
    group_id: i32,
    params: JoinGroupParams,
) -> Result<group_members::Model, AppError> {
    super::ensure_exists::<groups::Entity>(db, group_id).await?;
    super::ensure_exists::<users::Entity>(db, params.user_id).await?;

    let existing = group_members::Entity::find_by_id((group_id, params.user_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict("user is already a member of this group".into()));
    }

    add_member(db, group_id, params.user_id, params.role.unwrap_or(MemberRole::Member)).await
}

async fn add_member(
    db: &impl ConnectionTrait,
    group_id: i32,
    user_id: i32,
    role: MemberRole,
) -> Result<group_members::Model, AppError> {
    let member = group_members::ActiveModel {
        group_id: Set(group_id),
        user_id: Set(user_id),
        role: Set(role),
        joined_at: Set(Utc::now().fixed_offset()),
    }
    .insert(db)
    .await
    .map_err(|err| AppError::from_write("membership", err))?;
    tracing::info!(group_id, user_id, ?role, "member added");
    Ok(member)
}

#[cfg(test)]
mod tests {
    use sea_orm::sea_query::{PostgresQueryBuilder, SqliteQueryBuilder};

    use models::queries::{QueryEnum, ResponseShape};

    use super::*;
    use crate::persistence::query::{Dialect, ShapePlan};
    use crate::persistence::repository::{list_statement, single_statement};

    #[test]
    fn every_shape_is_consistent_and_monotonic() {
        for shape in GroupShape::ALL {
            let plan = ShapePlan::resolve::<groups::Entity>(*shape);
            assert!(plan.missing_joins("groups").is_empty(), "{shape}");

            for narrower in shape.lineage() {
                let narrow = ShapePlan::resolve::<groups::Entity>(narrower);
                assert!(narrow.joins.iter().all(|join| plan.joins.contains(join)), "{narrower} -> {shape}");
            }
        }
    }

    #[test]
    fn base_shape_embeds_the_owner_without_grouping() {
        let plan = ShapePlan::resolve::<groups::Entity>(GroupShape::Base);
        let sql = single_statement::<groups::Entity>(4, &plan, Dialect::Postgres)
            .to_string(PostgresQueryBuilder);
        assert!(sql.contains(r#"LEFT JOIN "users" AS "o" ON "groups"."owner_id" = "o"."id""#), "{sql}");
        assert!(sql.contains(r#"AS "owner""#), "{sql}");
        assert!(!sql.contains("GROUP BY"), "{sql}");
        assert!(sql.contains(r#"WHERE "groups"."id" = 4"#), "{sql}");
    }

    #[test]
    fn aggregates_group_by_every_to_one_join() {
        let mut query = GroupQuery::with_filters(GroupFilters::default(), 12);
        query.response_type = GroupShape::WithMembers;
        let plan = ShapePlan::resolve::<groups::Entity>(query.response_type);
        let sql = list_statement::<groups::Entity>(&query, &plan, Vec::new(), Dialect::Sqlite)
            .to_string(SqliteQueryBuilder);
        assert!(sql.contains(r#"GROUP BY "groups"."id", "o"."id""#), "{sql}");
        assert!(sql.contains("json_group_array(json_object("), "{sql}");
        assert!(sql.contains(r#"CAST(COUNT(DISTINCT "gm"."user_id") AS INTEGER)"#), "{sql}");
    }

    #[test]
    fn membership_filter_uses_a_subquery() {
        let filters = GroupFilters {
            user_id: Some(9),
            ..Default::default()
        };
        let predicates = groups::Entity::predicates(&filters).unwrap();
        assert_eq!(
            predicates,
            vec![Predicate::related("group_members", "group_id", "user_id", 9)]
        );
    }
}
