use chrono::Utc;
use sea_orm::{DbConn, JsonValue, Set};

use models::domains::users;
use models::params::user::{CreateUserParams, UpdateUserParams};
use models::queries::user::{UserFilters, UserShape, UserSort};
use models::schemas::{CreatedId, pagination::Page};

use super::query::{EntityQuery, Field, Join, Predicate, QueryEntity, QueryError, ShapeLayer};
use crate::error::AppError;

pub type UserQuery = EntityQuery<users::Entity>;

const GROUP_FIELDS: &[(&str, &str)] = &[("id", "id"), ("name", "name")];

impl QueryEntity for users::Entity {
    const NAME: &'static str = "user";
    const TABLE: &'static str = "users";
    const DEFAULT_PAGE_SIZE: u64 = 10;

    type Filters = UserFilters;
    type Sort = UserSort;
    type Shape = UserShape;

    fn primary_key() -> users::Column {
        users::Column::Id
    }

    fn predicates(filters: &UserFilters) -> Result<Vec<Predicate>, QueryError> {
        let mut predicates = Vec::new();
        if let Some(username) = &filters.username {
            predicates.push(Predicate::contains("username", username));
        }
        if let Some(country) = &filters.country {
            predicates.push(Predicate::equals("country", country.clone()));
        }
        if let Some(is_admin) = filters.is_admin {
            predicates.push(Predicate::equals("is_admin", is_admin));
        }
        if let Some(group_id) = filters.group_id {
            predicates.push(Predicate::related(
                "group_members",
                "user_id",
                "group_id",
                group_id,
            ));
        }
        Ok(predicates)
    }

    fn layer(shape: UserShape) -> ShapeLayer {
        match shape {
            UserShape::Mini => ShapeLayer::fields(vec![
                Field::column("id", "id"),
                Field::column("username", "username"),
            ]),
            UserShape::Base => ShapeLayer::fields(vec![
                Field::column("country", "country"),
                Field::column("created_at", "createdAt"),
            ]),
            UserShape::Extended => ShapeLayer::fields(vec![
                Field::column("bio", "bio"),
                Field::count("gm", "group_id", "groupCount"),
                Field::array("g", GROUP_FIELDS, "groups"),
            ])
            .with_joins(vec![
                Join::many("group_members", "gm", ("users", "id"), "user_id"),
                Join::many("groups", "g", ("gm", "group_id"), "id"),
            ]),
            UserShape::Admin => ShapeLayer::fields(vec![
                Field::column("email", "email"),
                Field::column("is_admin", "isAdmin"),
            ]),
        }
    }

    fn sort_column(key: UserSort) -> users::Column {
        match key {
            UserSort::Id => users::Column::Id,
            UserSort::Username => users::Column::Username,
            UserSort::Country => users::Column::Country,
            UserSort::CreatedAt => users::Column::CreatedAt,
        }
    }
}

pub async fn search_users(db: &DbConn, query: &UserQuery) -> Result<Page<JsonValue>, AppError> {
    super::search::<users::Entity>(db, query).await
}

pub async fn get_user(db: &DbConn, id: i32, shape: UserShape) -> Result<JsonValue, AppError> {
    super::find::<users::Entity>(db, id, shape).await
}

pub async fn create_user(db: &DbConn, params: CreateUserParams) -> Result<CreatedId, AppError> {
    let user = users::ActiveModel {
        username: Set(params.username),
        email: Set(params.email),
        country: Set(params.country),
        bio: Set(params.bio),
        is_admin: Set(false),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    };
    super::create::<users::Entity, _>(db, user).await
}

pub async fn update_user(
    db: &DbConn,
    id: i32,
    params: UpdateUserParams,
) -> Result<users::Model, AppError> {
    let mut user = users::ActiveModel::default();
    if let Some(username) = params.username {
        user.username = Set(username);
    }
    if let Some(email) = params.email {
        user.email = Set(email);
    }
    if let Some(country) = params.country {
        user.country = Set(Some(country));
    }
    if let Some(bio) = params.bio {
        user.bio = Set(Some(bio));
    }
    if let Some(is_admin) = params.is_admin {
        user.is_admin = Set(is_admin);
    }
    super::update::<users::Entity, _>(db, id, user).await
}

pub async fn delete_user(db: &DbConn, id: i32) -> Result<users::Model, AppError> {
    super::remove::<users::Entity>(db, id).await
}

#[cfg(test)]
mod tests {
    use sea_orm::sea_query::PostgresQueryBuilder;

    use models::queries::{QueryEnum, ResponseShape, SortOrder};

    use super::*;
    use crate::persistence::query::{Dialect, ShapePlan};
    use crate::persistence::repository::list_statement;

    #[test]
    fn every_shape_is_consistent() {
        for shape in UserShape::ALL {
            let plan = ShapePlan::resolve::<users::Entity>(*shape);
            assert!(plan.missing_joins("users").is_empty(), "{shape}");
        }
    }

    #[test]
    fn shapes_only_ever_add_keys() {
        for shape in UserShape::ALL {
            let wide = ShapePlan::resolve::<users::Entity>(*shape).aliases();
            for narrower in shape.lineage() {
                let narrow = ShapePlan::resolve::<users::Entity>(narrower).aliases();
                assert_eq!(&wide[..narrow.len()], &narrow[..], "{narrower} -> {shape}");
            }
        }
    }

    #[test]
    fn extended_shape_groups_by_primary_key() {
        let mut query = UserQuery::with_filters(UserFilters::default(), 10);
        query.response_type = UserShape::Extended;
        query.sort.field = UserSort::Username;
        query.sort.order = SortOrder::Desc;
        let plan = ShapePlan::resolve::<users::Entity>(query.response_type);
        let sql = list_statement::<users::Entity>(&query, &plan, Vec::new(), Dialect::Postgres)
            .to_string(PostgresQueryBuilder);

        assert!(sql.contains(r#"LEFT JOIN "group_members" AS "gm""#), "{sql}");
        assert!(sql.contains(r#"GROUP BY "users"."id""#), "{sql}");
        assert!(
            sql.contains(r#"ORDER BY "users"."username" DESC, "users"."id" DESC"#),
            "{sql}"
        );
        assert!(sql.ends_with("LIMIT 10 OFFSET 0"), "{sql}");
    }

    #[test]
    fn mini_shape_does_not_group() {
        let query = UserQuery::with_filters(UserFilters::default(), 10);
        let plan = ShapePlan::resolve::<users::Entity>(UserShape::Mini);
        let sql = list_statement::<users::Entity>(&query, &plan, Vec::new(), Dialect::Postgres)
            .to_string(PostgresQueryBuilder);
        assert!(!sql.contains("GROUP BY"), "{sql}");
        assert!(!sql.contains("JOIN"), "{sql}");
    }

    #[test]
    fn absent_filters_add_no_predicates() {
        assert!(users::Entity::predicates(&UserFilters::default()).unwrap().is_empty());
        let filters = UserFilters {
            username: Some("doe".into()),
            group_id: Some(3),
            ..Default::default()
        };
        assert_eq!(users::Entity::predicates(&filters).unwrap().len(), 2);
    }
}
