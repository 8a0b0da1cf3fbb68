use chrono::Utc;
use sea_orm::{DbConn, JsonValue, Set};

use models::domains::{notifications, users};
use models::params::notification::{CreateNotificationParams, UpdateNotificationParams};
use models::queries::notification::{NotificationFilters, NotificationShape, NotificationSort};
use models::schemas::{CreatedId, pagination::Page};

use super::query::{EntityQuery, Field, Join, Predicate, QueryEntity, QueryError, ShapeLayer};
use crate::error::AppError;

pub type NotificationQuery = EntityQuery<notifications::Entity>;

const RECIPIENT_FIELDS: &[(&str, &str)] = &[("id", "id"), ("username", "username")];

impl QueryEntity for notifications::Entity {
    const NAME: &'static str = "notification";
    const TABLE: &'static str = "notifications";
    const DEFAULT_PAGE_SIZE: u64 = 10;

    type Filters = NotificationFilters;
    type Sort = NotificationSort;
    type Shape = NotificationShape;

    fn primary_key() -> notifications::Column {
        notifications::Column::Id
    }

    fn predicates(filters: &NotificationFilters) -> Result<Vec<Predicate>, QueryError> {
        let mut predicates = Vec::new();
        if let Some(user_id) = filters.user_id {
            predicates.push(Predicate::equals("user_id", user_id));
        }
        if let Some(is_read) = filters.is_read {
            predicates.push(Predicate::equals("is_read", is_read));
        }
        Ok(predicates)
    }

    fn layer(shape: NotificationShape) -> ShapeLayer {
        match shape {
            NotificationShape::Mini => ShapeLayer::fields(vec![
                Field::column("id", "id"),
                Field::column("title", "title"),
                Field::column("is_read", "isRead"),
            ]),
            NotificationShape::Base => ShapeLayer::fields(vec![
                Field::column("user_id", "userId"),
                Field::column("created_at", "createdAt"),
            ]),
            NotificationShape::Extended => ShapeLayer::fields(vec![
                Field::column("body", "body"),
                Field::object("u", RECIPIENT_FIELDS, "user"),
            ])
            .with_joins(vec![Join::one(
                "users",
                "u",
                ("notifications", "user_id"),
                "id",
            )]),
        }
    }

    fn sort_column(key: NotificationSort) -> notifications::Column {
        match key {
            NotificationSort::Id => notifications::Column::Id,
            NotificationSort::CreatedAt => notifications::Column::CreatedAt,
        }
    }
}

pub async fn search_notifications(
    db: &DbConn,
    query: &NotificationQuery,
) -> Result<Page<JsonValue>, AppError> {
    super::search::<notifications::Entity>(db, query).await
}

pub async fn get_notification(
    db: &DbConn,
    id: i32,
    shape: NotificationShape,
) -> Result<JsonValue, AppError> {
    super::find::<notifications::Entity>(db, id, shape).await
}

pub async fn create_notification(
    db: &DbConn,
    params: CreateNotificationParams,
) -> Result<CreatedId, AppError> {
    super::ensure_exists::<users::Entity>(db, params.user_id).await?;
    let notification = notifications::ActiveModel {
        user_id: Set(params.user_id),
        title: Set(params.title),
        body: Set(params.body),
        is_read: Set(false),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    };
    super::create::<notifications::Entity, _>(db, notification).await
}

pub async fn update_notification(
    db: &DbConn,
    id: i32,
    params: UpdateNotificationParams,
) -> Result<notifications::Model, AppError> {
    let mut notification = notifications::ActiveModel::default();
    if let Some(is_read) = params.is_read {
        notification.is_read = Set(is_read);
    }
    super::update::<notifications::Entity, _>(db, id, notification).await
}

pub async fn delete_notification(db: &DbConn, id: i32) -> Result<notifications::Model, AppError> {
    super::remove::<notifications::Entity>(db, id).await
}
