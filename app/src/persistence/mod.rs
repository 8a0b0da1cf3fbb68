pub mod groups;
pub mod locations;
pub mod notifications;
pub mod query;
pub mod repository;
pub mod tournaments;
pub mod users;

use sea_orm::{ActiveModelTrait, ConnectionTrait, DbConn, EntityTrait, JsonValue, PrimaryKeyTrait};

use models::schemas::{CreatedId, pagination::Page};

use crate::error::AppError;
use query::{EntityQuery, QueryEntity};
use repository::Repository;

pub async fn search<E: QueryEntity>(
    db: &DbConn,
    query: &EntityQuery<E>,
) -> Result<Page<JsonValue>, AppError> {
    Ok(Repository::<E>::new(db).get_query(query).await?)
}

pub async fn find<E: QueryEntity>(
    db: &DbConn,
    id: i32,
    shape: E::Shape,
) -> Result<JsonValue, AppError> {
    Repository::<E>::new(db)
        .get_single_query(id, shape)
        .await?
        .into_iter()
        .next()
        .ok_or(AppError::NotFound(E::NAME))
}

/// Inserts one row. Runs on the pool or inside a caller's transaction.
pub async fn create<E, A>(db: &impl ConnectionTrait, payload: A) -> Result<CreatedId, AppError>
where
    E: QueryEntity,
    A: ActiveModelTrait<Entity = E> + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Into<i32>,
{
    let created = Repository::<E, _>::new(db)
        .create_entity(payload)
        .await
        .map_err(|err| AppError::from_write(E::NAME, err))?;
    tracing::info!(entity = E::NAME, ids = ?created, "created");
    created.into_iter().next().ok_or(AppError::NotFound(E::NAME))
}

pub async fn update<E, A>(db: &DbConn, id: i32, payload: A) -> Result<<E as EntityTrait>::Model, AppError>
where
    E: QueryEntity,
    A: ActiveModelTrait<Entity = E> + Send,
{
    Repository::<E>::new(db)
        .update_entity(id, payload)
        .await
        .map_err(|err| AppError::from_write(E::NAME, err))?
        .into_iter()
        .next()
        .ok_or(AppError::NotFound(E::NAME))
}

pub async fn remove<E: QueryEntity>(db: &DbConn, id: i32) -> Result<<E as EntityTrait>::Model, AppError> {
    let removed = Repository::<E>::new(db)
        .delete_entity(id)
        .await?
        .into_iter()
        .next()
        .ok_or(AppError::NotFound(E::NAME))?;
    tracing::info!(entity = E::NAME, id, "deleted");
    Ok(removed)
}

/// Fails with `NotFound` naming `E` unless the row exists.
pub async fn ensure_exists<E: QueryEntity>(db: &DbConn, id: i32) -> Result<(), AppError> {
    if Repository::<E>::new(db).entity_exists(id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound(E::NAME))
    }
}
