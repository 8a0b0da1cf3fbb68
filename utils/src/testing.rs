use migration::sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::db::migrate;

/// Connects to `db_url` with a single pooled connection and applies every
/// migration. A single connection keeps `sqlite::memory:` databases alive
/// for the whole test.
pub async fn setup_test_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(db_url);
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    migrate(&conn).await?;
    Ok(conn)
}
