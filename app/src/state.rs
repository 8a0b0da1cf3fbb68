use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Shared handler state: the pooled connection and the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    pub conn: DatabaseConnection,
    pub config: Config,
}

impl AppState {
    pub fn new(conn: DatabaseConnection, config: Config) -> Self {
        Self { conn, config }
    }
}
