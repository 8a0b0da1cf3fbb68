use axum::Router;
use axum::http::{HeaderValue, Method, header};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use app::config::Config;
use app::state::AppState;

use crate::routers::create_router;

pub fn setup_router(config: Config, conn: DatabaseConnection) -> anyhow::Result<Router> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::OPTIONS,
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
        .allow_origin(config.allowed_origin.parse::<HeaderValue>()?);

    Ok(create_router(AppState::new(conn, config))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

pub fn setup_config() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();
    Config::from_env()
}

pub async fn setup_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_lifetime(std::time::Duration::from_secs(60))
        .min_connections(1)
        .max_connections(20);

    Database::connect(opt).await
}
