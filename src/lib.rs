use anyhow::Context;

use api::{setup_config, setup_db, setup_router};
use utils::db::migrate;

pub async fn run() -> anyhow::Result<()> {
    let config = setup_config()?;

    let conn = setup_db(&config.db_url)
        .await
        .context("database connection failed")?;
    migrate(&conn).await.context("migration failed")?;

    let router = setup_router(config.clone(), conn)?;

    let listener = tokio::net::TcpListener::bind(config.get_server_url())
        .await
        .with_context(|| format!("failed to bind {}", config.get_server_url()))?;
    tracing::info!("listening on {}", config.get_server_url());

    axum::serve(listener, router).await.context("server error")
}
