use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{DatabaseConnection, PostgresConfig};
use domain_users::container::{UserStore, seeded_controller};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = match &config.database {
        Some(database) => Some(connect_database(database, config.app.name).await?),
        None => None,
    };

    let store = match &db {
        Some(db) => UserStore::Postgres(db.clone()),
        None => UserStore::InMemory,
    };
    info!(backend = %config.storage, "User storage selected");

    // Seeding runs once, before the first request can arrive
    let users = seeded_controller(store, config.seed_user.as_deref()).await?;
    let router = create_router::<openapi::ApiDoc>(api::routes(users), &config.cors)?;

    // - /health: liveness with service name and uptime
    // - /ready: pings the database when there is one
    let app = router
        .merge(health_router(config.app))
        .merge(api::health::ready_router(db.clone()));

    info!("Starting users API with production-ready shutdown (30s timeout)");

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        if let Some(db) = db {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(_) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}

async fn connect_database(
    config: &PostgresConfig,
    app_name: &str,
) -> eyre::Result<DatabaseConnection> {
    let db = database::postgres::connect_from_config_with_retry(config.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<Migrator>(&db, app_name)
        .await
        .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;

    Ok(db)
}
