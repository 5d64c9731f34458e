//! Readiness probe backed by the configured storage.

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::postgres::{DatabaseConnection, check_health};

/// Router with the `/ready` endpoint. Without a database every request is ready.
pub fn ready_router(db: Option<DatabaseConnection>) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(db)
}

async fn ready_handler(State(db): State<Option<DatabaseConnection>>) -> Response {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();
    if let Some(db) = &db {
        checks.push((
            "database",
            Box::pin(async move { check_health(db).await.map_err(|e| e.to_string()) }),
        ));
    }

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
