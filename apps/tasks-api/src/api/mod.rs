use axum::{Json, Router, routing::get};
use domain_tasks::TaskStore;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod health;

const ROOT_MESSAGE: &str = "API está no ar! Acesse /api/v1 para acessar as rotas e os endpoints.";
const V1_MESSAGE: &str = "API v1";

/// Banner returned by the root endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub message: String,
}

/// Creates the API routes: the banners plus `/api/v1/task`.
///
/// Returns a stateless Router; the task routes already carry their service.
pub fn routes(store: TaskStore) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api/v1", v1_routes(store))
}

fn v1_routes(store: TaskStore) -> Router {
    Router::new()
        .route("/", get(v1_root))
        .nest("/task", domain_tasks::controller(store))
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "API is up", body = Message))
)]
pub async fn root() -> Json<Message> {
    Json(Message {
        message: ROOT_MESSAGE.to_string(),
    })
}

/// Version banner
#[utoipa::path(
    get,
    path = "/api/v1",
    tag = "meta",
    responses((status = 200, description = "Version 1 of the API", body = Message))
)]
pub async fn v1_root() -> Json<Message> {
    Json(Message {
        message: V1_MESSAGE.to_string(),
    })
}
