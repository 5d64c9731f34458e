use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod health;

const ROOT_MESSAGE: &str = "API está rodando";

/// Banner returned by `GET /`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub message: String,
}

/// Creates the API routes from an already wired users router.
pub fn routes(users: Router) -> Router {
    Router::new().route("/", get(root)).nest("/users", users)
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
