use utoipa::OpenApi;

use crate::api::{self, Message};

#[derive(OpenApi)]
#[openapi(
    paths(api::root, api::v1_root),
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse, Message)
    ),
    info(
        title = "Tasks API",
        version = "0.1.0",
        description = "Create and list tasks"
    ),
    nest(
        (path = "/api/v1/task", api = domain_tasks::ApiDoc)
    ),
    tags(
        (name = "meta", description = "Service banners")
    )
)]
pub struct ApiDoc;
