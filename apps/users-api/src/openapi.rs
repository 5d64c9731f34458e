use utoipa::OpenApi;

use crate::api::{self, Message};

#[derive(OpenApi)]
#[openapi(
    paths(api::root),
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse, Message)
    ),
    info(
        title = "Users API",
        version = "0.1.0",
        description = "Register and look up users"
    ),
    nest(
        (path = "/users", api = domain_users::ApiDoc)
    ),
    tags(
        (name = "meta", description = "Service banner")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_paths_are_nested() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.keys().any(|p| p.starts_with("/users")));
    }
}
