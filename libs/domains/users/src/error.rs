use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Shown to clients when a name is already taken.
pub const DUPLICATE_USER_MESSAGE: &str = "User already exists";
/// Shown to clients when an id does not match any user.
pub const USER_NOT_FOUND_MESSAGE: &str = "Usuário não encontrado";

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("User with name '{0}' already exists")]
    Duplicate(String),

    #[error("User not found: {0}")]
    NotFound(i32),

    /// Storage backend failure; the detail stays in the logs.
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        UserError::Storage(err.to_string())
    }
}

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(msg) => AppError::BadRequest(msg),
            UserError::Duplicate(_) => AppError::AlreadyExists(DUPLICATE_USER_MESSAGE.to_string()),
            UserError::NotFound(_) => AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()),
            UserError::Storage(detail) => AppError::InternalServerError(detail),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
