use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found: {0}")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// Storage backend failure; the detail stays in the logs.
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Convert TaskError to AppError for standardized error responses
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(id) => AppError::NotFound(format!("Task {} not found", id)),
            TaskError::Validation(msg) => AppError::BadRequest(msg),
            TaskError::Storage(detail) => AppError::InternalServerError(detail),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for TaskError {
    fn from(err: sea_orm::DbErr) -> Self {
        TaskError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            TaskError::NotFound(3).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TaskError::Validation("title".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TaskError::Storage("pool closed".into())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_db_error_becomes_storage() {
        let err: TaskError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, TaskError::Storage(msg) if msg.contains("boom")));
    }
}
