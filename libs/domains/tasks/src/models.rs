use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{TaskError, TaskResult};

/// A persisted task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Estudar")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Revisar ownership e borrowing")]
    pub description: Option<String>,
}

/// A task that has not been stored yet.
///
/// Built through [`NewTask::new`], which rejects blank titles and keeps the
/// title exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: Option<String>,
}

impl NewTask {
    pub fn new(title: impl AsRef<str>, description: Option<String>) -> TaskResult<Self> {
        let title = title.as_ref();
        if title.trim().is_empty() {
            return Err(TaskError::Validation("title must not be empty".to_string()));
        }

        Ok(Self {
            title: title.to_string(),
            description,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn into_parts(self) -> (String, Option<String>) {
        (self.title, self.description)
    }

    /// Attach the storage-assigned id.
    pub fn into_task(self, id: i32) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
        }
    }
}

/// DTO for creating a task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1))]
    #[schema(example = "Estudar")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}
