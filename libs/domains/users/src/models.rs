use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{UserError, UserResult};

/// A persisted user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Storage-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Unique across all users
    #[schema(example = "admin")]
    pub name: String,
}

/// A user that has not been stored yet.
///
/// Only [`NewUser::new`] builds one, so the name is never blank. It is
/// stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
}

impl NewUser {
    pub fn new(name: impl AsRef<str>) -> UserResult<Self> {
        let name = name.as_ref();
        if name.trim().is_empty() {
            return Err(UserError::Validation("name must not be empty".to_string()));
        }

        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

/// DTO for creating a user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1))]
    #[schema(example = "admin")]
    pub name: String,
}

/// Static liveness payload of `GET /users/health`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsersHealth {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "API está rodando")]
    pub message: String,
}

impl Default for UsersHealth {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            message: "API está rodando".to_string(),
        }
    }
}
