use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, NewUser, User};
use crate::repository::UserRepository;

/// Creates a user whose name is not taken yet.
///
/// The `find_by_name` lookup rejects the common case early; the repository's
/// own uniqueness guard decides races between concurrent requests.
pub struct CreateUserUseCase<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for CreateUserUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self, input), fields(name = %input.name))]
    pub async fn execute(&self, input: CreateUser) -> UserResult<User> {
        let new_user = NewUser::new(&input.name)?;

        if self.repository.find_by_name(new_user.name()).await?.is_some() {
            tracing::info!("Rejected duplicate user name");
            return Err(UserError::Duplicate(new_user.into_name()));
        }

        self.repository.save(new_user).await
    }
}
