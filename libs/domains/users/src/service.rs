use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;
use crate::usecase::CreateUserUseCase;

/// Entry point the HTTP handlers talk to.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    create_user: CreateUserUseCase<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        let repository = Arc::new(repository);
        Self {
            create_user: CreateUserUseCase::new(Arc::clone(&repository)),
            repository,
        }
    }

    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        self.create_user.execute(input).await
    }

    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    pub async fn get_user(&self, id: i32) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }
}
