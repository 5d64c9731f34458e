use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user and return it with its assigned id.
    ///
    /// Fails with [`UserError::Duplicate`] when the name is taken, even if the
    /// caller checked beforehand.
    async fn save(&self, user: NewUser) -> UserResult<User>;

    /// All users ordered by id
    async fn find_all(&self) -> UserResult<Vec<User>>;

    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>>;

    /// Exact, case-sensitive name match
    async fn find_by_name(&self, name: &str) -> UserResult<Option<User>>;
}

#[derive(Debug, Default)]
struct Users {
    next_id: i32,
    by_id: BTreeMap<i32, User>,
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// The name check and the insert happen under the same write lock, which
/// plays the role of the unique index.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Users>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: NewUser) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.by_id.values().any(|u| u.name == user.name()) {
            return Err(UserError::Duplicate(user.into_name()));
        }

        users.next_id += 1;
        let user = User {
            id: users.next_id,
            name: user.into_name(),
        };
        users.by_id.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.by_id.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.by_id.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.by_id.values().find(|u| u.name == name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.save(NewUser::new("ana").unwrap()).await.unwrap();
        let second = repo.save(NewUser::new("bia").unwrap()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.find_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate_name() {
        let repo = InMemoryUserRepository::new();
        repo.save(NewUser::new("admin").unwrap()).await.unwrap();

        let result = repo.save(NewUser::new("admin").unwrap()).await;
        assert!(matches!(result, Err(UserError::Duplicate(name)) if name == "admin"));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_names_are_case_sensitive() {
        let repo = InMemoryUserRepository::new();
        repo.save(NewUser::new("admin").unwrap()).await.unwrap();

        assert!(repo.save(NewUser::new("Admin").unwrap()).await.is_ok());
        assert!(repo.find_by_name("ADMIN").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_and_name() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(NewUser::new("carla").unwrap()).await.unwrap();

        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(saved.clone()));
        assert_eq!(repo.find_by_name("carla").await.unwrap(), Some(saved));
        assert_eq!(repo.find_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_concurrent_saves_keep_names_unique() {
        let repo = InMemoryUserRepository::new();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.save(NewUser::new("admin").unwrap()).await })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_all_is_stable_without_writes() {
        let repo = InMemoryUserRepository::new();
        for name in ["a", "b", "c"] {
            repo.save(NewUser::new(name).unwrap()).await.unwrap();
        }

        assert_eq!(repo.find_all().await.unwrap(), repo.find_all().await.unwrap());
    }
}
