use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};
use crate::repository::UserRepository;

/// Makes sure a user named `name` exists.
///
/// Returns the user when it was created by this call, `None` when it was
/// already there. Safe to run on every startup.
pub async fn seed_default_user<R: UserRepository + ?Sized>(
    repository: &R,
    name: &str,
) -> UserResult<Option<User>> {
    let new_user = NewUser::new(name)?;

    if repository.find_by_name(new_user.name()).await?.is_some() {
        tracing::debug!(name = new_user.name(), "Default user already present");
        return Ok(None);
    }

    match repository.save(new_user).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, name = %user.name, "Seeded default user");
            Ok(Some(user))
        }
        // Another instance seeded it between our lookup and insert
        Err(UserError::Duplicate(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryUserRepository;

    #[tokio::test]
    async fn test_seed_creates_user_once() {
        let repo = InMemoryUserRepository::new();

        let first = seed_default_user(&repo, "admin").await.unwrap();
        let second = seed_default_user(&repo, "admin").await.unwrap();

        assert_eq!(first.map(|u| u.id), Some(1));
        assert!(second.is_none());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_seed_rejects_blank_name() {
        let repo = InMemoryUserRepository::new();
        assert!(matches!(
            seed_default_user(&repo, " ").await,
            Err(UserError::Validation(_))
        ));
    }
}
