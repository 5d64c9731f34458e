//! Composition root for the users domain.

use axum::Router;
use sea_orm::DatabaseConnection;

use crate::error::UserResult;
use crate::handlers;
use crate::postgres::PgUserRepository;
use crate::repository::{InMemoryUserRepository, UserRepository};
use crate::seed::seed_default_user;
use crate::service::UserService;

/// Storage backing the users API.
#[derive(Clone)]
pub enum UserStore {
    InMemory,
    Postgres(DatabaseConnection),
}

/// Builds the users router over the selected store.
pub fn controller(store: UserStore) -> Router {
    match store {
        UserStore::InMemory => wire(InMemoryUserRepository::new()),
        UserStore::Postgres(db) => wire(PgUserRepository::new(db)),
    }
}

/// Same as [`controller`], but first makes sure `seed_name` exists when given.
pub async fn seeded_controller(store: UserStore, seed_name: Option<&str>) -> UserResult<Router> {
    match store {
        UserStore::InMemory => seed_and_wire(InMemoryUserRepository::new(), seed_name).await,
        UserStore::Postgres(db) => seed_and_wire(PgUserRepository::new(db), seed_name).await,
    }
}

async fn seed_and_wire<R: UserRepository + 'static>(
    repository: R,
    seed_name: Option<&str>,
) -> UserResult<Router> {
    if let Some(name) = seed_name {
        seed_default_user(&repository, name).await?;
    }
    Ok(wire(repository))
}

fn wire<R: UserRepository + 'static>(repository: R) -> Router {
    handlers::router(UserService::new(repository))
}
