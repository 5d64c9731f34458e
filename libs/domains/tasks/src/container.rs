use axum::Router;
use sea_orm::DatabaseConnection;

use crate::handlers;
use crate::postgres::PgTaskRepository;
use crate::repository::{InMemoryTaskRepository, StubTaskRepository, TaskRepository};
use crate::service::TaskService;

/// Storage backing the tasks API.
#[derive(Clone, Default)]
pub enum TaskStore {
    /// Canned responses, nothing is stored
    #[default]
    Stub,
    InMemory,
    Postgres(DatabaseConnection),
}

/// Builds the tasks router over the selected store.
pub fn controller(store: TaskStore) -> Router {
    match store {
        TaskStore::Stub => wire(StubTaskRepository::new()),
        TaskStore::InMemory => wire(InMemoryTaskRepository::new()),
        TaskStore::Postgres(db) => wire(PgTaskRepository::new(db)),
    }
}

fn wire<R: TaskRepository + 'static>(repository: R) -> Router {
    handlers::router(TaskService::new(repository))
}
