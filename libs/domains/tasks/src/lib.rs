//! Tasks Domain
//!
//! This module provides a complete domain implementation for managing tasks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/task)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← CreateTaskUseCase + lookups
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← stub, in-memory or PostgreSQL
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Task, NewTask, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{
//!     PgTaskRepository,
//!     TaskService,
//!     handlers,
//! };
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a database connection
//! let db = Database::connect("postgres://...").await?;
//!
//! // Create a repository, service and router
//! let repository = PgTaskRepository::new(db);
//! let service = TaskService::new(repository);
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod container;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod usecase;

// Re-export commonly used types
pub use container::{TaskStore, controller};
pub use error::{TaskError, TaskResult};
pub use handlers::ApiDoc;
pub use models::{CreateTask, NewTask, Task};
pub use postgres::PgTaskRepository;
pub use repository::{InMemoryTaskRepository, StubTaskRepository, TaskRepository};
pub use service::TaskService;
pub use usecase::CreateTaskUseCase;
