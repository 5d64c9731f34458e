//! Users Domain
//!
//! Registration and lookup of users identified by a unique name.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/users)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← CreateUserUseCase + lookups
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← in-memory or Postgres, unique names enforced here
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User, NewUser, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum::Router;
//! use domain_users::container::{UserStore, controller};
//!
//! let app: Router = Router::new().nest("/users", controller(UserStore::InMemory));
//! ```

pub mod container;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod seed;
pub mod service;
pub mod usecase;

// Re-export commonly used types
pub use container::{UserStore, controller, seeded_controller};
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUser, NewUser, User, UsersHealth};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use seed::seed_default_user;
pub use service::UserService;
pub use usecase::CreateUserUseCase;
