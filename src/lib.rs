//! # Expense Tracker
//!
//! Personal expense tracking: roles, users, expense types and expenses,
//! persisted with SeaORM and served over a small REST API.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Entities, DTOs, the currency set and repository traits
//! - **application**: Use-case services (validation, referential checks, hashing)
//! - **infrastructure**: SeaORM entities, migrations, repositories, bcrypt
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Errors, pagination, retry and shutdown helpers

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::migrator::Migrator;
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::{create_api_router, AppState};
