pub mod entities;
pub mod migrator;
pub mod repositories;

use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::shared::{retry_with_backoff, RetryConfig};

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./expenses.db?mode=rwc")
    pub url: String,
    /// Connection attempts before giving up at startup
    pub connect_attempts: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./expenses.db?mode=rwc".to_string(),
            connect_attempts: 3,
        }
    }
}

impl DatabaseConfig {
    /// Create config for a SQLite file, created if missing
    pub fn sqlite(path: &str) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path),
            ..Self::default()
        }
    }

    /// Private in-memory SQLite database
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            connect_attempts: 1,
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!(url = %config.url, "Connecting to database");
    let retry = RetryConfig {
        max_attempts: config.connect_attempts,
        ..RetryConfig::default()
    };
    let db = retry_with_backoff(
        retry,
        || Database::connect(config.url.clone()),
        |e| matches!(e, sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_)),
        "database_connect",
    )
    .await?;
    info!("Database connected successfully");
    Ok(db)
}
