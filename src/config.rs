//! Application configuration
//!
//! Loaded from a TOML file, by default
//! `~/.config/expense-tracker/config.toml`. Every section and key is
//! optional; anything missing falls back to its default.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! shutdown_timeout = 30
//!
//! [database]
//! url = "sqlite://./expenses.db?mode=rwc"
//!
//! [logging]
//! level = "info"
//! format = "pretty"   # or "json"
//!
//! [admin]
//! username = "admin"
//! password = "admin"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::DefaultAdmin;
use crate::infrastructure::DatabaseConfig;
use crate::shared::{AppError, InfraError};

/// Env var that points at an alternative config file
pub const CONFIG_ENV_VAR: &str = "EXPENSE_TRACKER_CONFIG";

/// `$EXPENSE_TRACKER_CONFIG`, else `<config dir>/expense-tracker/config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("expense-tracker")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds allowed for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            shutdown_timeout: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub connect_attempts: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        let db = DatabaseConfig::default();
        Self {
            url: db.url,
            connect_attempts: db.connect_attempts,
        }
    }
}

impl From<&DatabaseSection> for DatabaseConfig {
    fn from(s: &DatabaseSection) -> Self {
        Self {
            url: s.url.clone(),
            connect_attempts: s.connect_attempts.max(1),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter directive; `RUST_LOG` wins when set
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Administrator seeded on an empty database
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdminConfig {
    pub role_name: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            role_name: "Administrator".to_string(),
            first_name: "System".to_string(),
            last_name: "Administrator".to_string(),
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password: "admin".to_string(),
        }
    }
}

impl From<&AdminConfig> for DefaultAdmin {
    fn from(a: &AdminConfig) -> Self {
        Self {
            role_name: a.role_name.clone(),
            first_name: a.first_name.clone(),
            last_name: a.last_name.clone(),
            username: a.username.clone(),
            email: a.email.clone(),
            password: a.password.clone(),
        }
    }
}

impl AppConfig {
    /// Read `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| InfraError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Write as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self).map_err(|e| InfraError::Config(e.to_string()))?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), InfraError> {
        if self.database.url.trim().is_empty() {
            return Err(InfraError::Config("database.url must not be empty".into()));
        }
        if self.server.host.trim().is_empty() {
            return Err(InfraError::Config("server.host must not be empty".into()));
        }
        match self.logging.format.to_lowercase().as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(InfraError::Config(format!(
                "logging.format must be 'pretty' or 'json', got '{}'",
                other
            ))),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.address(), "127.0.0.1:8080");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9100\n\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.admin.username, "admin");
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.database.url = "sqlite://./other.db?mode=rwc".into();
        config.admin.role_name = "Owner".into();
        config.save(&path).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();
        assert!(AppConfig::load(&path).is_err());

        std::fs::write(&path, "[server\nport = ").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(AppError::Infra(InfraError::Config(_)))
        ));
    }

    #[test]
    fn database_section_converts() {
        let section = DatabaseSection {
            url: "sqlite::memory:".into(),
            connect_attempts: 0,
        };
        let db = DatabaseConfig::from(&section);
        assert_eq!(db.url, "sqlite::memory:");
        assert_eq!(db.connect_attempts, 1);
    }
}
