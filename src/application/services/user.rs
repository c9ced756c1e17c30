//! User management service: application-layer orchestration
//!
//! HTTP handlers and the bootstrap code are thin wrappers that delegate here.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::domain::user::check_password;
use crate::domain::{
    CreateRoleDto, CreateUserDto, DomainError, DomainResult, GetUserDto, RepositoryProvider,
    UpdateUserDto, User,
};
use crate::shared::PaginatedResult;

/// Account seeded on an empty database
#[derive(Debug, Clone)]
pub struct DefaultAdmin {
    pub role_name: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Registration ────────────────────────────────────────────

    /// Create a user. The plaintext password is hashed before storage.
    pub async fn register(&self, dto: CreateUserDto) -> DomainResult<User> {
        dto.validate()?;
        check_password(&dto.password)?;

        let users = self.repos.users();
        if users.get_user_by_username(&dto.username).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "Username '{}' is already taken",
                dto.username
            )));
        }
        if users.get_user_by_email(&dto.email).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "Email '{}' is already registered",
                dto.email
            )));
        }
        self.ensure_role_exists(dto.role_id).await?;

        let user = users.create_user(dto).await?;
        info!(user_id = user.id, username = %user.username, "New user registered");
        Ok(user)
    }

    /// Seed an administrator when the users table is empty.
    /// Returns `None` if any user already exists.
    pub async fn ensure_default_admin(&self, admin: &DefaultAdmin) -> DomainResult<Option<User>> {
        let existing = self
            .repos
            .users()
            .list_users(GetUserDto {
                page_size: Some(1),
                ..Default::default()
            })
            .await?;
        if existing.total > 0 {
            return Ok(None);
        }

        let role = match self.repos.roles().find_by_name(&admin.role_name).await? {
            Some(role) => role,
            None => {
                let dto = CreateRoleDto {
                    name: admin.role_name.clone(),
                    description: Some("Full access".to_string()),
                };
                dto.validate()?;
                self.repos.roles().create(dto).await?
            }
        };

        let user = self
            .register(CreateUserDto {
                first_name: admin.first_name.clone(),
                last_name: admin.last_name.clone(),
                email: admin.email.clone(),
                username: admin.username.clone(),
                password: admin.password.clone(),
                is_admin: true,
                role_id: role.id,
            })
            .await?;

        info!(username = %user.username, "Default admin created, change its password");
        Ok(Some(user))
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn list_users(&self, dto: GetUserDto) -> DomainResult<PaginatedResult<User>> {
        self.repos.users().list_users(dto).await
    }

    pub async fn get_user(&self, id: i32) -> DomainResult<User> {
        self.repos
            .users()
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Update profile fields. Username and email stay unique.
    pub async fn update_user(&self, id: i32, dto: UpdateUserDto) -> DomainResult<User> {
        dto.validate()?;
        self.get_user(id).await?;

        let users = self.repos.users();
        if let Some(ref username) = dto.username {
            if let Some(other) = users.get_user_by_username(username).await? {
                if other.id != id {
                    return Err(DomainError::Conflict(format!(
                        "Username '{}' is already taken",
                        username
                    )));
                }
            }
        }
        if let Some(ref email) = dto.email {
            if let Some(other) = users.get_user_by_email(email).await? {
                if other.id != id {
                    return Err(DomainError::Conflict(format!(
                        "Email '{}' is already registered",
                        email
                    )));
                }
            }
        }
        if let Some(role_id) = dto.role_id {
            self.ensure_role_exists(role_id).await?;
        }

        users
            .update_user(id, dto)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    /// Replace the user's password. Only the new hash is persisted.
    pub async fn set_password(&self, id: i32, password: &str) -> DomainResult<()> {
        check_password(password)?;

        let mut user = self.get_user(id).await?;
        user.set_password(password)?;
        self.repos
            .users()
            .update_user_password(id, user.password_hash())
            .await?;

        info!(user_id = id, "Password changed");
        Ok(())
    }

    /// Check a candidate password against the stored hash.
    pub async fn verify_password(&self, id: i32, password: &str) -> DomainResult<bool> {
        let user = self.get_user(id).await?;
        Ok(user.verify_password(password))
    }

    /// Delete a user and, by cascade, their expenses.
    pub async fn delete_user(&self, id: i32) -> DomainResult<()> {
        self.repos.users().delete_user(id).await
    }

    // ── Helpers ─────────────────────────────────────────────────

    async fn ensure_role_exists(&self, role_id: i32) -> DomainResult<()> {
        if self.repos.roles().find_by_id(role_id).await?.is_none() {
            return Err(DomainError::Validation(format!(
                "role_id: Role {} does not exist",
                role_id
            )));
        }
        Ok(())
    }
}
