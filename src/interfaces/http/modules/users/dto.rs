//! User DTOs
//!
//! Responses never carry the password or its hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{CreateUserDto, GetUserDto, UpdateUserDto, User};

/// User API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub is_admin: bool,
    pub role_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            username: u.username,
            is_admin: u.is_admin,
            role_id: u.role_id,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 30, message = "must be 1-30 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 30, message = "must be 1-30 characters"))]
    pub last_name: String,
    #[validate(
        email(message = "must be a valid email address"),
        length(max = 60, message = "must be at most 60 characters")
    )]
    pub email: String,
    #[validate(length(min = 1, max = 30, message = "must be 1-30 characters"))]
    pub username: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
    pub role_id: i32,
}

impl From<CreateUserRequest> for CreateUserDto {
    fn from(r: CreateUserRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            username: r.username,
            password: r.password,
            is_admin: r.is_admin,
            role_id: r.role_id,
        }
    }
}

/// Update user request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 30, message = "must be 1-30 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 30, message = "must be 1-30 characters"))]
    pub last_name: Option<String>,
    #[validate(
        email(message = "must be a valid email address"),
        length(max = 60, message = "must be at most 60 characters")
    )]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 30, message = "must be 1-30 characters"))]
    pub username: Option<String>,
    pub is_admin: Option<bool>,
    pub role_id: Option<i32>,
}

impl From<UpdateUserRequest> for UpdateUserDto {
    fn from(r: UpdateUserRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            username: r.username,
            is_admin: r.is_admin,
            role_id: r.role_id,
        }
    }
}

/// Body for both password endpoints
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PasswordRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyPasswordResponse {
    pub valid: bool,
}

/// List users query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUsersParams {
    /// Search by username, email, first or last name
    pub search: Option<String>,
    pub role_id: Option<i32>,
    pub is_admin: Option<bool>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Sort field (username, email, last_name); newest first otherwise
    pub sort_by: Option<String>,
}

impl From<ListUsersParams> for GetUserDto {
    fn from(p: ListUsersParams) -> Self {
        Self {
            search: p.search,
            role_id: p.role_id,
            is_admin: p.is_admin,
            page: p.page,
            page_size: p.page_size,
            sort_by: p.sort_by,
        }
    }
}
