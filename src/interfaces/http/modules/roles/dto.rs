//! Role DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{CreateRoleDto, Role, UpdateRoleDto};

/// Role API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoleDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<Role> for RoleDto {
    fn from(r: Role) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
        }
    }
}

/// Create role request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoleRequest {
    #[validate(length(min = 1, max = 60, message = "must be 1-60 characters"))]
    pub name: String,
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub description: Option<String>,
}

impl From<CreateRoleRequest> for CreateRoleDto {
    fn from(r: CreateRoleRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
        }
    }
}

/// Update role request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoleRequest {
    #[validate(length(min = 1, max = 60, message = "must be 1-60 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub description: Option<String>,
}

impl From<UpdateRoleRequest> for UpdateRoleDto {
    fn from(r: UpdateRoleRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
        }
    }
}
