//! Role repository interface

use async_trait::async_trait;

use super::{CreateRoleDto, Role, UpdateRoleDto};
use crate::domain::{DomainResult, SearchQuery};
use crate::shared::PaginatedResult;

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn create(&self, dto: CreateRoleDto) -> DomainResult<Role>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Role>>;
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Role>>;
    async fn list(&self, query: SearchQuery) -> DomainResult<PaginatedResult<Role>>;
    async fn update(&self, id: i32, dto: UpdateRoleDto) -> DomainResult<Option<Role>>;
    /// Deletes the role together with its users and their expenses.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
