use async_trait::async_trait;

use super::{CreateExpenseTypeDto, ExpenseType, UpdateExpenseTypeDto};
use crate::domain::{DomainResult, SearchQuery};
use crate::shared::PaginatedResult;

#[async_trait]
pub trait ExpenseTypeRepository: Send + Sync {
    async fn create(&self, dto: CreateExpenseTypeDto) -> DomainResult<ExpenseType>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ExpenseType>>;
    async fn list(&self, query: SearchQuery) -> DomainResult<PaginatedResult<ExpenseType>>;
    async fn update(&self, id: i32, dto: UpdateExpenseTypeDto)
        -> DomainResult<Option<ExpenseType>>;
    /// Deletes the expense type together with every expense filed under it.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
