//! Expense service
//!
//! Validates expense payloads and checks that the owner and the expense
//! type exist before anything reaches storage.

use std::sync::Arc;

use validator::Validate;

use crate::domain::{
    CreateExpenseDto, DomainError, DomainResult, Expense, ExpenseWithLinks, GetExpensesDto,
    RepositoryProvider, UpdateExpenseDto,
};
use crate::shared::PaginatedResult;

pub struct ExpenseService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ExpenseService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, dto: CreateExpenseDto) -> DomainResult<Expense> {
        dto.validate()?;
        check_amount(dto.amount)?;

        if self.repos.users().get_user_by_id(dto.user_id).await?.is_none() {
            return Err(DomainError::Validation(format!(
                "user_id: User {} does not exist",
                dto.user_id
            )));
        }
        self.ensure_expense_type_exists(dto.expense_type_id).await?;

        self.repos.expenses().create(dto).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Expense> {
        self.repos
            .expenses()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Expense", id))
    }

    /// The expense together with its user and expense type.
    pub async fn get_with_links(&self, id: i32) -> DomainResult<ExpenseWithLinks> {
        self.repos
            .expenses()
            .find_with_links(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Expense", id))
    }

    pub async fn list(&self, dto: GetExpensesDto) -> DomainResult<PaginatedResult<Expense>> {
        self.repos.expenses().list(dto).await
    }

    pub async fn update(&self, id: i32, dto: UpdateExpenseDto) -> DomainResult<Expense> {
        dto.validate()?;
        if let Some(amount) = dto.amount {
            check_amount(amount)?;
        }
        self.get(id).await?;
        if let Some(expense_type_id) = dto.expense_type_id {
            self.ensure_expense_type_exists(expense_type_id).await?;
        }

        self.repos
            .expenses()
            .update(id, dto)
            .await?
            .ok_or_else(|| DomainError::not_found("Expense", id))
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos.expenses().delete(id).await
    }

    async fn ensure_expense_type_exists(&self, id: i32) -> DomainResult<()> {
        if self.repos.expense_types().find_by_id(id).await?.is_none() {
            return Err(DomainError::Validation(format!(
                "expense_type_id: ExpenseType {} does not exist",
                id
            )));
        }
        Ok(())
    }
}

/// NaN and infinities cannot be stored meaningfully.
fn check_amount(amount: f64) -> DomainResult<()> {
    if !amount.is_finite() {
        return Err(DomainError::Validation(
            "amount: must be a finite number".into(),
        ));
    }
    Ok(())
}
