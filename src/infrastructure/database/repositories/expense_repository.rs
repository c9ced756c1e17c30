//! SeaORM implementation of ExpenseRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::info;

use super::expense_type_repository::expense_type_model_to_domain;
use super::user_repository::user_model_to_domain;
use super::{blank_to_none, write_err};
use crate::domain::{
    CreateExpenseDto, Currency, DomainError, DomainResult, Expense, ExpenseRepository,
    ExpenseWithLinks, GetExpensesDto, UpdateExpenseDto,
};
use crate::infrastructure::database::entities::{expense, expense_type, user};
use crate::shared::{validate_pagination, PaginatedResult};

pub struct SeaOrmExpenseRepository {
    db: DatabaseConnection,
}

impl SeaOrmExpenseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn currency_to_db(c: Currency) -> expense::Currency {
    match c {
        Currency::Aud => expense::Currency::Aud,
        Currency::Bam => expense::Currency::Bam,
        Currency::Cad => expense::Currency::Cad,
        Currency::Hrk => expense::Currency::Hrk,
        Currency::Eur => expense::Currency::Eur,
        Currency::Huf => expense::Currency::Huf,
        Currency::Nzd => expense::Currency::Nzd,
        Currency::Rsd => expense::Currency::Rsd,
        Currency::Gbp => expense::Currency::Gbp,
        Currency::Usd => expense::Currency::Usd,
    }
}

fn currency_from_db(c: expense::Currency) -> Currency {
    match c {
        expense::Currency::Aud => Currency::Aud,
        expense::Currency::Bam => Currency::Bam,
        expense::Currency::Cad => Currency::Cad,
        expense::Currency::Hrk => Currency::Hrk,
        expense::Currency::Eur => Currency::Eur,
        expense::Currency::Huf => Currency::Huf,
        expense::Currency::Nzd => Currency::Nzd,
        expense::Currency::Rsd => Currency::Rsd,
        expense::Currency::Gbp => Currency::Gbp,
        expense::Currency::Usd => Currency::Usd,
    }
}

fn expense_model_to_domain(model: expense::Model) -> Expense {
    Expense {
        id: model.id,
        name: model.name,
        amount: model.amount,
        details: model.details,
        currency: currency_from_db(model.currency),
        user_id: model.user_id,
        expense_type_id: model.expense_type_id,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl ExpenseRepository for SeaOrmExpenseRepository {
    async fn create(&self, dto: CreateExpenseDto) -> DomainResult<Expense> {
        let new_expense = expense::ActiveModel {
            name: Set(dto.name),
            amount: Set(dto.amount),
            details: Set(blank_to_none(dto.details)),
            currency: Set(currency_to_db(dto.currency)),
            user_id: Set(dto.user_id),
            expense_type_id: Set(dto.expense_type_id),
            ..Default::default()
        };

        let model = new_expense
            .insert(&self.db)
            .await
            .map_err(|e| write_err("Expense", e))?;

        info!(
            expense_id = model.id,
            user_id = model.user_id,
            amount = model.amount,
            currency = %currency_from_db(model.currency),
            "Expense created"
        );
        Ok(expense_model_to_domain(model))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Expense>> {
        let model = expense::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(expense_model_to_domain))
    }

    async fn find_with_links(&self, id: i32) -> DomainResult<Option<ExpenseWithLinks>> {
        let Some((model, owner)) = expense::Entity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        // Deleted between the two reads.
        let Some(owner) = owner else {
            return Ok(None);
        };
        let Some(category) = expense_type::Entity::find_by_id(model.expense_type_id)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(ExpenseWithLinks {
            expense: expense_model_to_domain(model),
            user: user_model_to_domain(owner),
            expense_type: expense_type_model_to_domain(category),
        }))
    }

    async fn list(&self, dto: GetExpensesDto) -> DomainResult<PaginatedResult<Expense>> {
        let (page, page_size) = validate_pagination(dto.page, dto.page_size);

        let mut query = expense::Entity::find().order_by_desc(expense::Column::Id);

        if let Some(user_id) = dto.user_id {
            query = query.filter(expense::Column::UserId.eq(user_id));
        }
        if let Some(expense_type_id) = dto.expense_type_id {
            query = query.filter(expense::Column::ExpenseTypeId.eq(expense_type_id));
        }
        if let Some(currency) = dto.currency {
            query = query.filter(expense::Column::Currency.eq(currency_to_db(currency)));
        }
        if let Some(ref search) = dto.search {
            query = query.filter(expense::Column::Name.contains(search));
        }

        let total = query.clone().count(&self.db).await?;

        let models = query
            .offset(PaginatedResult::<Expense>::offset(page, page_size))
            .limit(page_size as u64)
            .all(&self.db)
            .await?;

        let items = models.into_iter().map(expense_model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page, page_size))
    }

    async fn update(&self, id: i32, dto: UpdateExpenseDto) -> DomainResult<Option<Expense>> {
        let Some(existing) = expense::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        if dto.name.is_none()
            && dto.amount.is_none()
            && dto.details.is_none()
            && dto.currency.is_none()
            && dto.expense_type_id.is_none()
        {
            return Ok(Some(expense_model_to_domain(existing)));
        }

        let mut active: expense::ActiveModel = existing.into();
        if let Some(name) = dto.name {
            active.name = Set(name);
        }
        if let Some(amount) = dto.amount {
            active.amount = Set(amount);
        }
        if let Some(details) = dto.details {
            active.details = Set(blank_to_none(Some(details)));
        }
        if let Some(currency) = dto.currency {
            active.currency = Set(currency_to_db(currency));
        }
        if let Some(expense_type_id) = dto.expense_type_id {
            active.expense_type_id = Set(expense_type_id);
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| write_err("Expense", e))?;

        Ok(Some(expense_model_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = expense::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Expense", id));
        }

        info!(expense_id = id, "Expense deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_mapping_is_lossless() {
        for c in Currency::ALL {
            let stored = currency_to_db(c);
            assert_eq!(currency_from_db(stored), c);
            assert_eq!(sea_orm::ActiveEnum::to_value(&stored), c.code());
        }
    }
}
