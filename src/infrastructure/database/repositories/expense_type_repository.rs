//! SeaORM implementation of ExpenseTypeRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::info;

use super::{blank_to_none, write_err};
use crate::domain::{
    CreateExpenseTypeDto, DomainError, DomainResult, ExpenseType, ExpenseTypeRepository,
    SearchQuery, UpdateExpenseTypeDto,
};
use crate::infrastructure::database::entities::expense_type;
use crate::shared::{validate_pagination, PaginatedResult};

pub struct SeaOrmExpenseTypeRepository {
    db: DatabaseConnection,
}

impl SeaOrmExpenseTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn expense_type_model_to_domain(model: expense_type::Model) -> ExpenseType {
    ExpenseType {
        id: model.id,
        type_name: model.type_name,
        description: model.description,
    }
}

#[async_trait]
impl ExpenseTypeRepository for SeaOrmExpenseTypeRepository {
    async fn create(&self, dto: CreateExpenseTypeDto) -> DomainResult<ExpenseType> {
        let model = expense_type::ActiveModel {
            type_name: Set(dto.type_name),
            description: Set(blank_to_none(dto.description)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_err("ExpenseType", e))?;

        info!(expense_type_id = model.id, label = %model.type_name, "Expense type created");
        Ok(expense_type_model_to_domain(model))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ExpenseType>> {
        let model = expense_type::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(expense_type_model_to_domain))
    }

    async fn list(&self, query: SearchQuery) -> DomainResult<PaginatedResult<ExpenseType>> {
        let (page, page_size) = validate_pagination(query.page, query.page_size);

        let mut select = expense_type::Entity::find().order_by_asc(expense_type::Column::TypeName);
        if let Some(ref search) = query.search {
            select = select.filter(expense_type::Column::TypeName.contains(search));
        }

        let total = select.clone().count(&self.db).await?;
        let models = select
            .offset(PaginatedResult::<ExpenseType>::offset(page, page_size))
            .limit(page_size as u64)
            .all(&self.db)
            .await?;

        let items = models.into_iter().map(expense_type_model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page, page_size))
    }

    async fn update(
        &self,
        id: i32,
        dto: UpdateExpenseTypeDto,
    ) -> DomainResult<Option<ExpenseType>> {
        let Some(existing) = expense_type::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        if dto.type_name.is_none() && dto.description.is_none() {
            return Ok(Some(expense_type_model_to_domain(existing)));
        }

        let mut active: expense_type::ActiveModel = existing.into();
        if let Some(type_name) = dto.type_name {
            active.type_name = Set(type_name);
        }
        if let Some(description) = dto.description {
            active.description = Set(blank_to_none(Some(description)));
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| write_err("ExpenseType", e))?;

        Ok(Some(expense_type_model_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = expense_type::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("ExpenseType", id));
        }

        info!(expense_type_id = id, "Expense type deleted");
        Ok(())
    }
}
