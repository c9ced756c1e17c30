//! SeaORM implementation of RoleRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::info;

use super::{blank_to_none, write_err};
use crate::domain::{
    CreateRoleDto, DomainError, DomainResult, Role, RoleRepository, SearchQuery, UpdateRoleDto,
};
use crate::infrastructure::database::entities::role;
use crate::shared::{validate_pagination, PaginatedResult};

pub struct SeaOrmRoleRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn role_model_to_domain(model: role::Model) -> Role {
    Role {
        id: model.id,
        name: model.name,
        description: model.description,
    }
}

#[async_trait]
impl RoleRepository for SeaOrmRoleRepository {
    async fn create(&self, dto: CreateRoleDto) -> DomainResult<Role> {
        let new_role = role::ActiveModel {
            name: Set(dto.name),
            description: Set(blank_to_none(dto.description)),
            ..Default::default()
        };

        let model = new_role
            .insert(&self.db)
            .await
            .map_err(|e| write_err("Role", e))?;

        info!(role_id = model.id, name = %model.name, "Role created");
        Ok(role_model_to_domain(model))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Role>> {
        let model = role::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(role_model_to_domain))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Role>> {
        let model = role::Entity::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        Ok(model.map(role_model_to_domain))
    }

    async fn list(&self, query: SearchQuery) -> DomainResult<PaginatedResult<Role>> {
        let (page, page_size) = validate_pagination(query.page, query.page_size);

        let mut select = role::Entity::find().order_by_asc(role::Column::Name);
        if let Some(ref search) = query.search {
            select = select.filter(role::Column::Name.contains(search));
        }

        let total = select.clone().count(&self.db).await?;
        let models = select
            .offset(PaginatedResult::<Role>::offset(page, page_size))
            .limit(page_size as u64)
            .all(&self.db)
            .await?;

        let items = models.into_iter().map(role_model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page, page_size))
    }

    async fn update(&self, id: i32, dto: UpdateRoleDto) -> DomainResult<Option<Role>> {
        let Some(existing) = role::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        if dto.name.is_none() && dto.description.is_none() {
            return Ok(Some(role_model_to_domain(existing)));
        }

        let mut active: role::ActiveModel = existing.into();
        if let Some(name) = dto.name {
            active.name = Set(name);
        }
        if let Some(description) = dto.description {
            active.description = Set(blank_to_none(Some(description)));
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| write_err("Role", e))?;

        Ok(Some(role_model_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = role::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Role", id));
        }

        info!(role_id = id, "Role deleted");
        Ok(())
    }
}
