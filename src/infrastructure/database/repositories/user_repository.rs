use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::info;

use super::write_err;
use crate::domain::{
    CreateUserDto, DomainError, DomainResult, GetUserDto, UpdateUserDto, User, UserRepository,
};
use crate::infrastructure::crypto::password::hash_password;
use crate::infrastructure::database::entities::user;
use crate::shared::{validate_pagination, InfraError, PaginatedResult};

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        username: model.username,
        password_hash: model.password_hash,
        is_admin: model.is_admin,
        role_id: model.role_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let password_hash = hash_password(&dto.password).map_err(InfraError::from)?;

        let new_user = user::ActiveModel {
            first_name: Set(dto.first_name),
            last_name: Set(dto.last_name),
            email: Set(dto.email),
            username: Set(dto.username),
            password_hash: Set(password_hash),
            is_admin: Set(dto.is_admin),
            role_id: Set(dto.role_id),
            ..Default::default()
        };

        let model = new_user
            .insert(&self.db)
            .await
            .map_err(|e| write_err("User", e))?;

        info!(user_id = model.id, username = %model.username, "User created");
        Ok(user_model_to_domain(model))
    }

    async fn list_users(&self, dto: GetUserDto) -> DomainResult<PaginatedResult<User>> {
        let (page, page_size) = validate_pagination(dto.page, dto.page_size);

        let mut query = user::Entity::find();

        if let Some(ref search) = dto.search {
            query = query.filter(
                Condition::any()
                    .add(user::Column::Username.contains(search))
                    .add(user::Column::Email.contains(search))
                    .add(user::Column::FirstName.contains(search))
                    .add(user::Column::LastName.contains(search)),
            );
        }
        if let Some(role_id) = dto.role_id {
            query = query.filter(user::Column::RoleId.eq(role_id));
        }
        if let Some(is_admin) = dto.is_admin {
            query = query.filter(user::Column::IsAdmin.eq(is_admin));
        }

        query = match dto.sort_by.as_deref() {
            Some("username") => query.order_by_asc(user::Column::Username),
            Some("email") => query.order_by_asc(user::Column::Email),
            Some("last_name") => query
                .order_by_asc(user::Column::LastName)
                .order_by_asc(user::Column::FirstName),
            _ => query
                .order_by_desc(user::Column::CreatedAt)
                .order_by_desc(user::Column::Id),
        };

        let total = query.clone().count(&self.db).await?;

        let models = query
            .offset(PaginatedResult::<User>::offset(page, page_size))
            .limit(page_size as u64)
            .all(&self.db)
            .await?;

        let items: Vec<User> = models.into_iter().map(user_model_to_domain).collect();

        Ok(PaginatedResult::new(items, total, page, page_size))
    }

    async fn get_user_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(model.map(user_model_to_domain))
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(model.map(user_model_to_domain))
    }

    async fn get_user_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(user_model_to_domain))
    }

    async fn update_user(&self, id: i32, dto: UpdateUserDto) -> DomainResult<Option<User>> {
        let Some(existing) = user::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: user::ActiveModel = existing.into();

        if let Some(first_name) = dto.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = dto.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(email) = dto.email {
            active.email = Set(email);
        }
        if let Some(username) = dto.username {
            active.username = Set(username);
        }
        if let Some(is_admin) = dto.is_admin {
            active.is_admin = Set(is_admin);
        }
        if let Some(role_id) = dto.role_id {
            active.role_id = Set(role_id);
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| write_err("User", e))?;

        Ok(Some(user_model_to_domain(updated)))
    }

    async fn update_user_password(&self, id: i32, new_password_hash: &str) -> DomainResult<()> {
        let Some(existing) = user::Entity::find_by_id(id).one(&self.db).await? else {
            return Err(DomainError::not_found("User", id));
        };

        let mut active: user::ActiveModel = existing.into();
        active.password_hash = Set(new_password_hash.to_string());
        active.update(&self.db).await?;

        Ok(())
    }

    async fn delete_user(&self, id: i32) -> DomainResult<()> {
        let result = user::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("User", id));
        }

        info!(user_id = id, "User deleted");
        Ok(())
    }
}
