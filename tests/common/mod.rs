// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use expense_tracker::domain::{
    CreateExpenseTypeDto, CreateRoleDto, CreateUserDto, ExpenseType, RepositoryProvider, Role,
    User,
};
use expense_tracker::{Migrator, SeaOrmRepositoryProvider};

/// Creates an in-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub async fn setup_repos() -> (DatabaseConnection, Arc<dyn RepositoryProvider>) {
    let db = setup_test_db().await;
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    (db, repos)
}

pub fn user_dto(username: &str, role_id: i32) -> CreateUserDto {
    CreateUserDto {
        first_name: "Test".into(),
        last_name: "User".into(),
        email: format!("{}@example.com", username),
        username: username.into(),
        password: "s3cret-pass".into(),
        is_admin: false,
        role_id,
    }
}

pub async fn seed_role(repos: &dyn RepositoryProvider, name: &str) -> Role {
    repos
        .roles()
        .create(CreateRoleDto::new(name))
        .await
        .expect("role")
}

pub async fn seed_user(repos: &dyn RepositoryProvider, username: &str, role_id: i32) -> User {
    repos
        .users()
        .create_user(user_dto(username, role_id))
        .await
        .expect("user")
}

pub async fn seed_expense_type(repos: &dyn RepositoryProvider, label: &str) -> ExpenseType {
    repos
        .expense_types()
        .create(CreateExpenseTypeDto::new(label))
        .await
        .expect("expense type")
}
