//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::expense::ExpenseRepository;
use crate::domain::expense_type::ExpenseTypeRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::role::RoleRepository;
use crate::domain::user::UserRepository;

use super::expense_repository::SeaOrmExpenseRepository;
use super::expense_type_repository::SeaOrmExpenseTypeRepository;
use super::role_repository::SeaOrmRoleRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let alice = repos.users().get_user_by_username("alice").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    roles: SeaOrmRoleRepository,
    users: SeaOrmUserRepository,
    expense_types: SeaOrmExpenseTypeRepository,
    expenses: SeaOrmExpenseRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            roles: SeaOrmRoleRepository::new(db.clone()),
            users: SeaOrmUserRepository::new(db.clone()),
            expense_types: SeaOrmExpenseTypeRepository::new(db.clone()),
            expenses: SeaOrmExpenseRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn roles(&self) -> &dyn RoleRepository {
        &self.roles
    }

    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn expense_types(&self) -> &dyn ExpenseTypeRepository {
        &self.expense_types
    }

    fn expenses(&self) -> &dyn ExpenseRepository {
        &self.expenses
    }
}
