//! Create expenses table
//!
//! Currency is restricted to ten ISO codes by a CHECK constraint and
//! defaults to RSD. Both foreign keys cascade on delete.

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_users::Users;
use super::m20240101_000003_create_expense_types::ExpenseTypes;

const CURRENCY_CODES: [&str; 10] = [
    "AUD", "BAM", "CAD", "HRK", "EUR", "HUF", "NZD", "RSD", "GBP", "USD",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenses::Name).string_len(60).not_null())
                    .col(ColumnDef::new(Expenses::Amount).double().not_null())
                    .col(ColumnDef::new(Expenses::Details).string_len(255))
                    .col(
                        ColumnDef::new(Expenses::Currency)
                            .string_len(3)
                            .not_null()
                            .default("RSD")
                            .check(Expr::col(Expenses::Currency).is_in(CURRENCY_CODES)),
                    )
                    .col(ColumnDef::new(Expenses::UserId).integer().not_null())
                    .col(ColumnDef::new(Expenses::ExpenseTypeId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expenses_user")
                            .from(Expenses::Table, Expenses::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expenses_expense_type")
                            .from(Expenses::Table, Expenses::ExpenseTypeId)
                            .to(ExpenseTypes::Table, ExpenseTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_expenses_user_id")
                    .table(Expenses::Table)
                    .col(Expenses::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_expenses_expense_type_id")
                    .table(Expenses::Table)
                    .col(Expenses::ExpenseTypeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Expenses {
    Table,
    Id,
    Name,
    Amount,
    Details,
    Currency,
    UserId,
    ExpenseTypeId,
}
