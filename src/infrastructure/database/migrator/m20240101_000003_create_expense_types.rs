//! Create expense_types table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExpenseTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExpenseTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ExpenseTypes::Type).string_len(20).not_null())
                    .col(ColumnDef::new(ExpenseTypes::Description).string_len(255))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExpenseTypes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ExpenseTypes {
    Table,
    Id,
    Type,
    Description,
}
