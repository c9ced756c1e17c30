//! Expense entity

use sea_orm::entity::prelude::*;

/// Stored currency code; the column also carries a CHECK constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(3))")]
pub enum Currency {
    #[sea_orm(string_value = "AUD")]
    Aud,
    #[sea_orm(string_value = "BAM")]
    Bam,
    #[sea_orm(string_value = "CAD")]
    Cad,
    #[sea_orm(string_value = "HRK")]
    Hrk,
    #[sea_orm(string_value = "EUR")]
    Eur,
    #[sea_orm(string_value = "HUF")]
    Huf,
    #[sea_orm(string_value = "NZD")]
    Nzd,
    #[sea_orm(string_value = "RSD")]
    Rsd,
    #[sea_orm(string_value = "GBP")]
    Gbp,
    #[sea_orm(string_value = "USD")]
    Usd,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(column_type = "Double")]
    pub amount: f64,

    #[sea_orm(nullable)]
    pub details: Option<String>,

    pub currency: Currency,

    pub user_id: i32,

    pub expense_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::expense_type::Entity",
        from = "Column::ExpenseTypeId",
        to = "super::expense_type::Column::Id",
        on_delete = "Cascade"
    )]
    ExpenseType,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::expense_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpenseType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
