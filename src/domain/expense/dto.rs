use validator::Validate;

use super::Currency;

#[derive(Debug, Clone, Validate)]
pub struct CreateExpenseDto {
    #[validate(length(min = 1, max = 60, message = "must be 1-60 characters"))]
    pub name: String,
    pub amount: f64,
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub details: Option<String>,
    pub currency: Currency,
    pub user_id: i32,
    pub expense_type_id: i32,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateExpenseDto {
    #[validate(length(min = 1, max = 60, message = "must be 1-60 characters"))]
    pub name: Option<String>,
    pub amount: Option<f64>,
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub details: Option<String>,
    pub currency: Option<Currency>,
    pub expense_type_id: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct GetExpensesDto {
    pub user_id: Option<i32>,
    pub expense_type_id: Option<i32>,
    pub currency: Option<Currency>,
    /// Substring match on the expense name
    pub search: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}
