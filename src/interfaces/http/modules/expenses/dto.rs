//! Expense DTOs
//!
//! Currencies travel as their three-letter code.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{
    CreateExpenseDto, Currency, DomainError, Expense, ExpenseWithLinks, GetExpensesDto,
    UpdateExpenseDto,
};
use crate::interfaces::http::modules::expense_types::ExpenseTypeDto;
use crate::interfaces::http::modules::users::UserDto;

fn parse_currency(code: Option<String>) -> Result<Option<Currency>, DomainError> {
    code.map(|c| c.parse::<Currency>()).transpose()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExpenseDto {
    pub id: i32,
    pub name: String,
    pub amount: f64,
    pub details: Option<String>,
    /// ISO 4217 code
    pub currency: String,
    pub user_id: i32,
    pub expense_type_id: i32,
}

impl From<Expense> for ExpenseDto {
    fn from(e: Expense) -> Self {
        Self {
            id: e.id,
            name: e.name,
            amount: e.amount,
            details: e.details,
            currency: e.currency.code().to_string(),
            user_id: e.user_id,
            expense_type_id: e.expense_type_id,
        }
    }
}

/// An expense with its owner and category resolved
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExpenseDetailDto {
    pub id: i32,
    pub name: String,
    pub amount: f64,
    pub details: Option<String>,
    pub currency: String,
    pub user: UserDto,
    pub expense_type: ExpenseTypeDto,
}

impl From<ExpenseWithLinks> for ExpenseDetailDto {
    fn from(linked: ExpenseWithLinks) -> Self {
        let ExpenseWithLinks {
            expense,
            user,
            expense_type,
        } = linked;
        Self {
            id: expense.id,
            name: expense.name,
            amount: expense.amount,
            details: expense.details,
            currency: expense.currency.code().to_string(),
            user: user.into(),
            expense_type: expense_type.into(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateExpenseRequest {
    #[validate(length(min = 1, max = 60, message = "must be 1-60 characters"))]
    pub name: String,
    pub amount: f64,
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub details: Option<String>,
    /// Defaults to RSD; anything outside the ten codes is a 400
    pub currency: Option<String>,
    pub user_id: i32,
    pub expense_type_id: i32,
}

impl TryFrom<CreateExpenseRequest> for CreateExpenseDto {
    type Error = DomainError;

    fn try_from(r: CreateExpenseRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: r.name,
            amount: r.amount,
            details: r.details,
            currency: parse_currency(r.currency)?.unwrap_or_default(),
            user_id: r.user_id,
            expense_type_id: r.expense_type_id,
        })
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateExpenseRequest {
    #[validate(length(min = 1, max = 60, message = "must be 1-60 characters"))]
    pub name: Option<String>,
    pub amount: Option<f64>,
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub details: Option<String>,
    pub currency: Option<String>,
    pub expense_type_id: Option<i32>,
}

impl TryFrom<UpdateExpenseRequest> for UpdateExpenseDto {
    type Error = DomainError;

    fn try_from(r: UpdateExpenseRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: r.name,
            amount: r.amount,
            details: r.details,
            currency: parse_currency(r.currency)?,
            expense_type_id: r.expense_type_id,
        })
    }
}

/// List expenses query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListExpensesParams {
    pub user_id: Option<i32>,
    pub expense_type_id: Option<i32>,
    /// ISO 4217 code
    pub currency: Option<String>,
    /// Search by expense name
    pub search: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl TryFrom<ListExpensesParams> for GetExpensesDto {
    type Error = DomainError;

    fn try_from(p: ListExpensesParams) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: p.user_id,
            expense_type_id: p.expense_type_id,
            currency: parse_currency(p.currency)?,
            search: p.search,
            page: p.page,
            page_size: p.page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(currency: Option<&str>) -> CreateExpenseRequest {
        CreateExpenseRequest {
            name: "Taxi".into(),
            amount: 12.5,
            details: None,
            currency: currency.map(String::from),
            user_id: 1,
            expense_type_id: 1,
        }
    }

    #[test]
    fn missing_currency_defaults_to_rsd() {
        let dto = CreateExpenseDto::try_from(request(None)).unwrap();
        assert_eq!(dto.currency, Currency::Rsd);
    }

    #[test]
    fn currency_code_is_parsed() {
        let dto = CreateExpenseDto::try_from(request(Some("USD"))).unwrap();
        assert_eq!(dto.currency, Currency::Usd);
        assert!(matches!(
            CreateExpenseDto::try_from(request(Some("XYZ"))),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn list_params_parse_currency() {
        let params = ListExpensesParams {
            user_id: Some(3),
            expense_type_id: None,
            currency: Some("EUR".into()),
            search: None,
            page: None,
            page_size: None,
        };
        let dto = GetExpensesDto::try_from(params).unwrap();
        assert_eq!(dto.currency, Some(Currency::Eur));
        assert_eq!(dto.user_id, Some(3));
    }
}
