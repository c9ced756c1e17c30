//! Expense type DTOs
//!
//! The category label travels as `type` on the wire.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{CreateExpenseTypeDto, ExpenseType, UpdateExpenseTypeDto};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExpenseTypeDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: Option<String>,
}

impl From<ExpenseType> for ExpenseTypeDto {
    fn from(t: ExpenseType) -> Self {
        Self {
            id: t.id,
            type_name: t.type_name,
            description: t.description,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateExpenseTypeRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 20, message = "must be 1-20 characters"))]
    pub type_name: String,
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub description: Option<String>,
}

impl From<CreateExpenseTypeRequest> for CreateExpenseTypeDto {
    fn from(r: CreateExpenseTypeRequest) -> Self {
        Self {
            type_name: r.type_name,
            description: r.description,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateExpenseTypeRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 20, message = "must be 1-20 characters"))]
    pub type_name: Option<String>,
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub description: Option<String>,
}

impl From<UpdateExpenseTypeRequest> for UpdateExpenseTypeDto {
    fn from(r: UpdateExpenseTypeRequest) -> Self {
        Self {
            type_name: r.type_name,
            description: r.description,
        }
    }
}
