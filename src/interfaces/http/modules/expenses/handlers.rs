//! Expense API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateExpenseRequest, ExpenseDetailDto, ExpenseDto, ListExpensesParams, UpdateExpenseRequest,
};
use crate::application::ExpenseService;
use crate::domain::{CreateExpenseDto, GetExpensesDto, UpdateExpenseDto};
use crate::interfaces::http::common::{
    api_error, ApiError, ApiResponse, PaginatedResponse, ValidatedJson,
};

#[derive(Clone)]
pub struct ExpenseHandlerState {
    pub expense_service: Arc<ExpenseService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/expenses",
    tag = "Expenses",
    params(ListExpensesParams),
    responses(
        (status = 200, description = "Expense list", body = PaginatedResponse<ExpenseDto>),
        (status = 400, description = "Unsupported currency filter")
    )
)]
pub async fn list_expenses(
    State(state): State<ExpenseHandlerState>,
    Query(params): Query<ListExpensesParams>,
) -> Result<Json<PaginatedResponse<ExpenseDto>>, ApiError> {
    let dto: GetExpensesDto = params.try_into().map_err(api_error)?;
    let page = state.expense_service.list(dto).await.map_err(api_error)?;
    Ok(Json(PaginatedResponse::from_result(page, ExpenseDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/expenses/{id}",
    tag = "Expenses",
    params(("id" = i32, Path, description = "Expense ID")),
    responses(
        (status = 200, description = "Expense with its user and expense type", body = ApiResponse<ExpenseDetailDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_expense(
    State(state): State<ExpenseHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ExpenseDetailDto>>, ApiError> {
    let linked = state
        .expense_service
        .get_with_links(id)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(linked.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/expenses",
    tag = "Expenses",
    request_body = CreateExpenseRequest,
    responses(
        (status = 201, description = "Expense created", body = ApiResponse<ExpenseDto>),
        (status = 400, description = "Unknown user or expense type"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_expense(
    State(state): State<ExpenseHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ExpenseDto>>), ApiError> {
    let dto: CreateExpenseDto = request.try_into().map_err(api_error)?;
    let expense = state.expense_service.create(dto).await.map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(expense.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/expenses/{id}",
    tag = "Expenses",
    params(("id" = i32, Path, description = "Expense ID")),
    request_body = UpdateExpenseRequest,
    responses(
        (status = 200, description = "Expense updated", body = ApiResponse<ExpenseDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_expense(
    State(state): State<ExpenseHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateExpenseRequest>,
) -> Result<Json<ApiResponse<ExpenseDto>>, ApiError> {
    let dto: UpdateExpenseDto = request.try_into().map_err(api_error)?;
    let expense = state
        .expense_service
        .update(id, dto)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(expense.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/expenses/{id}",
    tag = "Expenses",
    params(("id" = i32, Path, description = "Expense ID")),
    responses(
        (status = 200, description = "Expense deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_expense(
    State(state): State<ExpenseHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.expense_service.delete(id).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(())))
}
