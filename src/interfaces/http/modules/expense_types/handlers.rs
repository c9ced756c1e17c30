//! Expense type API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateExpenseTypeRequest, ExpenseTypeDto, UpdateExpenseTypeRequest};
use crate::application::CatalogService;
use crate::interfaces::http::common::{
    api_error, ApiError, ApiResponse, PaginatedResponse, SearchParams, ValidatedJson,
};

#[derive(Clone)]
pub struct ExpenseTypeHandlerState {
    pub catalog: Arc<CatalogService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/expense-types",
    tag = "Expense Types",
    params(SearchParams),
    responses(
        (status = 200, description = "Expense type list", body = PaginatedResponse<ExpenseTypeDto>)
    )
)]
pub async fn list_expense_types(
    State(state): State<ExpenseTypeHandlerState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<PaginatedResponse<ExpenseTypeDto>>, ApiError> {
    let page = state
        .catalog
        .list_expense_types(params.into())
        .await
        .map_err(api_error)?;
    Ok(Json(PaginatedResponse::from_result(page, ExpenseTypeDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/expense-types/{id}",
    tag = "Expense Types",
    params(("id" = i32, Path, description = "Expense type ID")),
    responses(
        (status = 200, description = "Expense type details", body = ApiResponse<ExpenseTypeDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_expense_type(
    State(state): State<ExpenseTypeHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ExpenseTypeDto>>, ApiError> {
    let expense_type = state.catalog.get_expense_type(id).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(expense_type.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/expense-types",
    tag = "Expense Types",
    request_body = CreateExpenseTypeRequest,
    responses(
        (status = 201, description = "Expense type created", body = ApiResponse<ExpenseTypeDto>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_expense_type(
    State(state): State<ExpenseTypeHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateExpenseTypeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ExpenseTypeDto>>), ApiError> {
    let expense_type = state
        .catalog
        .create_expense_type(request.into())
        .await
        .map_err(api_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(expense_type.into())),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/expense-types/{id}",
    tag = "Expense Types",
    params(("id" = i32, Path, description = "Expense type ID")),
    request_body = UpdateExpenseTypeRequest,
    responses(
        (status = 200, description = "Expense type updated", body = ApiResponse<ExpenseTypeDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_expense_type(
    State(state): State<ExpenseTypeHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateExpenseTypeRequest>,
) -> Result<Json<ApiResponse<ExpenseTypeDto>>, ApiError> {
    let expense_type = state
        .catalog
        .update_expense_type(id, request.into())
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(expense_type.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/expense-types/{id}",
    tag = "Expense Types",
    params(("id" = i32, Path, description = "Expense type ID")),
    responses(
        (status = 200, description = "Expense type deleted along with its expenses"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_expense_type(
    State(state): State<ExpenseTypeHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .catalog
        .delete_expense_type(id)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(())))
}
