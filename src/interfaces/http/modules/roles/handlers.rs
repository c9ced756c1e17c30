//! Role API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateRoleRequest, RoleDto, UpdateRoleRequest};
use crate::application::CatalogService;
use crate::interfaces::http::common::{
    api_error, ApiError, ApiResponse, PaginatedResponse, SearchParams, ValidatedJson,
};

#[derive(Clone)]
pub struct RoleHandlerState {
    pub catalog: Arc<CatalogService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/roles",
    tag = "Roles",
    params(SearchParams),
    responses(
        (status = 200, description = "Role list", body = PaginatedResponse<RoleDto>)
    )
)]
pub async fn list_roles(
    State(state): State<RoleHandlerState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<PaginatedResponse<RoleDto>>, ApiError> {
    let page = state
        .catalog
        .list_roles(params.into())
        .await
        .map_err(api_error)?;
    Ok(Json(PaginatedResponse::from_result(page, RoleDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/roles/{id}",
    tag = "Roles",
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role details", body = ApiResponse<RoleDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_role(
    State(state): State<RoleHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<RoleDto>>, ApiError> {
    let role = state.catalog.get_role(id).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(role.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/roles",
    tag = "Roles",
    request_body = CreateRoleRequest,
    responses(
        (status = 201, description = "Role created", body = ApiResponse<RoleDto>),
        (status = 409, description = "Name already taken"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_role(
    State(state): State<RoleHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateRoleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RoleDto>>), ApiError> {
    let role = state
        .catalog
        .create_role(request.into())
        .await
        .map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(role.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/roles/{id}",
    tag = "Roles",
    params(("id" = i32, Path, description = "Role ID")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = ApiResponse<RoleDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn update_role(
    State(state): State<RoleHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRoleRequest>,
) -> Result<Json<ApiResponse<RoleDto>>, ApiError> {
    let role = state
        .catalog
        .update_role(id, request.into())
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(role.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/roles/{id}",
    tag = "Roles",
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role deleted along with its users and their expenses"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_role(
    State(state): State<RoleHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.catalog.delete_role(id).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(())))
}
