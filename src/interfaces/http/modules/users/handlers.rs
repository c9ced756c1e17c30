//! User management API handlers
//!
//! Delegates to `UserService`. The password can be set and verified
//! through dedicated endpoints but never read.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateUserRequest, ListUsersParams, PasswordRequest, UpdateUserRequest, UserDto,
    VerifyPasswordResponse,
};
use crate::application::UserService;
use crate::interfaces::http::common::{
    api_error, ApiError, ApiResponse, PaginatedResponse, ValidatedJson,
};

#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "User list", body = PaginatedResponse<UserDto>)
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
    Query(params): Query<ListUsersParams>,
) -> Result<Json<PaginatedResponse<UserDto>>, ApiError> {
    let page = state
        .user_service
        .list_users(params.into())
        .await
        .map_err(api_error)?;
    Ok(Json(PaginatedResponse::from_result(page, UserDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let user = state.user_service.get_user(id).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 400, description = "Unknown role"),
        (status = 409, description = "Username or email already taken"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), ApiError> {
    let user = state
        .user_service
        .register(request.into())
        .await
        .map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(user.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let user = state
        .user_service
        .update_user(id, request.into())
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}/password",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = PasswordRequest,
    responses(
        (status = 200, description = "Password replaced"),
        (status = 404, description = "Not found")
    )
)]
pub async fn set_password(
    State(state): State<UserHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<PasswordRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .user_service
        .set_password(id, &request.password)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(())))
}

#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/verify-password",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = PasswordRequest,
    responses(
        (status = 200, description = "Verification result", body = ApiResponse<VerifyPasswordResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn verify_password(
    State(state): State<UserHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<PasswordRequest>,
) -> Result<Json<ApiResponse<VerifyPasswordResponse>>, ApiError> {
    let valid = state
        .user_service
        .verify_password(id, &request.password)
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(VerifyPasswordResponse { valid })))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted along with their expenses"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.user_service.delete_user(id).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(())))
}
