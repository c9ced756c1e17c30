//! Shared HTTP types: response envelope, pagination, error mapping

mod validated_json;

pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{DomainError, SearchQuery};
use crate::shared::PaginatedResult;

/// Standard API response envelope
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// A page of items plus page metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    /// Total across all pages
    pub total: u64,
    /// 1-based
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(limit as u64) as u32
        };
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Convert a domain page, mapping each item.
    pub fn from_result<U>(result: PaginatedResult<U>, f: impl FnMut(U) -> T) -> Self {
        let items = result.items.into_iter().map(f).collect();
        Self::new(items, result.total, result.page, result.limit)
    }
}

/// Search + pagination query for the catalog lists
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Substring search
    pub search: Option<String>,
    /// Page number (1-based). Default: 1
    pub page: Option<u32>,
    /// Items per page (1-100). Default: 20
    pub page_size: Option<u32>,
}

impl From<SearchParams> for SearchQuery {
    fn from(p: SearchParams) -> Self {
        Self {
            search: p.search,
            page: p.page,
            page_size: p.page_size,
        }
    }
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// HTTP status for a domain failure.
pub fn error_status(e: &DomainError) -> StatusCode {
    match e {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::PasswordNotReadable => StatusCode::FORBIDDEN,
        DomainError::Infra(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn api_error(e: DomainError) -> ApiError {
    let status = error_status(&e);
    if status.is_server_error() {
        error!(error = %e, "Request failed");
        return (status, Json(ApiResponse::error("Internal server error")));
    }
    (status, Json(ApiResponse::error(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::InfraError;

    #[test]
    fn domain_errors_map_to_statuses() {
        assert_eq!(
            error_status(&DomainError::Validation("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&DomainError::not_found("Role", 1)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_status(&DomainError::Conflict("x".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            error_status(&DomainError::PasswordNotReadable),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            error_status(&DomainError::Infra(InfraError::Config("x".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn server_errors_hide_details() {
        let (status, Json(body)) =
            api_error(DomainError::Infra(InfraError::Crypto("bad salt".into())));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some("Internal server error"));
        assert!(!body.success);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page: PaginatedResponse<u8> = PaginatedResponse::new(vec![], 41, 1, 20);
        assert_eq!(page.total_pages, 3);
        let empty: PaginatedResponse<u8> = PaginatedResponse::new(vec![], 0, 1, 20);
        assert_eq!(empty.total_pages, 0);
    }
}
