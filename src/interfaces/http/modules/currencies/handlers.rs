//! Currency choices handler

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Currency;
use crate::interfaces::http::common::ApiResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CurrencyDto {
    pub code: String,
    pub label: String,
    pub is_default: bool,
}

impl From<Currency> for CurrencyDto {
    fn from(c: Currency) -> Self {
        Self {
            code: c.code().to_string(),
            label: c.label().to_string(),
            is_default: c == Currency::default(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/currencies",
    tag = "Currencies",
    responses(
        (status = 200, description = "Supported currencies", body = ApiResponse<Vec<CurrencyDto>>)
    )
)]
pub async fn list_currencies() -> Json<ApiResponse<Vec<CurrencyDto>>> {
    let currencies = Currency::ALL.into_iter().map(CurrencyDto::from).collect();
    Json(ApiResponse::success(currencies))
}
