//! HTTP REST API interfaces
//!
//! - `common`: response envelope, pagination, validated JSON, error mapping
//! - `modules`: request handlers and DTOs per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use common::{ApiResponse, PaginatedResponse};
pub use router::{create_api_router, ApiDoc, AppState};
