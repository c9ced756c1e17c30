//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, PaginatedResponse};
use super::modules::request_id::request_id_middleware;
use super::modules::{currencies, expense_types, expenses, health, roles, users};
use crate::application::{CatalogService, ExpenseService, UserService};
use crate::domain::RepositoryProvider;

/// Unified router state. Each handler keeps its own `State<T>` extractor
/// and Axum narrows this down through `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub user_service: Arc<UserService>,
    pub expense_service: Arc<ExpenseService>,
    pub catalog: Arc<CatalogService>,
    pub started_at: Arc<Instant>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            db,
            user_service: Arc::new(UserService::new(repos.clone())),
            expense_service: Arc::new(ExpenseService::new(repos.clone())),
            catalog: Arc::new(CatalogService::new(repos)),
            started_at: Arc::new(Instant::now()),
        }
    }
}

impl FromRef<AppState> for health::HealthState {
    fn from_ref(s: &AppState) -> Self {
        health::HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<AppState> for roles::RoleHandlerState {
    fn from_ref(s: &AppState) -> Self {
        roles::RoleHandlerState {
            catalog: Arc::clone(&s.catalog),
        }
    }
}

impl FromRef<AppState> for expense_types::ExpenseTypeHandlerState {
    fn from_ref(s: &AppState) -> Self {
        expense_types::ExpenseTypeHandlerState {
            catalog: Arc::clone(&s.catalog),
        }
    }
}

impl FromRef<AppState> for users::UserHandlerState {
    fn from_ref(s: &AppState) -> Self {
        users::UserHandlerState {
            user_service: Arc::clone(&s.user_service),
        }
    }
}

impl FromRef<AppState> for expenses::ExpenseHandlerState {
    fn from_ref(s: &AppState) -> Self {
        expenses::ExpenseHandlerState {
            expense_service: Arc::clone(&s.expense_service),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Roles
        roles::list_roles,
        roles::get_role,
        roles::create_role,
        roles::update_role,
        roles::delete_role,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::set_password,
        users::verify_password,
        users::delete_user,
        // Expense types
        expense_types::list_expense_types,
        expense_types::get_expense_type,
        expense_types::create_expense_type,
        expense_types::update_expense_type,
        expense_types::delete_expense_type,
        // Expenses
        expenses::list_expenses,
        expenses::get_expense,
        expenses::create_expense,
        expenses::update_expense,
        expenses::delete_expense,
        // Currencies
        currencies::list_currencies,
    ),
    components(
        schemas(
            ApiResponse<String>,
            PaginatedResponse<roles::RoleDto>,
            PaginatedResponse<users::UserDto>,
            PaginatedResponse<expense_types::ExpenseTypeDto>,
            PaginatedResponse<expenses::ExpenseDto>,
            health::HealthResponse,
            health::ComponentHealth,
            roles::RoleDto,
            roles::CreateRoleRequest,
            roles::UpdateRoleRequest,
            users::UserDto,
            users::CreateUserRequest,
            users::UpdateUserRequest,
            users::PasswordRequest,
            users::VerifyPasswordResponse,
            expense_types::ExpenseTypeDto,
            expense_types::CreateExpenseTypeRequest,
            expense_types::UpdateExpenseTypeRequest,
            expenses::ExpenseDto,
            expenses::ExpenseDetailDto,
            expenses::CreateExpenseRequest,
            expenses::UpdateExpenseRequest,
            currencies::CurrencyDto,
        )
    ),
    tags(
        (name = "Health", description = "Server and database health"),
        (name = "Roles", description = "User roles"),
        (name = "Users", description = "User accounts; passwords are write-only"),
        (name = "Expense Types", description = "Expense categories"),
        (name = "Expenses", description = "Expense records"),
        (name = "Currencies", description = "Supported expense currencies"),
    ),
    info(
        title = "Expense Tracker API",
        version = "1.0.0",
        description = "REST API for roles, users, expense types and expenses"
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        // Roles
        .route(
            "/api/v1/roles",
            get(roles::list_roles).post(roles::create_role),
        )
        .route(
            "/api/v1/roles/{id}",
            get(roles::get_role)
                .put(roles::update_role)
                .delete(roles::delete_role),
        )
        // Users
        .route(
            "/api/v1/users",
            get(users::list_users).post(users::create_user),
        )
        .route(
            "/api/v1/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/api/v1/users/{id}/password", put(users::set_password))
        .route(
            "/api/v1/users/{id}/verify-password",
            post(users::verify_password),
        )
        // Expense types
        .route(
            "/api/v1/expense-types",
            get(expense_types::list_expense_types).post(expense_types::create_expense_type),
        )
        .route(
            "/api/v1/expense-types/{id}",
            get(expense_types::get_expense_type)
                .put(expense_types::update_expense_type)
                .delete(expense_types::delete_expense_type),
        )
        // Expenses
        .route(
            "/api/v1/expenses",
            get(expenses::list_expenses).post(expenses::create_expense),
        )
        .route(
            "/api/v1/expenses/{id}",
            get(expenses::get_expense)
                .put(expenses::update_expense)
                .delete(expenses::delete_expense),
        )
        // Currencies
        .route("/api/v1/currencies", get(currencies::list_currencies))
        .with_state(state);

    Router::new()
        .merge(swagger_routes)
        .merge(api_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
