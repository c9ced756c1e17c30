//! REST API driven through the router with `tower::ServiceExt::oneshot`

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::setup_repos;
use expense_tracker::{create_api_router, AppState};

async fn app() -> Router {
    let (db, repos) = setup_repos().await;
    create_api_router(AppState::new(db, repos))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Role "Employee", user "alice", expense type "Travel"; returns their ids.
async fn seed(app: &Router) -> (i64, i64, i64) {
    let (status, role) = send(app, "POST", "/api/v1/roles", Some(json!({"name": "Employee"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let role_id = role["data"]["id"].as_i64().unwrap();

    let (status, user) = send(
        app,
        "POST",
        "/api/v1/users",
        Some(json!({
            "first_name": "Alice",
            "last_name": "Smith",
            "email": "alice@example.com",
            "username": "alice",
            "password": "hunter2",
            "role_id": role_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let user_id = user["data"]["id"].as_i64().unwrap();

    let (status, travel) = send(
        app,
        "POST",
        "/api/v1/expense-types",
        Some(json!({"type": "Travel", "description": "Trips"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let type_id = travel["data"]["id"].as_i64().unwrap();

    (role_id, user_id, type_id)
}

#[tokio::test]
async fn health_reports_database() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["status"], "ok");
}

#[tokio::test]
async fn taxi_expense_end_to_end() {
    let app = app().await;
    let (_role_id, user_id, type_id) = seed(&app).await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/v1/expenses",
        Some(json!({
            "name": "Taxi",
            "amount": 12.50,
            "currency": "USD",
            "user_id": user_id,
            "expense_type_id": type_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["data"]["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, "GET", &format!("/api/v1/expenses/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["amount"], 12.5);
    assert_eq!(fetched["data"]["currency"], "USD");
    assert_eq!(fetched["data"]["user"]["username"], "alice");
    assert_eq!(fetched["data"]["expense_type"]["type"], "Travel");
}

#[tokio::test]
async fn user_payloads_never_expose_password() {
    let app = app().await;
    let (_role_id, user_id, _type_id) = seed(&app).await;

    let (status, body) = send(&app, "GET", &format!("/api/v1/users/{}", user_id), None).await;
    assert_eq!(status, StatusCode::OK);
    let user = body["data"].as_object().unwrap();
    assert!(!user.contains_key("password"));
    assert!(!user.contains_key("password_hash"));
    assert_eq!(user["is_admin"], false);

    let (status, body) = send(&app, "GET", "/api/v1/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.to_string().contains("$2"));
}

#[tokio::test]
async fn password_endpoints() {
    let app = app().await;
    let (_role_id, user_id, _type_id) = seed(&app).await;
    let verify = format!("/api/v1/users/{}/verify-password", user_id);

    let (_, body) = send(&app, "POST", &verify, Some(json!({"password": "hunter2"}))).await;
    assert_eq!(body["data"]["valid"], true);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/v1/users/{}/password", user_id),
        Some(json!({"password": "correct horse"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "POST", &verify, Some(json!({"password": "hunter2"}))).await;
    assert_eq!(body["data"]["valid"], false);
    let (_, body) = send(&app, "POST", &verify, Some(json!({"password": "correct horse"}))).await;
    assert_eq!(body["data"]["valid"], true);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/v1/users/{}/password", user_id),
        Some(json!({"password": "x".repeat(73)})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn error_statuses() {
    let app = app().await;
    let (_role_id, user_id, type_id) = seed(&app).await;

    // Duplicate role name
    let (status, body) = send(&app, "POST", "/api/v1/roles", Some(json!({"name": "Employee"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);

    // Field length violation
    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/roles",
        Some(json!({"name": "r".repeat(61)})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Unsupported currency
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/expenses",
        Some(json!({
            "name": "Taxi",
            "amount": 1.0,
            "currency": "XYZ",
            "user_id": user_id,
            "expense_type_id": type_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("XYZ"));

    // Unknown id
    let (status, _) = send(&app, "GET", "/api/v1/expenses/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", "/api/v1/roles/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn currency_defaults_and_listing() {
    let app = app().await;
    let (_role_id, user_id, type_id) = seed(&app).await;

    let (_, created) = send(
        &app,
        "POST",
        "/api/v1/expenses",
        Some(json!({
            "name": "Lunch",
            "amount": 950.0,
            "user_id": user_id,
            "expense_type_id": type_id
        })),
    )
    .await;
    assert_eq!(created["data"]["currency"], "RSD");

    let (status, page) = send(&app, "GET", "/api/v1/expenses?currency=RSD", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 1);

    let (status, currencies) = send(&app, "GET", "/api/v1/currencies", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = currencies["data"].as_array().unwrap();
    assert_eq!(list.len(), 10);
    let defaults: Vec<&Value> = list.iter().filter(|c| c["is_default"] == true).collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0]["code"], "RSD");
}

#[tokio::test]
async fn deleting_role_removes_its_users_and_expenses() {
    let app = app().await;
    let (role_id, user_id, type_id) = seed(&app).await;

    let (_, created) = send(
        &app,
        "POST",
        "/api/v1/expenses",
        Some(json!({
            "name": "Taxi",
            "amount": 12.5,
            "user_id": user_id,
            "expense_type_id": type_id
        })),
    )
    .await;
    let expense_id = created["data"]["id"].as_i64().unwrap();

    let (status, _) = send(&app, "DELETE", &format!("/api/v1/roles/{}", role_id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &format!("/api/v1/users/{}", user_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", &format!("/api/v1/expenses/{}", expense_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", &format!("/api/v1/expense-types/{}", type_id), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app().await;
    let (status, doc) = send(&app, "GET", "/api-doc/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/v1/expenses/{id}"].is_object());
}
