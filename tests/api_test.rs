//! Integration tests for API endpoints.
//!
//! Requests go through the full router (auth middleware, extractors,
//! error mapping) backed by an in-memory SQLite database.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use employee_directory::api::{create_router, AppState};
use employee_directory::config::Config;
use employee_directory::domain::EmployeeResponse;
use employee_directory::infra::Database;
use employee_directory::services::TokenResponse;

// =============================================================================
// Test Harness
// =============================================================================

async fn app() -> Router {
    let mut config =
        Config::new("sqlite::memory:", "test-secret-key-for-testing-only-32chars").unwrap();
    config.argon2_memory_kib = 1024;
    config.argon2_iterations = 1;

    let db = Arc::new(Database::connect(&config).await.unwrap());
    create_router(AppState::from_config(db, config).unwrap())
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

async fn register(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({ "email": email, "password": "Passw0rd!", "fullName": "Manager" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let token: TokenResponse = serde_json::from_value(body).unwrap();
    assert_eq!(token.token_type, "Bearer");
    token.token
}

async fn create(app: &Router, token: &str, email: &str, full_name: &str) -> EmployeeResponse {
    let (status, body) = send(
        app,
        Method::POST,
        "/employees",
        Some(token),
        Some(json!({ "email": email, "password": "Passw0rd1!", "fullName": full_name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_value(body).unwrap()
}

// =============================================================================
// Health & Auth
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_register_and_login() {
    let app = app().await;
    register(&app, "a@x.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": "a@x.com", "password": "Passw0rd!" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["expiresIn"], 86400);
    assert!(body["token"].as_str().is_some());
}

#[tokio::test]
async fn test_login_bad_password_is_bad_request() {
    let app = app().await;
    register(&app, "a@x.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": "a@x.com", "password": "Wrong1234" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_register_duplicate_and_weak_password() {
    let app = app().await;
    register(&app, "dup@x.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({ "email": "dup@x.com", "password": "Passw0rd!", "fullName": "Again" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Email already exists");

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({ "email": "new@x.com", "password": "password1", "fullName": "Weak" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "Password must contain at least one uppercase letter"
    );
}

// =============================================================================
// Employees
// =============================================================================

#[tokio::test]
async fn test_employees_require_token() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/employees/mine", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let (status, _) = send(&app, Method::GET, "/employees/mine", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_employee_lifecycle() {
    let app = app().await;
    let token = register(&app, "a@x.com").await;

    let created = create(&app, &token, "e1@x.com", "Jane Doe").await;
    assert_eq!(created.full_name, "Jane Doe");

    let uri = format!("/employees/{}", created.id);
    let (status, body) = send(&app, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "e1@x.com");
    assert!(body.get("passwordHash").is_none());

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({ "email": "e1@x.com", "fullName": "Jane Roe" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(body["fullName"], "Jane Roe");

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Employee not found");
}

#[tokio::test]
async fn test_create_reports_first_failing_rule() {
    let app = app().await;
    let token = register(&app, "a@x.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/employees",
        Some(&token),
        Some(json!({ "email": "", "password": "", "fullName": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Email is required");
}

#[tokio::test]
async fn test_other_manager_cannot_read_or_find() {
    let app = app().await;
    let a = register(&app, "a@x.com").await;
    let b = register(&app, "b@x.com").await;

    let e1 = create(&app, &a, "e1@x.com", "Jane Doe").await;

    let uri = format!("/employees/{}", e1.id);
    let (status, body) = send(&app, Method::GET, &uri, Some(&b), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "Unauthorized access");

    let (status, body) = send(&app, Method::GET, "/employees/search?name=Jane", Some(&a), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = send(&app, Method::GET, "/employees/search?name=Jane", Some(&b), None).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_search_lists_everything() {
    let app = app().await;
    let token = register(&app, "a@x.com").await;
    create(&app, &token, "e1@x.com", "Jane Doe").await;
    create(&app, &token, "e2@x.com", "John Smith").await;

    let (status, body) = send(&app, Method::GET, "/employees/search?name=", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, mine) = send(&app, Method::GET, "/employees/mine", Some(&token), None).await;
    assert_eq!(mine, body);
}

#[tokio::test]
async fn test_overlong_name_is_bad_request() {
    let app = app().await;
    let token = register(&app, "a@x.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/employees",
        Some(&token),
        Some(json!({ "email": "e1@x.com", "password": "Passw0rd1!", "fullName": "N".repeat(101) })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Full name must not exceed 100 characters");
}
