//! Employee directory handlers.
//!
//! Every route sits behind the auth middleware and acts on behalf of
//! the `CurrentManager` it injects.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::{ApiJson, ValidatedJson};
use crate::api::middleware::CurrentManager;
use crate::api::AppState;
use crate::domain::validation::{email_rule, full_name_rule, optional_password_rule};
use crate::domain::{EmployeeChanges, EmployeeResponse, NewEmployee};
use crate::errors::AppResult;

/// Employee update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    /// New email address
    #[validate(custom(function = "email_rule"))]
    #[schema(example = "jane.doe@example.com")]
    #[serde(default)]
    pub email: String,
    /// New display name
    #[validate(custom(function = "full_name_rule"))]
    #[schema(example = "Jane Doe", min_length = 2)]
    #[serde(default)]
    pub full_name: String,
    /// New password; omit or leave empty to keep the current one
    #[validate(custom(function = "optional_password_rule"))]
    #[schema(example = "N3wPassword")]
    pub password: Option<String>,
}

impl From<UpdateEmployeeRequest> for EmployeeChanges {
    fn from(request: UpdateEmployeeRequest) -> Self {
        Self {
            email: request.email,
            full_name: request.full_name,
            password: request.password,
        }
    }
}

/// Search query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Substring of the full name; empty lists every employee
    pub name: Option<String>,
}

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_employee))
        .route("/mine", get(list_my_employees))
        .route("/search", get(search_employees))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// List the caller's employees
#[utoipa::path(
    get,
    path = "/employees/mine",
    tag = "Employees",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Employees owned by the caller", body = Vec<EmployeeResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_my_employees(
    Extension(manager): Extension<CurrentManager>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employee_service.list_by_manager(manager.id).await?;
    Ok(Json(employees))
}

/// Search the caller's employees by name
#[utoipa::path(
    get,
    path = "/employees/search",
    tag = "Employees",
    security(("bearer_auth" = [])),
    params(SearchParams),
    responses(
        (status = 200, description = "Matching employees", body = Vec<EmployeeResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn search_employees(
    Extension(manager): Extension<CurrentManager>,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = match params.name.as_deref() {
        None | Some("") => state.employee_service.list_by_manager(manager.id).await?,
        Some(name) => {
            state
                .employee_service
                .search_employees(name, manager.id)
                .await?
        }
    };

    Ok(Json(employees))
}

/// Create an employee owned by the caller
#[utoipa::path(
    post,
    path = "/employees",
    tag = "Employees",
    security(("bearer_auth" = [])),
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Validation error or email already exists"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Manager not found")
    )
)]
pub async fn create_employee(
    Extension(manager): Extension<CurrentManager>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewEmployee>,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    let employee = state
        .employee_service
        .create_employee(payload, manager.id)
        .await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Get one of the caller's employees
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "Employees",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee record", body = EmployeeResponse),
        (status = 401, description = "Unauthorized or owned by another manager"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    Extension(manager): Extension<CurrentManager>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employee_service.get_employee(id, manager.id).await?;
    Ok(Json(employee))
}

/// Update one of the caller's employees
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "Employees",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 204, description = "Employee updated"),
        (status = 400, description = "Validation error or email already exists"),
        (status = 401, description = "Unauthorized or owned by another manager"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn update_employee(
    Extension(manager): Extension<CurrentManager>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateEmployeeRequest>,
) -> AppResult<StatusCode> {
    state
        .employee_service
        .update_employee(id, payload.into(), manager.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete one of the caller's employees
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "Employees",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 401, description = "Unauthorized or owned by another manager"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    Extension(manager): Extension<CurrentManager>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state
        .employee_service
        .delete_employee(id, manager.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
