//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::validation::{email_rule, full_name_rule, password_rule};
use crate::errors::AppResult;
use crate::services::TokenResponse;

/// Manager registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Manager email address
    #[validate(custom(function = "email_rule"))]
    #[schema(example = "alice@example.com")]
    #[serde(default)]
    pub email: String,
    /// Password: 8+ characters with an uppercase letter and a digit
    #[validate(custom(function = "password_rule"))]
    #[schema(example = "Passw0rd!", min_length = 8)]
    #[serde(default)]
    pub password: String,
    /// Manager display name
    #[validate(custom(function = "full_name_rule"))]
    #[schema(example = "Alice Smith", min_length = 2)]
    #[serde(default)]
    pub full_name: String,
}

/// Manager login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Manager email address
    #[validate(custom(function = "email_rule"))]
    #[schema(example = "alice@example.com")]
    #[serde(default)]
    pub email: String,
    /// Manager password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "Passw0rd!")]
    #[serde(default)]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new manager and get a JWT token
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Manager registered", body = TokenResponse),
        (status = 400, description = "Validation error or email already exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .register(payload.email, payload.password, payload.full_name)
        .await?;

    Ok(Json(token))
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error or invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MSG_PASSWORD_REQUIRED;

    #[test]
    fn test_register_request_rules() {
        let request: RegisterRequest = serde_json::from_value(serde_json::json!({
            "email": "alice@example.com",
            "password": "Passw0rd!",
            "fullName": "Alice"
        }))
        .unwrap();
        assert!(request.validate().is_ok());

        let weak = RegisterRequest {
            password: "password".to_string(),
            ..request
        };
        assert!(weak.validate().is_err());
    }

    #[test]
    fn test_login_requires_password() {
        let request = LoginRequest {
            email: "alice@example.com".to_string(),
            password: String::new(),
        };
        let errors = request.validate().unwrap_err();
        let message = errors.field_errors()["password"][0].message.clone().unwrap();
        assert_eq!(message, MSG_PASSWORD_REQUIRED);
    }
}
