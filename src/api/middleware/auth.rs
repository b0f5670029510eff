//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::{BEARER_TOKEN_PREFIX, MSG_UNAUTHORIZED_ACCESS};
use crate::errors::AppError;

/// Authenticated manager extracted from JWT token
#[derive(Clone, Debug)]
pub struct CurrentManager {
    pub id: i32,
}

/// JWT authentication middleware.
///
/// Extracts and validates the JWT token from the Authorization header,
/// then injects the CurrentManager into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .ok_or_else(|| AppError::unauthorized(MSG_UNAUTHORIZED_ACCESS))?;

    let claims = state.credentials.verify_token(token)?;

    let current_manager = CurrentManager {
        id: claims.manager_id()?,
    };

    request.extensions_mut().insert(current_manager);

    Ok(next.run(request).await)
}
