use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use subtle::ConstantTimeEq;

use super::handlers::ApiError;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Header carrying the pre-shared key of internal callers.
pub const INTERNAL_API_KEY_HEADER: &str = "x-internal-api-key";

/// Extension type to store the authenticated caller in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Middleware that admits only callers presenting the configured internal API key.
///
/// An empty configured key admits nobody.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let expected = state.internal_api_key.as_bytes();

    let is_valid = req
        .headers()
        .get(INTERNAL_API_KEY_HEADER)
        .map(|provided| {
            !expected.is_empty() && bool::from(provided.as_bytes().ct_eq(expected))
        })
        .unwrap_or(false);

    if !is_valid {
        tracing::warn!(uri = %req.uri(), "Rejected request without a valid internal API key");
        return Err(ApiError::forbidden("Forbidden"));
    }

    Ok(next.run(req).await)
}

/// Middleware that validates bearer tokens and adds the caller to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?.to_owned();

    let claims = state
        .user_service
        .validate_token(&token)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "JWT validation failed");
            ApiError::unauthorized("Invalid or expired token")
        })?;

    let user_id = UserId::from_string(&claims.subject).map_err(|e| {
        tracing::error!(error = %e, "Failed to parse user ID from token");
        ApiError::unauthorized("Invalid token format")
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header"))?;

    auth_str
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            ApiError::unauthorized("Invalid Authorization header format. Expected: Bearer <token>")
        })
}
