use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Service-to-service token check.
///
/// Any verification failure yields the same `{"valid": false}` body; the
/// reason is only logged.
pub async fn validate_token(
    State(state): State<AppState>,
    body: Result<Json<ValidateTokenRequest>, JsonRejection>,
) -> Result<ApiSuccess<ValidateTokenResponseData>, ApiError> {
    let Json(body) = body?;

    let token = body.token.unwrap_or_default();

    match state.user_service.validate_token(&token).await {
        Ok(claims) => Ok(ApiSuccess::new(
            StatusCode::OK,
            ValidateTokenResponseData {
                valid: true,
                user_id: Some(claims.subject),
                email: Some(claims.email),
            },
        )),
        Err(e) => {
            tracing::info!(error = %e, "Token validation failed");
            Ok(ApiSuccess::new(
                StatusCode::UNAUTHORIZED,
                ValidateTokenResponseData::invalid(),
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidateTokenRequest {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateTokenResponseData {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ValidateTokenResponseData {
    fn invalid() -> Self {
        Self {
            valid: false,
            user_id: None,
            email: None,
        }
    }
}
