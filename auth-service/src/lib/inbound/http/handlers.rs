use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::user::errors::UserError;

pub mod get_profile;
pub mod login;
pub mod register;
pub mod validate_token;

const GENERIC_ERROR_MESSAGE: &str = "an unexpected error occurred";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Transport-level failure: a status, a machine-readable code and a message
/// that is safe to show to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError,
    BadRequest(&'static str, String),
    Unauthorized(&'static str, String),
    Forbidden(&'static str, String),
    NotFound(&'static str, String),
    Conflict(&'static str, String),
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized("UNAUTHORIZED", message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden("FORBIDDEN", message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                GENERIC_ERROR_MESSAGE.to_string(),
            ),
            ApiError::BadRequest(code, msg) => (StatusCode::BAD_REQUEST, code, msg),
            ApiError::Unauthorized(code, msg) => (StatusCode::UNAUTHORIZED, code, msg),
            ApiError::Forbidden(code, msg) => (StatusCode::FORBIDDEN, code, msg),
            ApiError::NotFound(code, msg) => (StatusCode::NOT_FOUND, code, msg),
            ApiError::Conflict(code, msg) => (StatusCode::CONFLICT, code, msg),
        };

        (status, Json(ApiErrorData { code, message })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err {
            UserError::EmailAlreadyExists => ApiError::Conflict("EMAIL_ALREADY_EXISTS", message),
            UserError::InvalidCredentials => {
                ApiError::Unauthorized("INVALID_CREDENTIALS", message)
            }
            UserError::UserNotFound => ApiError::NotFound("USER_NOT_FOUND", message),
            UserError::ParametersMissing => ApiError::BadRequest("MISSING_PARAMETERS", message),
            UserError::PasswordTooShort => ApiError::BadRequest("INVALID_INPUT", message),
            UserError::InvalidRequestBody => {
                ApiError::BadRequest("INVALID_REQUEST_BODY", message)
            }
            UserError::InvalidToken => ApiError::Unauthorized("INVALID_TOKEN", message),
            UserError::HashingFailure | UserError::SecretMissing | UserError::Unexpected(_) => {
                tracing::error!(error = %err, "Request failed with an internal error");
                ApiError::InternalServerError
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        ApiError::from(UserError::InvalidRequestBody)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub code: &'static str,
    pub message: String,
}
