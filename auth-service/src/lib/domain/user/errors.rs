use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Failures reported by a user store.
///
/// Uniqueness violations are a distinct variant so the service can classify
/// them without inspecting driver messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Email is already taken")]
    EmailTaken,

    #[error("Database error: {0}")]
    Database(String),
}

/// Closed set of domain failures for every user and authentication operation.
///
/// The HTTP boundary maps each variant to exactly one status and code.
/// `Unexpected` carries internal detail for logs; it is never shown to clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("user not found")]
    UserNotFound,

    #[error("email already exists")]
    EmailAlreadyExists,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("name, email and password are required")]
    ParametersMissing,

    #[error("password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("failed to hash password")]
    HashingFailure,

    #[error("JWT secret is not configured")]
    SecretMissing,

    #[error("invalid authentication token")]
    InvalidToken,

    #[error("invalid request body")]
    InvalidRequestBody,

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl From<RepositoryError> for UserError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::EmailTaken => UserError::EmailAlreadyExists,
            RepositoryError::Database(msg) => UserError::Unexpected(msg),
        }
    }
}

impl From<auth::PasswordError> for UserError {
    fn from(_: auth::PasswordError) -> Self {
        UserError::HashingFailure
    }
}

impl From<auth::JwtError> for UserError {
    fn from(err: auth::JwtError) -> Self {
        match err {
            auth::JwtError::SecretMissing => UserError::SecretMissing,
            auth::JwtError::TokenExpired | auth::JwtError::InvalidToken(_) => {
                UserError::InvalidToken
            }
            auth::JwtError::EncodingFailed(msg) => UserError::Unexpected(msg),
        }
    }
}
