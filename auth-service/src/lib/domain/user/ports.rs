use async_trait::async_trait;
use auth::Claims;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::RepositoryError;
use crate::user::errors::UserError;

/// Port for authentication service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Raw name, email and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `ParametersMissing` - Name, email or password is empty
    /// * `PasswordTooShort` - Password shorter than 8 bytes
    /// * `HashingFailure` - Password hashing failed
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Unexpected` - Store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Exchange credentials for an access token.
    ///
    /// # Arguments
    /// * `email` - Account email
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `HashingFailure` - Stored hash is malformed
    /// * `SecretMissing` - Signing secret is not configured
    /// * `Unexpected` - Store operation failed
    async fn login(&self, email: &str, password: &str) -> Result<String, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `UserNotFound` - User does not exist
    /// * `Unexpected` - Store operation failed
    async fn get_profile(&self, id: &UserId) -> Result<User, UserError>;

    /// Verify an access token and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature, algorithm, structure or expiry check failed
    /// * `SecretMissing` - Signing secret is not configured
    async fn validate_token(&self, token: &str) -> Result<Claims, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailTaken` - Email is already registered
    /// * `Database` - Database operation failed
    async fn create(&self, user: User) -> Result<User, RepositoryError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}
