use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;
use chrono::Utc;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for authentication operations.
///
/// Stateless orchestration over a user store and the authenticator; both are
/// injected at construction.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token handling
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    fn validate_registration(command: &RegisterUserCommand) -> Result<(), UserError> {
        if command.name.is_empty() || command.email.is_empty() || command.password.is_empty() {
            return Err(UserError::ParametersMissing);
        }

        if command.password.len() < RegisterUserCommand::MIN_PASSWORD_BYTES {
            return Err(UserError::PasswordTooShort);
        }

        Ok(())
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        Self::validate_registration(&command)?;

        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed");
                UserError::HashingFailure
            })?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, UserError> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            self.authenticator.verify_decoy(password);
            tracing::info!("Login rejected: unknown account");
            return Err(UserError::InvalidCredentials);
        };

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, user.id, &user.email)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::info!(user_id = %user.id, "Login rejected: wrong password");
                    UserError::InvalidCredentials
                }
                AuthenticationError::PasswordError(err) => {
                    tracing::error!(
                        user_id = %user.id,
                        error = %err,
                        "Stored password hash is unusable"
                    );
                    UserError::from(err)
                }
                AuthenticationError::JwtError(err) => {
                    tracing::error!(
                        user_id = %user.id,
                        error = %err,
                        "Token generation failed"
                    );
                    UserError::from(err)
                }
            })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(result.access_token)
    }

    async fn get_profile(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::UserNotFound)
    }

    async fn validate_token(&self, token: &str) -> Result<Claims, UserError> {
        self.authenticator.validate_token(token).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            UserError::from(e)
        })
    }
}
