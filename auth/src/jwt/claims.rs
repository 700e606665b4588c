use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Lifetime of every issued access token.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Access token claims.
///
/// Serialized with the registered JWT names (`sub`, `exp`, `iat`) plus a
/// private `email` claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    #[serde(rename = "sub")]
    pub subject: String,

    /// Email of the subject at issue time
    pub email: String,

    /// Expiration time (Unix timestamp)
    #[serde(rename = "exp")]
    pub expires_at: i64,

    /// Issued at (Unix timestamp)
    #[serde(rename = "iat")]
    pub issued_at: i64,
}

impl Claims {
    /// Create claims for user authentication expiring after [`TOKEN_TTL_HOURS`].
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `email` - User email address
    pub fn for_user(user_id: impl ToString, email: impl Into<String>) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(TOKEN_TTL_HOURS);

        Self {
            subject: user_id.to_string(),
            email: email.into(),
            expires_at: expiration.timestamp(),
            issued_at: now.timestamp(),
        }
    }
}
