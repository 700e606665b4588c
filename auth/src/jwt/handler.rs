use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// JWT token handler for issuing and verifying access tokens.
///
/// Pinned to HS256 (HMAC with SHA-256): tokens whose header names any other
/// algorithm, `none` included, are rejected before the signature is checked.
pub struct JwtHandler {
    keys: Option<SigningKeys>,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm. An empty secret
    /// is accepted here; every encode and decode then fails with
    /// `SecretMissing`.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        let keys = (!secret.is_empty()).then(|| SigningKeys {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        });

        Self {
            keys,
            algorithm: Algorithm::HS256,
        }
    }

    fn keys(&self) -> Result<&SigningKeys, JwtError> {
        self.keys.as_ref().ok_or(JwtError::SecretMissing)
    }

    /// Issue a 24-hour access token for a user.
    ///
    /// # Errors
    /// * `SecretMissing` - Handler was built with an empty secret
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, user_id: impl ToString, email: &str) -> Result<String, JwtError> {
        self.encode(&Claims::for_user(user_id, email))
    }

    /// Encode claims into a JWT token.
    ///
    /// # Errors
    /// * `SecretMissing` - Handler was built with an empty secret
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let keys = self.keys()?;
        let header = Header::new(self.algorithm);

        encode(&header, claims, &keys.encoding)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// # Arguments
    /// * `token` - JWT token string to decode
    ///
    /// # Returns
    /// Decoded claims, unmodified
    ///
    /// # Errors
    /// * `SecretMissing` - Handler was built with an empty secret
    /// * `TokenExpired` - Current time is past the `exp` claim
    /// * `InvalidToken` - Signature, algorithm, structure or claims are invalid
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let keys = self.keys()?;

        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<Claims>(token, &keys.decoding, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::InvalidToken(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    // {"alg":"none","typ":"JWT"} with a well-formed payload and no signature.
    const UNSIGNED_TOKEN: &str = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.eyJzdWIiOiI4YTZlMDgwNC0yYmQwLTQ2NzItYjc5ZC1kOTcwMjdmOTA3MWEiLCJlbWFpbCI6ImFuYUB4LmNvbSIsImV4cCI6NDEwMjQ0NDgwMCwiaWF0IjoxNzAwMDAwMDAwfQ.";

    #[test]
    fn test_issue_and_decode() {
        let handler = JwtHandler::new(SECRET);

        let token = handler
            .issue("user123", "ana@x.com")
            .expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let claims = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(claims.subject, "user123");
        assert_eq!(claims.email, "ana@x.com");
        assert!(claims.expires_at > Utc::now().timestamp());
    }

    #[test]
    fn test_decode_returns_claims_unmodified() {
        let handler = JwtHandler::new(SECRET);
        let claims = Claims::for_user("user123", "ana@x.com");

        let token = handler.encode(&claims).unwrap();
        assert_eq!(handler.decode(&token).unwrap(), claims);
    }

    #[test]
    fn test_decode_invalid_token() {
        let handler = JwtHandler::new(SECRET);

        let result = handler.decode("invalid.token.here");
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1.issue("user123", "ana@x.com").unwrap();

        let result = handler2.decode(&token);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(SECRET);
        let now = Utc::now().timestamp();
        let claims = Claims {
            subject: "user123".to_string(),
            email: "ana@x.com".to_string(),
            expires_at: now - 10,
            issued_at: now - 3600,
        };

        let token = handler.encode(&claims).unwrap();
        assert_eq!(handler.decode(&token), Err(JwtError::TokenExpired));
    }

    #[test]
    fn test_decode_tampered_payload() {
        let handler = JwtHandler::new(SECRET);
        let token = handler.issue("user123", "ana@x.com").unwrap();
        let forged = handler.issue("attacker", "eve@x.com").unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        let spliced = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);

        assert!(matches!(
            handler.decode(&spliced),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unsigned_token() {
        let handler = JwtHandler::new(SECRET);

        let result = handler.decode(UNSIGNED_TOKEN);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_rejects_other_hmac_algorithm() {
        let handler = JwtHandler::new(SECRET);
        let claims = Claims::for_user("user123", "ana@x.com");

        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let result = handler.decode(&token);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_rejects_asymmetric_algorithm_header() {
        let handler = JwtHandler::new(SECRET);
        let token = handler.issue("user123", "ana@x.com").unwrap();

        // Swap the header for {"alg":"RS256","typ":"JWT"}, keeping the HMAC signature.
        let parts: Vec<&str> = token.split('.').collect();
        let confused = format!("eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.{}.{}", parts[1], parts[2]);

        assert!(matches!(
            handler.decode(&confused),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_empty_secret() {
        let handler = JwtHandler::new(b"");

        assert_eq!(
            handler.issue("user123", "ana@x.com"),
            Err(JwtError::SecretMissing)
        );
        assert_eq!(handler.decode("any-token"), Err(JwtError::SecretMissing));
    }
}
