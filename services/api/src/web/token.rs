//! services/api/src/web/token.rs
//!
//! Stateless session tokens. A token binds an email address; validity is
//! purely a function of the HS256 signature and the expiry claim, so there
//! is nothing to store or revoke server-side.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims embedded in session tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the account email.
    pub sub: String,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiry (unix timestamp).
    pub exp: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    Sign(jsonwebtoken::errors::Error),
    #[error("Invalid or expired token")]
    Invalid,
}

/// Issues and verifies the signed credentials used on `/auth/*` routes.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }

    /// Signs a credential binding `email`.
    pub fn issue(&self, email: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::Sign)
    }

    /// Verifies a presented token and returns the bound email.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims.sub)
            .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_to_same_email() {
        let tokens = TokenService::new("test-secret", 30);
        let token = tokens.issue("a@b.c").unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), "a@b.c");
    }

    #[test]
    fn garbage_token_is_rejected() {
        let tokens = TokenService::new("test-secret", 30);
        assert!(tokens.verify("not-a-token").is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = TokenService::new("secret-one", 30);
        let verifier = TokenService::new("secret-two", 30);
        let token = issuer.issue("a@b.c").unwrap();
        assert!(verifier.verify(&token).is_err());
    }
}
