//! Bearer token issuing and verification.
//!
//! Tokens are HS256 JWTs carrying the user id, signed with the configured secret and valid
//! for thirty days.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError, AppError};

/// Lifetime of an issued token.
pub const TOKEN_TTL_DAYS: i64 = 30;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: i32,
    iat: i64,
    exp: i64,
}

/// Signs and verifies bearer tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a token for `user_id` valid from now.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::InternalErr)` - Signing failed
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        self.issue_at(user_id, Utc::now().timestamp())
    }

    /// Issues a token as if it had been signed at `issued_at` (unix seconds).
    pub(crate) fn issue_at(&self, user_id: i32, issued_at: i64) -> Result<String, AppError> {
        let claims = Claims {
            id: user_id,
            iat: issued_at,
            exp: issued_at + Duration::days(TOKEN_TTL_DAYS).num_seconds(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| InternalError::TokenEncoding(e).into())
    }

    /// Verifies a token's signature and expiry and returns the user id it carries.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the token's user
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed token, or expired
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))?;

        Ok(data.claims.id)
    }
}
