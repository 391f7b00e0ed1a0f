use std::time::{Duration, SystemTime, UNIX_EPOCH};

use argon2::password_hash::{
    rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier,
    SaltString,
};
use argon2::Argon2;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

/// HS256 signing material plus token lifetime, shared through [`AppState`].
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

impl AuthKeys {
    pub fn new(secret: &[u8], token_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            token_ttl,
        }
    }

    pub fn issue(&self, user_id: i64, username: &str) -> Result<String, AppError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| AppError::Internal("System clock is before UNIX_EPOCH".into()))?;
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now.as_secs() as usize,
            exp: (now + self.token_ttl).as_secs() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {e}")))
    }

    /// Validates the token signature and expiry and returns the user id
    /// carried in the `sub` claim.
    pub fn verify(&self, token: &str) -> Result<i64, AppError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| AppError::Unauthorized)?;
        data.claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::Unauthorized)
    }
}

pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

pub fn verify_password(plain: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Stored password hash is invalid: {e}")))?;
    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(e) => Err(AppError::Internal(format!("Password verification failed: {e}"))),
    }
}

/// Extractor for the authenticated user id, taken from the `Authorization:
/// Bearer <token>` header. Handlers that include it reject unauthenticated
/// requests with 401 before any business logic runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;
        let user_id = state.auth.verify(token)?;
        Ok(AuthUser(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> AuthKeys {
        AuthKeys::new(b"test-secret", Duration::from_secs(3600))
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let keys = test_keys();
        let token = keys.issue(42, "alice").unwrap();
        assert_eq!(keys.verify(&token).unwrap(), 42);
    }

    #[test]
    fn test_verify_rejects_garbage_token() {
        let keys = test_keys();
        assert!(matches!(
            keys.verify("not-a-jwt"),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = test_keys().issue(7, "bob").unwrap();
        let other = AuthKeys::new(b"different-secret", Duration::from_secs(3600));
        assert!(matches!(other.verify(&token), Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }
}
