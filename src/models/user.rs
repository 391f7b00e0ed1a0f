use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub id: i64,
    pub username: String,
}

/// Response body for create endpoints that only hand back the new row id.
#[derive(Debug, Clone, Serialize)]
pub struct Created {
    pub id: i64,
}
