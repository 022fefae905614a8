//! Admin authentication: argon2 password hashing plus stateless JWT bearer
//! tokens checked by a route-layer guard.

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use eyre::Result;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};
use tripsync_core::errors::TourError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub exp: usize,
}

/// Hashes a password with a fresh random salt, returning the PHC string.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

pub fn issue_admin_token(
    admin_id: Uuid,
    email: &str,
    secret: &str,
    ttl_seconds: i64,
) -> Result<String> {
    let claims = AdminClaims {
        sub: admin_id.to_string(),
        email: email.to_string(),
        role: "admin".to_string(),
        exp: (Utc::now() + Duration::seconds(ttl_seconds)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| eyre::eyre!("Token encoding failed: {}", e))?;

    Ok(token)
}

pub fn decode_admin_token(token: &str, secret: &str) -> Result<AdminClaims, TourError> {
    let data = decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| TourError::Authentication(format!("Invalid token: {e}")))?;

    Ok(data.claims)
}

/// Route-layer guard for the admin API. Expects `Authorization: Bearer <jwt>`.
pub async fn require_admin(
    State(state): State<Arc<ApiState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError(TourError::Authentication("Admin not authenticated".to_string())))?;

    decode_admin_token(token, &state.config.jwt_secret)?;

    Ok(next.run(request).await)
}
