//! API key authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the API key from the Authorization header
//! 2. Hash it and look up the active user owning that hash
//! 3. Inject the user's `AuthContext` into the request
//! 4. Reject unauthenticated requests with HTTP 401

use crate::{AppState, error::AppError, models::user::User};
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Authentication context attached to authenticated requests.
///
/// Handlers extract it with `Extension<AuthContext>`.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub username: String,

    /// Staff see every shop; everyone else is limited to their profile's shop
    pub is_staff: bool,
}

impl AuthContext {
    /// Reject callers without staff rights.
    pub fn require_staff(&self) -> Result<(), AppError> {
        if self.is_staff {
            Ok(())
        } else {
            tracing::warn!(user = %self.username, "staff-only operation refused");
            Err(AppError::Forbidden(
                "Only staff can perform this operation".to_string(),
            ))
        }
    }
}

/// SHA-256 of the key as 64 lowercase hex characters.
pub fn hash_api_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}

/// The `<key>` part of `Authorization: Bearer <key>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|key| !key.is_empty())
}

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: Bearer <key>` header from request
/// 2. Hash the `<key>` using SHA-256
/// 3. Query `users` for the hash where `is_active = true`
/// 4. If found: inject `AuthContext` into request, call next handler
/// 5. If not found: return 401 Unauthorized error
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = bearer_token(request.headers()).ok_or(AppError::InvalidApiKey)?;
    let key_hash = hash_api_key(api_key);

    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, api_key_hash, is_staff, is_active, created_at
         FROM users
         WHERE api_key_hash = $1 AND is_active = true",
    )
    .bind(&key_hash)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::InvalidApiKey)?;

    request.extensions_mut().insert(AuthContext {
        user_id: user.id,
        username: user.username,
        is_staff: user.is_staff,
    });

    Ok(next.run(request).await)
}
