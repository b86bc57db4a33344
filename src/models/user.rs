//! User and profile models.
//!
//! Users authenticate with an API key. Only the SHA-256 hash of the key is
//! stored. Each user has one profile, which may point at the single shop the
//! user is allowed to see. Staff users see every shop.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table. The assigned shop lives in `user_profiles`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,

    /// SHA-256 hash of the API key (64 hex characters)
    pub api_key_hash: String,

    /// Staff users get the all-shops report and may manage shops and users
    pub is_staff: bool,

    /// Inactive users are rejected during authentication
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
}

/// Request body for creating a user.
///
/// ```json
/// { "username": "jane", "is_staff": false, "shop_id": "550e8400-..." }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,

    #[serde(default)]
    pub is_staff: bool,

    /// Shop assigned to the new user's profile
    pub shop_id: Option<Uuid>,
}

/// Request body for `PUT /api/v1/users/{id}/shop`. `null` clears the assignment.
#[derive(Debug, Deserialize)]
pub struct AssignShopRequest {
    pub shop_id: Option<Uuid>,
}

/// Response body for user endpoints.
///
/// The `api_key` field is ONLY present in the response to user creation.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub is_staff: bool,
    pub shop_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl UserResponse {
    pub fn new(user: User, shop_id: Option<Uuid>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            is_staff: user.is_staff,
            shop_id,
            created_at: user.created_at,
            api_key: None,
        }
    }

    /// Include the plaintext key (only for creation).
    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self
    }
}
