//! User management HTTP handlers (staff only).
//!
//! - POST /api/v1/users - Create a user and issue their API key
//! - PUT /api/v1/users/{id}/shop - Assign or clear the user's shop

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    AppState,
    error::AppError,
    middleware::auth::AuthContext,
    models::user::{AssignShopRequest, CreateUserRequest, UserResponse},
    services::user_service,
};

/// Create a user.
///
/// # Request Body
///
/// ```json
/// { "username": "jane", "is_staff": false, "shop_id": "550e8400-..." }
/// ```
///
/// # Response
///
/// Returns 201 Created. The `api_key` is only returned once.
///
/// ```json
/// {
///   "id": "660e8400-...",
///   "username": "jane",
///   "is_staff": false,
///   "shop_id": "550e8400-...",
///   "created_at": "2025-01-15T10:30:00Z",
///   "api_key": "a1b2c3d4e5f6..."
/// }
/// ```
pub async fn create_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth.require_staff()?;
    let user = user_service::create_user(&state.pool, request).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Assign a shop to a user's profile.
///
/// ```json
/// { "shop_id": "550e8400-..." }
/// ```
///
/// Send `{ "shop_id": null }` to remove the assignment, after which the
/// user is refused reports until staff assign a shop again.
pub async fn assign_shop(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<AssignShopRequest>,
) -> Result<Json<UserResponse>, AppError> {
    auth.require_staff()?;
    let user = user_service::assign_shop(&state.pool, user_id, request.shop_id).await?;

    Ok(Json(user))
}
