//! Shop HTTP handlers.
//!
//! - GET /api/v1/shops - List shops visible to the caller
//! - POST /api/v1/shops - Create a shop (staff only)

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    AppState,
    error::AppError,
    ledger::PgLedger,
    middleware::auth::AuthContext,
    models::shop::{CreateShopRequest, Shop},
    services::report_service,
};

/// List shops.
///
/// Staff get every shop ordered by name; other users get their own shop.
/// Users without a shop receive 403.
pub async fn list_shops(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<Shop>>, AppError> {
    let ledger = PgLedger::new(state.pool.clone());
    let scope = report_service::resolve_scope(&ledger, &auth).await?;
    let shops = report_service::shops_in_scope(&ledger, &scope).await?;

    Ok(Json(shops))
}

/// Create a shop.
///
/// # Request Body
///
/// ```json
/// { "name": "Milk Shop", "location": "Main Street" }
/// ```
///
/// # Response
///
/// - **201 Created**: the new shop
/// - **400**: blank name
/// - **403**: caller is not staff
/// - **409**: a shop with this name exists
pub async fn create_shop(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateShopRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth.require_staff()?;
    let name = request.validate().map_err(AppError::InvalidRequest)?;

    let shop = sqlx::query_as::<_, Shop>(
        "INSERT INTO shops (name, location) VALUES ($1, $2) RETURNING id, name, location",
    )
    .bind(&name)
    .bind(request.location.trim())
    .fetch_one(&state.pool)
    .await
    .map_err(|e| AppError::conflict_on_unique(e, "A shop with this name already exists"))?;

    tracing::info!(shop = %shop.name, "shop created");

    Ok((StatusCode::CREATED, Json(shop)))
}
