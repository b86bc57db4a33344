//! Transaction record HTTP handlers.
//!
//! This module implements the record endpoints:
//! - POST /api/v1/records - Record a day's movements
//! - GET /api/v1/records - List records (filter by shop and date range)
//! - GET /api/v1/records/{id} - Get a record
//! - PUT /api/v1/records/{id} - Partially update a record
//! - DELETE /api/v1/records/{id} - Delete a record
//!
//! Staff may touch any shop's records; other users only their own shop's.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    AppState,
    error::AppError,
    ledger::{Ledger, PgLedger},
    middleware::auth::AuthContext,
    models::record::{CreateRecordRequest, RecordFilter, TransactionRecord, UpdateRecordRequest},
    performance::CallerScope,
    services::{record_service, report_service},
};

async fn caller_scope(state: &AppState, auth: &AuthContext) -> Result<CallerScope, AppError> {
    let ledger = PgLedger::new(state.pool.clone());
    report_service::resolve_scope(&ledger, auth).await
}

/// Create a record.
///
/// # Request Body
///
/// ```json
/// {
///   "shop_id": "550e8400-...",
///   "date": "2025-03-14",
///   "cash_in": 12500.50,
///   "cash_out": 800,
///   "till_in": 4300,
///   "till_out": 0
/// }
/// ```
///
/// # Response
///
/// - **201 Created**: the stored record
/// - **400**: negative amount
/// - **403**: shop outside the caller's scope
/// - **404**: shop does not exist
pub async fn create_record(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateRecordRequest>,
) -> Result<impl IntoResponse, AppError> {
    let scope = caller_scope(&state, &auth).await?;
    let record = record_service::create_record(&state.pool, &scope, request).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// List records, newest first.
///
/// Query: `?shop_id=<uuid>&since=2025-01-01&until=2025-01-31`
pub async fn list_records(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(filter): Query<RecordFilter>,
) -> Result<Json<Vec<TransactionRecord>>, AppError> {
    let ledger = PgLedger::new(state.pool.clone());
    let scope = report_service::resolve_scope(&ledger, &auth).await?;
    let filter = record_service::scoped_filter(&scope, filter)?;

    let records = ledger.fetch_records(&filter).await?;

    Ok(Json(records))
}

/// Get a record by ID. Returns 404 for records outside the caller's scope.
pub async fn get_record(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(record_id): Path<Uuid>,
) -> Result<Json<TransactionRecord>, AppError> {
    let scope = caller_scope(&state, &auth).await?;
    let record = record_service::get_record(&state.pool, &scope, record_id).await?;

    Ok(Json(record))
}

/// Update a record. Fields left out of the body keep their value.
pub async fn update_record(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(record_id): Path<Uuid>,
    Json(update): Json<UpdateRecordRequest>,
) -> Result<Json<TransactionRecord>, AppError> {
    let scope = caller_scope(&state, &auth).await?;
    let record = record_service::update_record(&state.pool, &scope, record_id, update).await?;

    Ok(Json(record))
}

/// Delete a record.
///
/// # Response
///
/// Returns 204 No Content on success.
pub async fn delete_record(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(record_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let scope = caller_scope(&state, &auth).await?;
    record_service::delete_record(&state.pool, &scope, record_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
