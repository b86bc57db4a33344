//! Shop Ledger - multi-shop cash bookkeeping and performance reporting.
//!
//! Staff record daily cash and till movements per shop; managers read
//! per-shop totals, margins and monthly trends against a sales target.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Authentication**: API key with SHA-256 hashing
//! - **Reporting**: pure aggregation in [`performance`], fed through the [`ledger::Ledger`] trait

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod ledger;
pub mod middleware;
pub mod models;
pub mod performance;
pub mod services;

use std::sync::Arc;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::{db::DbPool, performance::ReportSettings};

/// State shared with every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub settings: Arc<ReportSettings>,
}

impl AppState {
    pub fn new(pool: DbPool, settings: ReportSettings) -> Self {
        Self {
            pool,
            settings: Arc::new(settings),
        }
    }
}

/// Build the HTTP router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let authenticated_routes = Router::new()
        // Shops
        .route(
            "/api/v1/shops",
            get(handlers::shops::list_shops).post(handlers::shops::create_shop),
        )
        // Transaction records
        .route(
            "/api/v1/records",
            get(handlers::records::list_records).post(handlers::records::create_record),
        )
        .route(
            "/api/v1/records/{id}",
            get(handlers::records::get_record)
                .put(handlers::records::update_record)
                .delete(handlers::records::delete_record),
        )
        // Reporting
        .route(
            "/api/v1/performance",
            get(handlers::performance::get_performance),
        )
        // User management
        .route("/api/v1/users", post(handlers::users::create_user))
        .route("/api/v1/users/{id}/shop", put(handlers::users::assign_shop))
        // Apply authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        // Public routes (no authentication required)
        .route("/health", get(handlers::health::health_check))
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
