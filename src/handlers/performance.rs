//! Shop performance report handler.
//!
//! - GET /api/v1/performance - Summaries, monthly chart and alerts

use axum::{
    Extension, Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    AppState,
    error::AppError,
    ledger::PgLedger,
    middleware::auth::AuthContext,
    models::record::RecordFilter,
    performance::{PerformanceReport, RandomColors, ShopColors},
    services::report_service,
};

/// Optional inclusive date range: `?since=2025-01-01&until=2025-06-30`
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

/// Build the caller's performance report.
///
/// # Visibility
///
/// - Staff: every shop, alerts name the shop
/// - Users with an assigned shop: that shop only
/// - Anyone else: 403 Forbidden
///
/// # Response (200)
///
/// ```json
/// {
///   "target_amount": 30000,
///   "currency_symbol": "KSH",
///   "shop_summaries": [...],
///   "monthly_chart": { "labels": ["Jan 2025"], "series": [...] },
///   "alerts": ["Cyber: Sales are below the target of KSH 30000."]
/// }
/// ```
pub async fn get_performance(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<PerformanceReport>, AppError> {
    let ledger = PgLedger::new(state.pool.clone());
    let scope = report_service::resolve_scope(&ledger, &auth).await?;

    // Fresh generator per report; colors only need to agree within one response
    let mut colors = ShopColors::new(RandomColors::from_os_rng());
    let range = RecordFilter {
        shop_id: None,
        since: query.since,
        until: query.until,
    };

    let report =
        report_service::generate_report(&ledger, &scope, range, &state.settings, &mut colors)
            .await?;

    Ok(Json(report))
}
