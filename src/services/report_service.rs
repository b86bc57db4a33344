//! Report service - resolves who is asking, fetches their records and
//! runs the aggregation.

use crate::{
    error::AppError,
    ledger::Ledger,
    middleware::auth::AuthContext,
    models::{record::RecordFilter, shop::Shop},
    performance::{
        CallerScope, ColorSource, PerformanceReport, ReportSettings, ShopColors, build_report,
    },
};

/// Decide which shops the caller may see.
///
/// # Errors
///
/// - `Forbidden`: not staff and no shop assigned. This is an access failure,
///   not an empty report.
pub async fn resolve_scope(
    ledger: &dyn Ledger,
    auth: &AuthContext,
) -> Result<CallerScope, AppError> {
    if auth.is_staff {
        return Ok(CallerScope::AllShops);
    }

    match ledger.fetch_profile(auth.user_id).await? {
        Some(shop) => Ok(CallerScope::SingleShop(shop)),
        None => {
            tracing::warn!(user = %auth.username, "no shop assigned to user");
            Err(AppError::Forbidden(
                "No shop is assigned to this user".to_string(),
            ))
        }
    }
}

/// The shops visible in `scope`.
pub async fn shops_in_scope(
    ledger: &dyn Ledger,
    scope: &CallerScope,
) -> Result<Vec<Shop>, AppError> {
    match scope {
        CallerScope::AllShops => ledger.fetch_shops().await,
        CallerScope::SingleShop(shop) => Ok(vec![shop.clone()]),
    }
}

/// Build the performance report for `scope` over the optional date range.
///
/// # Process
///
/// 1. Determine the visible shops
/// 2. Fetch the records once (one shop's or everyone's)
/// 3. Aggregate with the caller-provided color source
pub async fn generate_report<C: ColorSource>(
    ledger: &dyn Ledger,
    scope: &CallerScope,
    range: RecordFilter,
    settings: &ReportSettings,
    colors: &mut ShopColors<C>,
) -> Result<PerformanceReport, AppError> {
    range.validate().map_err(AppError::InvalidRequest)?;

    let shops = shops_in_scope(ledger, scope).await?;
    let filter = RecordFilter {
        shop_id: match scope {
            CallerScope::AllShops => None,
            CallerScope::SingleShop(shop) => Some(shop.id),
        },
        ..range
    };
    let records = ledger.fetch_records(&filter).await?;

    let report = build_report(scope, &shops, records, settings, colors);
    tracing::info!(
        shops = report.shop_summaries.len(),
        alerts = report.alerts.len(),
        all_shops = matches!(scope, CallerScope::AllShops),
        "performance report generated"
    );

    Ok(report)
}
