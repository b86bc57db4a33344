//! Assembles the full performance report from a snapshot of records.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::{
    CallerScope, ReportSettings,
    alerts::alerts,
    colors::{ColorSource, ShopColors},
    series::{MonthlyChart, ShopSeries, align_and_merge},
    summary::{ShopSummary, summarize},
};
use crate::models::{record::TransactionRecord, shop::Shop};

/// A shop's summary as shown on its card, with the color its chart line uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopCard {
    #[serde(flatten)]
    pub summary: ShopSummary,
    pub color: String,
}

/// Response body of `GET /api/v1/performance`.
///
/// ```json
/// {
///   "target_amount": 30000,
///   "currency_symbol": "KSH",
///   "shop_summaries": [{ "shop_name": "Cyber", "cash_in": 50000, "color": "#1f77b4", ... }],
///   "monthly_chart": {
///     "labels": ["Dec 2024", "Jan 2025"],
///     "series": [{ "shop_name": "Cyber", "color": "#1f77b4", "values": [20000, 30000] }]
///   },
///   "alerts": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
    pub target_amount: Decimal,
    pub currency_symbol: String,
    pub shop_summaries: Vec<ShopCard>,
    pub monthly_chart: MonthlyChart,
    pub alerts: Vec<String>,
}

/// Build the report for `shops`, the shops visible in `scope`.
///
/// Records may arrive in any order and may include shops outside `shops`;
/// those are ignored. Shops without records still get a card and a
/// zero-filled chart series.
pub fn build_report<C: ColorSource>(
    scope: &CallerScope,
    shops: &[Shop],
    records: Vec<TransactionRecord>,
    settings: &ReportSettings,
    colors: &mut ShopColors<C>,
) -> PerformanceReport {
    let mut by_shop = group_by_shop(records);

    let mut summaries = Vec::with_capacity(shops.len());
    let mut series = Vec::with_capacity(shops.len());
    for shop in shops {
        let records = by_shop.remove(&shop.id).unwrap_or_default();
        summaries.push(summarize(shop, &records, settings.target_amount));
        series.push(ShopSeries::new(shop, &records));
    }

    let alerts = alerts(&summaries, scope, settings);
    let shop_summaries = summaries
        .into_iter()
        .map(|summary| ShopCard {
            color: colors.color_for(summary.shop_id),
            summary,
        })
        .collect();
    let monthly_chart = align_and_merge(&series, colors);

    PerformanceReport {
        target_amount: settings.target_amount,
        currency_symbol: settings.currency_symbol.clone(),
        shop_summaries,
        monthly_chart,
        alerts,
    }
}

fn group_by_shop(records: Vec<TransactionRecord>) -> HashMap<Uuid, Vec<TransactionRecord>> {
    let mut groups: HashMap<Uuid, Vec<TransactionRecord>> = HashMap::new();
    for record in records {
        groups.entry(record.shop_id).or_default().push(record);
    }
    groups
}
