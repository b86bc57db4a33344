//! Shop performance aggregation.
//!
//! Turns a point-in-time snapshot of transaction records into per-shop
//! summaries, a month-aligned chart series and below-target alerts. Nothing
//! here touches the database or shared state; callers fetch records first
//! and resolve who is asking before calling in.

pub mod alerts;
pub mod colors;
pub mod report;
pub mod series;
pub mod summary;

use rust_decimal::Decimal;

use crate::models::shop::Shop;

pub use alerts::alerts;
pub use colors::{ColorSource, RandomColors, ShopColors};
pub use report::{PerformanceReport, ShopCard, build_report};
pub use series::{
    ChartSeries, Month, MonthlyChart, MonthlySeries, ShopSeries, align_and_merge, monthly_series,
};
pub use summary::{ShopSummary, summarize};

/// Which shops a caller may see, decided once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallerScope {
    /// Staff: every shop
    AllShops,
    /// Regular user: the shop assigned in their profile
    SingleShop(Shop),
}

impl CallerScope {
    /// Whether records of `shop_id` are visible in this scope.
    pub fn covers(&self, shop_id: uuid::Uuid) -> bool {
        match self {
            CallerScope::AllShops => true,
            CallerScope::SingleShop(shop) => shop.id == shop_id,
        }
    }
}

/// Target and currency every summary and alert is computed against.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub target_amount: Decimal,
    pub currency_symbol: String,
}
