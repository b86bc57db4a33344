//! Monthly cash-in series and their alignment onto a shared month axis.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::colors::{ColorSource, ShopColors};
use crate::models::{record::TransactionRecord, shop::Shop};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month. Orders chronologically (year first), unlike its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

/// Renders as `"Jan 2024"`.
impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = MONTH_ABBREVIATIONS[(self.month as usize - 1) % 12];
        write!(f, "{} {}", name, self.year)
    }
}

/// Cash-in per month for one shop. Only months with records are present.
pub type MonthlySeries = BTreeMap<Month, Decimal>;

/// Sum `cash_in` per calendar month. Other flows are not charted.
pub fn monthly_series(records: &[TransactionRecord]) -> MonthlySeries {
    let mut series = MonthlySeries::new();
    for record in records {
        *series.entry(Month::of(record.date)).or_insert(Decimal::ZERO) += record.cash_in;
    }
    series
}

/// One shop's monthly series waiting to be aligned.
#[derive(Debug, Clone)]
pub struct ShopSeries {
    pub shop_id: Uuid,
    pub shop_name: String,
    pub months: MonthlySeries,
}

impl ShopSeries {
    pub fn new(shop: &Shop, records: &[TransactionRecord]) -> Self {
        Self {
            shop_id: shop.id,
            shop_name: shop.name.clone(),
            months: monthly_series(records),
        }
    }
}

/// Chart-ready data: one dense value list per shop, aligned to `labels`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyChart {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub shop_name: String,
    pub color: String,
    pub values: Vec<Decimal>,
}

/// Merge per-shop series onto the sorted union of their months.
///
/// Months a shop has no records for are filled with 0. Each shop's color
/// comes from `colors`, so it matches the color of the shop's summary card
/// when the same `ShopColors` is used for both.
pub fn align_and_merge<C: ColorSource>(
    series: &[ShopSeries],
    colors: &mut ShopColors<C>,
) -> MonthlyChart {
    let axis: BTreeSet<Month> = series
        .iter()
        .flat_map(|shop| shop.months.keys().copied())
        .collect();

    let series = series
        .iter()
        .map(|shop| ChartSeries {
            shop_name: shop.shop_name.clone(),
            color: colors.color_for(shop.shop_id),
            values: axis
                .iter()
                .map(|month| shop.months.get(month).copied().unwrap_or(Decimal::ZERO))
                .collect(),
        })
        .collect();

    MonthlyChart {
        labels: axis.iter().map(Month::to_string).collect(),
        series,
    }
}
