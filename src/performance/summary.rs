//! Per-shop summary metrics.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{record::TransactionRecord, shop::Shop};

/// Totals and derived ratios for one shop.
///
/// `average_per_day` and `profit_margin` are rounded to whole units;
/// `target_ratio` keeps two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopSummary {
    pub shop_id: Uuid,
    pub shop_name: String,
    pub cash_in: Decimal,
    pub cash_out: Decimal,
    pub till_in: Decimal,
    pub till_out: Decimal,

    /// `(cash_in + till_in) - (cash_out + till_out)`
    pub net_cash: Decimal,

    /// Distinct dates with at least one record
    pub active_days: usize,

    pub average_per_day: Decimal,

    /// `cash_in` as a percentage of the target, serialized as a string so
    /// the two decimal places survive (`"0.00"`)
    #[serde(with = "rust_decimal::serde::str")]
    pub target_ratio: Decimal,

    /// `net_cash` as a percentage of `cash_in`
    pub profit_margin: Decimal,

    pub below_target: bool,
}

/// Summarize the records of a single shop against `target_amount`.
///
/// Every ratio with a zero denominator is 0.
pub fn summarize(
    shop: &Shop,
    records: &[TransactionRecord],
    target_amount: Decimal,
) -> ShopSummary {
    let mut cash_in = Decimal::ZERO;
    let mut cash_out = Decimal::ZERO;
    let mut till_in = Decimal::ZERO;
    let mut till_out = Decimal::ZERO;
    let mut dates = BTreeSet::new();

    for record in records {
        cash_in += record.cash_in;
        cash_out += record.cash_out;
        till_in += record.till_in;
        till_out += record.till_out;
        dates.insert(record.date);
    }

    let net_cash = (cash_in + till_in) - (cash_out + till_out);
    let active_days = dates.len();

    let mut target_ratio = ratio(cash_in * Decimal::ONE_HUNDRED, target_amount).round_dp(2);
    target_ratio.rescale(2);

    ShopSummary {
        shop_id: shop.id,
        shop_name: shop.name.clone(),
        cash_in,
        cash_out,
        till_in,
        till_out,
        net_cash,
        active_days,
        average_per_day: ratio(cash_in, Decimal::from(active_days)).round(),
        target_ratio,
        profit_margin: ratio(net_cash * Decimal::ONE_HUNDRED, cash_in).round(),
        below_target: cash_in < target_amount,
    }
}

fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}
