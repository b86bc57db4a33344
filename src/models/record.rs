//! Transaction record models and API request types.
//!
//! This module defines:
//! - `TransactionRecord`: one day's cash and till movements for a shop
//! - `CreateRecordRequest` / `UpdateRecordRequest`: request bodies
//! - `RecordFilter`: shop and date-range filter shared by listing and reporting

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transaction_records` table. Each record:
/// - Belongs to exactly one shop
/// - Carries a calendar date without a time component
/// - Holds four non-negative amounts (enforced by CHECK constraints)
///
/// Amounts are `Decimal`, never floats, so totals do not drift.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub shop_id: Uuid,
    pub date: NaiveDate,
    pub cash_in: Decimal,
    pub cash_out: Decimal,
    pub till_in: Decimal,
    pub till_out: Decimal,

    /// Optional link to a photo of the till slip; not used by reports
    pub image_url: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Request to record a day's movements for a shop.
///
/// # JSON Example
///
/// ```json
/// {
///   "shop_id": "550e8400-e29b-41d4-a716-446655440000",
///   "date": "2025-03-14",
///   "cash_in": 12500.50,
///   "cash_out": 800,
///   "till_in": 4300,
///   "till_out": 0
/// }
/// ```
///
/// `date` defaults to today; omitted amounts default to 0.
#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    pub shop_id: Uuid,

    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub cash_in: Decimal,

    #[serde(default)]
    pub cash_out: Decimal,

    #[serde(default)]
    pub till_in: Decimal,

    #[serde(default)]
    pub till_out: Decimal,

    pub image_url: Option<String>,
}

impl CreateRecordRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_amounts(&[
            ("cash_in", Some(self.cash_in)),
            ("cash_out", Some(self.cash_out)),
            ("till_in", Some(self.till_in)),
            ("till_out", Some(self.till_out)),
        ])
    }
}

/// Partial update of a record. Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRecordRequest {
    pub date: Option<NaiveDate>,
    pub cash_in: Option<Decimal>,
    pub cash_out: Option<Decimal>,
    pub till_in: Option<Decimal>,
    pub till_out: Option<Decimal>,
    pub image_url: Option<String>,
}

impl UpdateRecordRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_amounts(&[
            ("cash_in", self.cash_in),
            ("cash_out", self.cash_out),
            ("till_in", self.till_in),
            ("till_out", self.till_out),
        ])
    }

    /// Apply the present fields on top of `record`.
    pub fn apply(self, mut record: TransactionRecord) -> TransactionRecord {
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(cash_in) = self.cash_in {
            record.cash_in = cash_in;
        }
        if let Some(cash_out) = self.cash_out {
            record.cash_out = cash_out;
        }
        if let Some(till_in) = self.till_in {
            record.till_in = till_in;
        }
        if let Some(till_out) = self.till_out {
            record.till_out = till_out;
        }
        if self.image_url.is_some() {
            record.image_url = self.image_url;
        }
        record
    }
}

/// Largest value a `NUMERIC(12, 2)` column holds.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

fn check_amounts(amounts: &[(&str, Option<Decimal>)]) -> Result<(), String> {
    for (field, amount) in amounts {
        if let Some(amount) = amount {
            if *amount < Decimal::ZERO {
                return Err(format!("{} must not be negative", field));
            }
            if *amount > MAX_AMOUNT {
                return Err(format!("{} exceeds {}", field, MAX_AMOUNT));
            }
            if amount.normalize().scale() > 2 {
                return Err(format!("{} must have at most 2 decimal places", field));
            }
        }
    }
    Ok(())
}

/// Filter for fetching records. Date bounds are inclusive.
///
/// Used as the query string of `GET /api/v1/records`:
/// `?shop_id=<uuid>&since=2025-01-01&until=2025-03-31`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecordFilter {
    pub shop_id: Option<Uuid>,
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl RecordFilter {
    pub fn validate(&self) -> Result<(), String> {
        match (self.since, self.until) {
            (Some(since), Some(until)) if since > until => {
                Err("since must not be after until".to_string())
            }
            _ => Ok(()),
        }
    }

    pub fn matches(&self, record: &TransactionRecord) -> bool {
        self.shop_id.is_none_or(|shop_id| record.shop_id == shop_id)
            && self.since.is_none_or(|since| record.date >= since)
            && self.until.is_none_or(|until| record.date <= until)
    }
}
