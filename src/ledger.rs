//! Read access to shops, profiles and records.
//!
//! Reporting depends on the `Ledger` trait rather than on the pool, so the
//! report service can run against any snapshot source.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        record::{RecordFilter, TransactionRecord},
        shop::Shop,
    },
};

#[async_trait]
pub trait Ledger: Send + Sync {
    /// Records matching `filter`, in no particular order.
    async fn fetch_records(&self, filter: &RecordFilter)
    -> Result<Vec<TransactionRecord>, AppError>;

    /// All shops, ordered by name.
    async fn fetch_shops(&self) -> Result<Vec<Shop>, AppError>;

    /// The shop assigned to the user's profile, if any.
    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<Shop>, AppError>;
}

/// PostgreSQL-backed ledger.
#[derive(Debug, Clone)]
pub struct PgLedger {
    pool: DbPool,
}

impl PgLedger {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Ledger for PgLedger {
    async fn fetch_records(
        &self,
        filter: &RecordFilter,
    ) -> Result<Vec<TransactionRecord>, AppError> {
        let records = sqlx::query_as::<_, TransactionRecord>(
            r#"
            SELECT id, shop_id, date, cash_in, cash_out, till_in, till_out, image_url, created_at
            FROM transaction_records
            WHERE ($1::uuid IS NULL OR shop_id = $1)
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(filter.shop_id)
        .bind(filter.since)
        .bind(filter.until)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn fetch_shops(&self) -> Result<Vec<Shop>, AppError> {
        let shops =
            sqlx::query_as::<_, Shop>("SELECT id, name, location FROM shops ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(shops)
    }

    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<Shop>, AppError> {
        let shop = sqlx::query_as::<_, Shop>(
            r#"
            SELECT s.id, s.name, s.location
            FROM user_profiles p
            JOIN shops s ON s.id = p.shop_id
            WHERE p.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(shop)
    }
}
