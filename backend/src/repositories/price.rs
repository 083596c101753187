//! Price repository.

use crate::error::AppError;
use crate::models::price::Price;
use sqlx::PgPool;

const TABLE_NAME: &str = "prices";
const SELECT_COLUMNS: &str =
    "id, sku, name, amount_cents, currency, active, created_at, updated_at";

#[derive(Debug, Default, Clone, Copy)]
pub struct PriceRepository;

impl PriceRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn find_all(&self, db: &PgPool) -> Result<Vec<Price>, AppError> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY sku ASC",
            SELECT_COLUMNS, TABLE_NAME
        );
        let rows = sqlx::query_as::<_, Price>(&query).fetch_all(db).await?;
        Ok(rows)
    }

    pub async fn create(&self, db: &PgPool, item: &Price) -> Result<Price, AppError> {
        let query = format!(
            "INSERT INTO {} (id, sku, name, amount_cents, currency, active, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Price>(&query)
            .bind(item.id)
            .bind(&item.sku)
            .bind(&item.name)
            .bind(item.amount_cents)
            .bind(&item.currency)
            .bind(item.active)
            .bind(item.created_at)
            .bind(item.updated_at)
            .fetch_one(db)
            .await?;
        Ok(row)
    }
}
