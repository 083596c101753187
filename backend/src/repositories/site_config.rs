//! Site configuration repository. The table holds exactly one row (`id = 1`).

use crate::error::AppError;
use crate::models::site_config::{SiteConfig, UpdateSiteConfigPayload};
use sqlx::PgPool;

const SELECT_COLUMNS: &str =
    "site_name, support_email, default_currency, maintenance_mode, updated_at";

#[derive(Debug, Default, Clone, Copy)]
pub struct SiteConfigRepository;

impl SiteConfigRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn get(&self, db: &PgPool) -> Result<SiteConfig, AppError> {
        let query = format!("SELECT {} FROM site_config WHERE id = 1", SELECT_COLUMNS);
        sqlx::query_as::<_, SiteConfig>(&query)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Site configuration not found".into()))
    }

    pub async fn update(
        &self,
        db: &PgPool,
        payload: &UpdateSiteConfigPayload,
    ) -> Result<SiteConfig, AppError> {
        let query = format!(
            "INSERT INTO site_config (id, site_name, support_email, default_currency, maintenance_mode, updated_at) \
             VALUES (1, $1, $2, $3, $4, NOW()) \
             ON CONFLICT (id) DO UPDATE SET \
             site_name = EXCLUDED.site_name, \
             support_email = EXCLUDED.support_email, \
             default_currency = EXCLUDED.default_currency, \
             maintenance_mode = EXCLUDED.maintenance_mode, \
             updated_at = EXCLUDED.updated_at \
             RETURNING {}",
            SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, SiteConfig>(&query)
            .bind(&payload.site_name)
            .bind(&payload.support_email)
            .bind(&payload.default_currency)
            .bind(payload.maintenance_mode)
            .fetch_one(db)
            .await?;
        Ok(row)
    }
}
