//! Singleton site configuration row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::validation::rules::validate_currency_code;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SiteConfig {
    pub site_name: String,
    pub support_email: String,
    pub default_currency: String,
    pub maintenance_mode: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateSiteConfigPayload {
    #[validate(length(min = 1, max = 120))]
    pub site_name: String,
    #[validate(email)]
    pub support_email: String,
    #[validate(custom(function = "validate_currency_code"))]
    pub default_currency: String,
    pub maintenance_mode: bool,
}

impl UpdateSiteConfigPayload {
    pub fn normalized(self) -> Self {
        Self {
            site_name: self.site_name.trim().to_string(),
            support_email: self.support_email.trim().to_string(),
            default_currency: self.default_currency.trim().to_ascii_uppercase(),
            ..self
        }
    }
}
