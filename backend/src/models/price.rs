//! Price list entries managed from the admin console.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::validation::rules::{validate_currency_code, validate_sku};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Price {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub amount_cents: i64,
    pub currency: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Price {
    pub fn new(payload: CreatePricePayload) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            sku: payload.sku,
            name: payload.name,
            amount_cents: payload.amount_cents,
            currency: payload.currency,
            active: payload.active,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePricePayload {
    #[validate(custom(function = "validate_sku"))]
    pub sku: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 0))]
    pub amount_cents: i64,
    #[validate(custom(function = "validate_currency_code"))]
    pub currency: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl CreatePricePayload {
    /// Trims free-text fields and upper-cases the currency before validation.
    pub fn normalized(self) -> Self {
        Self {
            sku: self.sku.trim().to_string(),
            name: self.name.trim().to_string(),
            currency: self.currency.trim().to_ascii_uppercase(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceResponse {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub amount_cents: i64,
    pub currency: String,
    pub active: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<Price> for PriceResponse {
    fn from(value: Price) -> Self {
        Self {
            id: value.id,
            sku: value.sku,
            name: value.name,
            amount_cents: value.amount_cents,
            currency: value.currency,
            active: value.active,
            updated_at: value.updated_at,
        }
    }
}
