use crate::api::{ApiError, CreatePriceRequest, SiteConfigResponse};
use leptos::*;

const SKU_MAX_LEN: usize = 64;
const NAME_MAX_LEN: usize = 200;

#[derive(Clone, Copy)]
pub struct PriceFormState {
    pub sku: RwSignal<String>,
    pub name: RwSignal<String>,
    pub amount: RwSignal<String>,
    pub currency: RwSignal<String>,
    pub active: RwSignal<bool>,
    /// Currency restored by `reset`; follows the site configuration once loaded.
    pub default_currency: RwSignal<String>,
}

impl PriceFormState {
    pub fn new(default_currency: &str) -> Self {
        Self {
            sku: create_rw_signal(String::new()),
            name: create_rw_signal(String::new()),
            amount: create_rw_signal(String::new()),
            currency: create_rw_signal(default_currency.to_string()),
            active: create_rw_signal(true),
            default_currency: create_rw_signal(default_currency.to_string()),
        }
    }

    /// Adopts the store's default currency. A currency the user already
    /// changed is left alone.
    pub fn apply_site_defaults(&self, config: &SiteConfigResponse) {
        let Some(code) = normalize_currency(&config.default_currency) else {
            log::warn!("ignoring invalid site currency {:?}", config.default_currency);
            return;
        };
        if self.currency.get_untracked() == self.default_currency.get_untracked() {
            self.currency.set(code.clone());
        }
        self.default_currency.set(code);
    }

    pub fn to_request(&self) -> Result<CreatePriceRequest, ApiError> {
        build_price_request(
            &self.sku.get_untracked(),
            &self.name.get_untracked(),
            &self.amount.get_untracked(),
            &self.currency.get_untracked(),
            self.active.get_untracked(),
        )
    }

    pub fn reset(&self) {
        self.sku.set(String::new());
        self.name.set(String::new());
        self.amount.set(String::new());
        self.currency.set(self.default_currency.get_untracked());
        self.active.set(true);
    }
}

pub fn build_price_request(
    sku: &str,
    name: &str,
    amount: &str,
    currency: &str,
    active: bool,
) -> Result<CreatePriceRequest, ApiError> {
    let sku = sku.trim();
    if sku.is_empty() || sku.len() > SKU_MAX_LEN {
        return Err(ApiError::validation("SKU must be 1-64 characters."));
    }
    if !sku
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ApiError::validation(
            "SKU may only contain letters, digits, '-' and '_'.",
        ));
    }

    let name = name.trim();
    if name.is_empty() || name.chars().count() > NAME_MAX_LEN {
        return Err(ApiError::validation("Name must be 1-200 characters."));
    }

    let amount_cents = parse_amount_cents(amount)
        .ok_or_else(|| ApiError::validation("Amount must be a non-negative number like 12.50."))?;

    let currency = normalize_currency(currency)
        .ok_or_else(|| ApiError::validation("Currency must be a three-letter code."))?;

    Ok(CreatePriceRequest {
        sku: sku.to_string(),
        name: name.to_string(),
        amount_cents,
        currency,
        active,
    })
}

pub fn normalize_currency(raw: &str) -> Option<String> {
    let code = raw.trim().to_ascii_uppercase();
    (code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())).then_some(code)
}

/// Parses a decimal amount with at most two fractional digits into cents.
pub fn parse_amount_cents(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (whole, fraction) = match raw.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (raw, ""),
    };
    if whole.is_empty() || fraction.len() > 2 {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    let whole: i64 = whole.parse().ok()?;
    let fraction: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(fraction)
}

pub fn format_amount(amount_cents: i64, currency: &str) -> String {
    let sign = if amount_cents < 0 { "-" } else { "" };
    let abs = amount_cents.unsigned_abs();
    format!("{}{}.{:02} {}", sign, abs / 100, abs % 100, currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use chrono::Utc;

    fn site_config(currency: &str) -> SiteConfigResponse {
        SiteConfigResponse {
            site_name: "Tea Shop".into(),
            support_email: "help@tea.example".into(),
            default_currency: currency.into(),
            maintenance_mode: false,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn site_currency_replaces_fallback() {
        with_runtime(|| {
            let form = PriceFormState::new("USD");
            form.apply_site_defaults(&site_config("jpy"));
            assert_eq!(form.currency.get_untracked(), "JPY");

            form.currency.set("EUR".into());
            form.reset();
            assert_eq!(form.currency.get_untracked(), "JPY");
        });
    }

    #[test]
    fn site_currency_keeps_user_choice() {
        with_runtime(|| {
            let form = PriceFormState::new("USD");
            form.currency.set("GBP".into());
            form.apply_site_defaults(&site_config("JPY"));
            assert_eq!(form.currency.get_untracked(), "GBP");
            assert_eq!(form.default_currency.get_untracked(), "JPY");
        });
    }

    #[test]
    fn invalid_site_currency_is_ignored() {
        with_runtime(|| {
            let form = PriceFormState::new("USD");
            form.apply_site_defaults(&site_config("yen!"));
            assert_eq!(form.currency.get_untracked(), "USD");
        });
    }

    #[test]
    fn parse_amount_handles_common_inputs() {
        assert_eq!(parse_amount_cents("12"), Some(1200));
        assert_eq!(parse_amount_cents("12.5"), Some(1250));
        assert_eq!(parse_amount_cents(" 0.05 "), Some(5));
        assert_eq!(parse_amount_cents("12.345"), None);
        assert_eq!(parse_amount_cents("-1"), None);
        assert_eq!(parse_amount_cents(".50"), None);
        assert_eq!(parse_amount_cents("abc"), None);
        assert_eq!(parse_amount_cents(""), None);
    }

    #[test]
    fn format_amount_pads_cents() {
        assert_eq!(format_amount(1205, "USD"), "12.05 USD");
        assert_eq!(format_amount(0, "EUR"), "0.00 EUR");
    }

    #[test]
    fn build_request_normalizes_fields() {
        let request = build_price_request(" TEA-01 ", " Green tea ", "4.5", "eur", true)
            .expect("valid request");
        assert_eq!(request.sku, "TEA-01");
        assert_eq!(request.name, "Green tea");
        assert_eq!(request.amount_cents, 450);
        assert_eq!(request.currency, "EUR");
        assert!(request.active);
    }

    #[test]
    fn build_request_rejects_invalid_fields() {
        assert!(build_price_request("", "n", "1", "USD", true).is_err());
        assert!(build_price_request("tea pot", "n", "1", "USD", true).is_err());
        assert!(build_price_request("TEA", "  ", "1", "USD", true).is_err());
        assert!(build_price_request("TEA", "n", "1.234", "USD", true).is_err());
        let err = build_price_request("TEA", "n", "1", "EURO", true).unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
    }
}
