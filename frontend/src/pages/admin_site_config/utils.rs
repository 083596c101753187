use crate::{
    api::{ApiError, SiteConfigResponse, UpdateSiteConfigRequest},
    pages::admin_prices::utils::normalize_currency,
};
use leptos::*;

const SITE_NAME_MAX_LEN: usize = 120;

#[derive(Clone, Copy)]
pub struct SiteConfigFormState {
    pub site_name: RwSignal<String>,
    pub support_email: RwSignal<String>,
    pub default_currency: RwSignal<String>,
    pub maintenance_mode: RwSignal<bool>,
}

impl Default for SiteConfigFormState {
    fn default() -> Self {
        Self {
            site_name: create_rw_signal(String::new()),
            support_email: create_rw_signal(String::new()),
            default_currency: create_rw_signal(String::new()),
            maintenance_mode: create_rw_signal(false),
        }
    }
}

impl SiteConfigFormState {
    pub fn load(&self, config: &SiteConfigResponse) {
        self.site_name.set(config.site_name.clone());
        self.support_email.set(config.support_email.clone());
        self.default_currency.set(config.default_currency.clone());
        self.maintenance_mode.set(config.maintenance_mode);
    }

    pub fn to_request(&self) -> Result<UpdateSiteConfigRequest, ApiError> {
        build_site_config_request(
            &self.site_name.get_untracked(),
            &self.support_email.get_untracked(),
            &self.default_currency.get_untracked(),
            self.maintenance_mode.get_untracked(),
        )
    }
}

pub fn build_site_config_request(
    site_name: &str,
    support_email: &str,
    default_currency: &str,
    maintenance_mode: bool,
) -> Result<UpdateSiteConfigRequest, ApiError> {
    let site_name = site_name.trim();
    if site_name.is_empty() || site_name.chars().count() > SITE_NAME_MAX_LEN {
        return Err(ApiError::validation("Site name must be 1-120 characters."));
    }

    let support_email = support_email.trim();
    if !looks_like_email(support_email) {
        return Err(ApiError::validation("Support email is not a valid address."));
    }

    let default_currency = normalize_currency(default_currency)
        .ok_or_else(|| ApiError::validation("Currency must be a three-letter code."))?;

    Ok(UpdateSiteConfigRequest {
        site_name: site_name.to_string(),
        support_email: support_email.to_string(),
        default_currency,
        maintenance_mode,
    })
}

// Loose client-side check; the backend runs the real validation.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}
