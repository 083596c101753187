use super::{repository::PricesRepository, utils::PriceFormState};
use crate::api::{ApiClient, ApiError, CreatePriceRequest, PriceResponse};
use leptos::*;
use std::rc::Rc;

/// Used until the site configuration has loaded.
const FALLBACK_CURRENCY: &str = "USD";

#[derive(Clone, Copy)]
pub struct PricesViewModel {
    pub form: PriceFormState,
    pub reload: RwSignal<u32>,
    pub prices_resource: Resource<u32, Result<Vec<PriceResponse>, ApiError>>,
    pub create_action: Action<CreatePriceRequest, Result<PriceResponse, ApiError>>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub message: RwSignal<Option<String>>,
}

impl PricesViewModel {
    pub fn submit(&self) {
        self.message.set(None);
        match self.form.to_request() {
            Ok(request) => {
                self.form_error.set(None);
                self.create_action.dispatch(request);
            }
            Err(err) => self.form_error.set(Some(err)),
        }
    }
}

pub fn use_prices_view_model() -> PricesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = PricesRepository::new_with_client(Rc::new(api));

    let form = PriceFormState::new(FALLBACK_CURRENCY);
    let reload = create_rw_signal(0u32);
    let form_error = create_rw_signal(None::<ApiError>);
    let message = create_rw_signal(None::<String>);

    let repo_list = repo.clone();
    let prices_resource = create_local_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_list.clone();
            async move { repo.list().await }
        },
    );

    let repo_defaults = repo.clone();
    let site_defaults = create_local_resource(
        || (),
        move |_| {
            let repo = repo_defaults.clone();
            async move { repo.site_defaults().await }
        },
    );

    create_effect(move |_| match site_defaults.get() {
        Some(Ok(config)) => form.apply_site_defaults(&config),
        Some(Err(err)) => log::warn!("site defaults unavailable: {}", err),
        None => {}
    });

    let create_action = create_action(move |payload: &CreatePriceRequest| {
        let repo = repo.clone();
        let payload = payload.clone();
        async move { repo.create(payload).await }
    });

    create_effect(move |_| {
        let Some(result) = create_action.value().get() else {
            return;
        };
        match result {
            Ok(price) => {
                message.set(Some(format!("Added {} ({}).", price.name, price.sku)));
                form.reset();
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => form_error.set(Some(err)),
        }
    });

    PricesViewModel {
        form,
        reload,
        prices_resource,
        create_action,
        form_error,
        message,
    }
}
