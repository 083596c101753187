use super::{repository::SiteConfigRepository, utils::SiteConfigFormState};
use crate::api::{ApiClient, ApiError, SiteConfigResponse, UpdateSiteConfigRequest};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct SiteConfigViewModel {
    pub form: SiteConfigFormState,
    pub config_resource: Resource<(), Result<SiteConfigResponse, ApiError>>,
    pub save_action: Action<UpdateSiteConfigRequest, Result<SiteConfigResponse, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub message: RwSignal<Option<String>>,
}

impl SiteConfigViewModel {
    pub fn submit(&self) {
        self.message.set(None);
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.save_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_site_config_view_model() -> SiteConfigViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = SiteConfigRepository::new_with_client(Rc::new(api));

    let form = SiteConfigFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let message = create_rw_signal(None::<String>);

    let repo_load = repo.clone();
    let config_resource = create_local_resource(
        || (),
        move |_| {
            let repo = repo_load.clone();
            async move { repo.load().await }
        },
    );

    create_effect(move |_| {
        if let Some(Ok(config)) = config_resource.get() {
            form.load(&config);
        }
    });

    let save_action = create_action(move |payload: &UpdateSiteConfigRequest| {
        let repo = repo.clone();
        let payload = payload.clone();
        async move { repo.save(payload).await }
    });

    create_effect(move |_| {
        let Some(result) = save_action.value().get() else {
            return;
        };
        match result {
            Ok(config) => {
                form.load(&config);
                message.set(Some("Site configuration saved.".into()));
            }
            Err(err) => error.set(Some(err)),
        }
    });

    SiteConfigViewModel {
        form,
        config_resource,
        save_action,
        error,
        message,
    }
}
