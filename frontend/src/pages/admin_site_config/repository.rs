use crate::api::{ApiClient, ApiError, SiteConfigResponse, UpdateSiteConfigRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct SiteConfigRepository {
    client: Rc<ApiClient>,
}

impl SiteConfigRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load(&self) -> Result<SiteConfigResponse, ApiError> {
        self.client.get_site_config().await
    }

    pub async fn save(
        &self,
        payload: UpdateSiteConfigRequest,
    ) -> Result<SiteConfigResponse, ApiError> {
        self.client.update_site_config(&payload).await
    }
}
