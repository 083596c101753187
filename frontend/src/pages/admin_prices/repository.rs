use crate::api::{ApiClient, ApiError, CreatePriceRequest, PriceResponse, SiteConfigResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct PricesRepository {
    client: Rc<ApiClient>,
}

impl PricesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<PriceResponse>, ApiError> {
        self.client.list_prices().await
    }

    pub async fn create(&self, payload: CreatePriceRequest) -> Result<PriceResponse, ApiError> {
        self.client.create_price(&payload).await
    }

    pub async fn site_defaults(&self) -> Result<SiteConfigResponse, ApiError> {
        self.client.get_site_config().await
    }
}
