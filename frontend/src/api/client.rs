use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn endpoint(&self, path: &str) -> String {
        join_url(&self.resolved_base_url().await, path)
    }

    // The access token lives in an HttpOnly cookie set by the identity service.
    fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::with_credentials(builder)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        parse_response(response).await
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let url = self.endpoint("/auth/me").await;
        self.send(self.client.get(&url)).await
    }

    pub async fn list_prices(&self) -> Result<Vec<PriceResponse>, ApiError> {
        let url = self.endpoint("/admin/prices").await;
        self.send(self.client.get(&url)).await
    }

    pub async fn create_price(
        &self,
        payload: &CreatePriceRequest,
    ) -> Result<PriceResponse, ApiError> {
        let url = self.endpoint("/admin/prices").await;
        self.send(self.client.post(&url).json(payload)).await
    }

    pub async fn get_site_config(&self) -> Result<SiteConfigResponse, ApiError> {
        let url = self.endpoint("/admin/site-config").await;
        self.send(self.client.get(&url)).await
    }

    pub async fn update_site_config(
        &self,
        payload: &UpdateSiteConfigRequest,
    ) -> Result<SiteConfigResponse, ApiError> {
        let url = self.endpoint("/admin/site-config").await;
        self.send(self.client.put(&url).json(payload)).await
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)));
    }
    let body = response.text().await.unwrap_or_default();
    Err(error_from_body(status, &body))
}

fn error_from_body(status: StatusCode, body: &str) -> ApiError {
    if let Ok(error) = serde_json::from_str::<ApiError>(body) {
        return error;
    }
    match status {
        StatusCode::UNAUTHORIZED => ApiError::unauthorized("Sign-in required"),
        StatusCode::FORBIDDEN => ApiError {
            code: "FORBIDDEN".into(),
            ..ApiError::unknown("Administrator access required")
        },
        _ => ApiError::request_failed(format!("Request failed with status {}", status.as_u16())),
    }
}
