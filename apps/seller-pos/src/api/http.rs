//! HTTP implementation of [`CommerceApi`] on top of `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::{
    ApiClientError, ApiResult, CommerceApi, CouponCheck, CouponCheckRequest, Customer,
    CustomerPage, OrderPayload, OrderPlaced, ProductPage,
};
use crate::config::ApiSettings;
use souk_core::types::ProductRecord;

/// Commerce API client.
pub struct HttpCommerceApi {
    client: Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl HttpCommerceApi {
    /// Creates a client from the configured API settings.
    ///
    /// The base URL always ends with `/` so endpoint paths are joined below
    /// it instead of replacing its last segment.
    pub fn new(settings: &ApiSettings) -> ApiResult<Self> {
        let mut base = settings.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| ApiClientError::InvalidUrl(e.to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| ApiClientError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            auth_token: settings.auth_token.clone(),
        })
    }

    /// Resolves an endpoint path against the base URL.
    pub fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiClientError::InvalidUrl(e.to_string()))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| ApiClientError::Network(e.to_string()))?;

        decode(response).await
    }
}

/// Maps a response to `T`, or to a service error carrying the server's message.
async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiClientError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(ApiClientError::Service {
            status: status.as_u16(),
            message: error_message(&body).unwrap_or_else(|| status.to_string()),
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiClientError::Decode(e.to_string()))
}

/// Pulls `message` (or the first of `errors[].message`) out of an error body.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("errors")?.get(0)?.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

#[async_trait]
impl CommerceApi for HttpCommerceApi {
    async fn fetch_products(&self) -> ApiResult<Vec<ProductRecord>> {
        let url = self.endpoint("products")?;
        debug!(%url, "Fetching products");
        let page: ProductPage = self.send(self.client.get(url)).await?;
        Ok(page.products)
    }

    async fn fetch_customers(&self) -> ApiResult<Vec<Customer>> {
        let url = self.endpoint("customers")?;
        debug!(%url, "Fetching customers");
        let page: CustomerPage = self.send(self.client.get(url)).await?;
        Ok(page.customers)
    }

    async fn check_coupon(&self, request: &CouponCheckRequest) -> ApiResult<CouponCheck> {
        let url = self.endpoint("coupon/check-coupon")?;
        debug!(%url, code = %request.code, "Checking coupon");
        self.send(self.client.post(url).json(request)).await
    }

    async fn place_order(&self, payload: &OrderPayload) -> ApiResult<OrderPlaced> {
        let url = self.endpoint("pos/place-order")?;
        debug!(%url, lines = payload.cart.len(), "Placing order");
        self.send(self.client.post(url).json(payload)).await
    }
}
