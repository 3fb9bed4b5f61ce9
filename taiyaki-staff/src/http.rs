//! HTTP client for the staff panel
//!
//! Every request returns an [`ApiResponse`]: HTTP failures, transport
//! failures and decode failures are all captured in its `error` field,
//! never returned as `Err`.

use std::sync::Arc;

use ::http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use ::http::{Method, StatusCode};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{ApiError, ApiResponse};

use crate::api::{FlavorsApi, OrdersApi, ProductionApi, StockApi};
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::storage::{BASE_URL_KEY, KeyValueStore, TOKEN_KEY};

/// HTTP client for making requests to the order backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    store: Arc<dyn KeyValueStore>,
}

impl HttpClient {
    /// Create a new HTTP client.
    ///
    /// A persisted base URL overrides `config.base_url`; a persisted token is
    /// loaded as the current bearer token.
    pub fn new(config: &ClientConfig, store: Arc<dyn KeyValueStore>) -> ClientResult<Self> {
        let client = Client::builder().build()?;

        let base_url = store
            .get(BASE_URL_KEY)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| config.base_url.clone());
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());

        tracing::debug!(base_url = %base_url, has_token = token.is_some(), "HTTP client created");

        Ok(Self {
            client,
            base_url,
            token,
            store,
        })
    }

    /// Set the bearer token and persist it.
    ///
    /// The in-memory token only changes once the store accepted it.
    pub fn set_token(&mut self, token: impl Into<String>) -> ClientResult<()> {
        let token = token.into();
        self.store.set(TOKEN_KEY, &token)?;
        self.token = Some(token);
        Ok(())
    }

    /// Drop the bearer token and remove it from storage.
    ///
    /// The in-memory token is cleared even if the store fails.
    pub fn clear_token(&mut self) -> ClientResult<()> {
        self.token = None;
        self.store.remove(TOKEN_KEY)?;
        Ok(())
    }

    /// Override the base URL and persist it
    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> ClientResult<()> {
        let base_url = base_url.into();
        self.store.set(BASE_URL_KEY, &base_url)?;
        self.base_url = base_url;
        Ok(())
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store shared with the session manager
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Base headers: JSON content type, plus the bearer token when set
    fn default_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::transport(format!("Invalid token header: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Issue one request.
    ///
    /// `headers` override the base headers with the same name.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        headers: HeaderMap,
    ) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match self.send(method.clone(), path, body, headers).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%method, path, error = %error.message, "Request failed without response");
                ApiResponse::error(error)
            }
        }
    }

    async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        headers: HeaderMap,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut merged = self.default_headers()?;
        merged.extend(headers);

        let mut request = self.client.request(method.clone(), &url).headers(merged);
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| ApiError::transport(e.to_string()))?;
            request = request.body(bytes);
        }

        tracing::debug!(%method, url = %url, "Sending request");

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        let status = response.status();

        if !status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::transport(e.to_string()))?;
            tracing::debug!(%method, path, status = status.as_u16(), "Request rejected");
            return Ok(ApiResponse::error(ApiError::from_status(
                status.as_u16(),
                text,
            )));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(ApiResponse::no_content());
        }

        let data = response
            .json::<T>()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        Ok(ApiResponse::ok(data))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request::<T, ()>(Method::GET, path, None, HeaderMap::new())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body), HeaderMap::new())
            .await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request::<T, ()>(Method::POST, path, None, HeaderMap::new())
            .await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body), HeaderMap::new())
            .await
    }

    /// Make a PUT request without body
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request::<T, ()>(Method::PUT, path, None, HeaderMap::new())
            .await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request::<T, ()>(Method::DELETE, path, None, HeaderMap::new())
            .await
    }

    // ========== Resource APIs ==========

    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi::new(self)
    }

    pub fn flavors(&self) -> FlavorsApi<'_> {
        FlavorsApi::new(self)
    }

    pub fn stock(&self) -> StockApi<'_> {
        StockApi::new(self)
    }

    pub fn production(&self) -> ProductionApi<'_> {
        ProductionApi::new(self)
    }
}
