//! Customer wait-time screen

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use shared::models::{DisplayResponse, OrderDetails, WaitTimesResponse};

use crate::config::{base_url_from_env, resolve_base_url};
use crate::error::DisplayResult;
use crate::fetch::get_json;

/// Fetcher for the customer screen: board, single order and wait times
#[derive(Debug, Clone)]
pub struct WaitTimeBoard {
    client: Client,
    base_url: String,
}

impl WaitTimeBoard {
    /// Fails with a configuration error when `base_url` is missing or empty.
    pub fn new(base_url: Option<&str>) -> DisplayResult<Self> {
        let base_url = resolve_base_url(base_url)?;
        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    pub fn from_env() -> DisplayResult<Self> {
        let base_url = base_url_from_env()?;
        Self::new(Some(&base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json")
    }

    /// `GET /api/orders/display`
    pub async fn fetch_orders_display(&self) -> DisplayResult<DisplayResponse> {
        get_json(self.get("/api/orders/display"), "Error fetching orders").await
    }

    /// `GET /api/orders/{id}`
    pub async fn fetch_order(&self, id: u32) -> DisplayResult<OrderDetails> {
        let context = format!("Error fetching order {}", id);
        get_json(self.get(&format!("/api/orders/{}", id)), &context).await
    }

    /// `GET /api/wait-times`
    pub async fn fetch_wait_times(&self) -> DisplayResult<WaitTimesResponse> {
        get_json(self.get("/api/wait-times"), "Error fetching wait times").await
    }
}
