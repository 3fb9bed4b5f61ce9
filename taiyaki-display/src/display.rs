//! Public order-status board

use reqwest::Client;
use shared::models::DisplayResponse;

use crate::config::{base_url_from_env, resolve_base_url};
use crate::error::DisplayResult;
use crate::fetch::get_json;

/// Fetcher for the public display (ready / cooking / waiting ids)
#[derive(Debug, Clone)]
pub struct DisplayBoard {
    client: Client,
    base_url: String,
}

impl DisplayBoard {
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

    /// `GET /api/orders/display`
    pub async fn fetch_display_orders(&self) -> DisplayResult<DisplayResponse> {
        let url = format!("{}/api/orders/display", self.base_url);
        get_json(self.client.get(url), "Failed to fetch display orders").await
    }
}
