//! Flavor configuration endpoints

use shared::ApiResponse;
use shared::models::{Flavor, FlavorConfig, FlavorConfigs};

use crate::http::HttpClient;

#[derive(Debug, Clone, Copy)]
pub struct FlavorsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> FlavorsApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `GET /api/staff/flavors/config`
    pub async fn configs(&self) -> ApiResponse<FlavorConfigs> {
        self.http.get("/api/staff/flavors/config").await
    }

    /// `PUT /api/staff/flavors/{flavor}`
    pub async fn update(&self, flavor: Flavor, config: &FlavorConfig) -> ApiResponse<FlavorConfig> {
        self.http
            .put(&format!("/api/staff/flavors/{}", flavor), config)
            .await
    }
}
