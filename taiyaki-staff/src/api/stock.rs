use shared::ApiResponse;
use shared::models::StockData;

use crate::http::HttpClient;

#[derive(Debug, Clone, Copy)]
pub struct StockApi<'a> {
    http: &'a HttpClient,
}

impl<'a> StockApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `GET /api/staff/stock`
    pub async fn levels(&self) -> ApiResponse<StockData> {
        self.http.get("/api/staff/stock").await
    }
}
