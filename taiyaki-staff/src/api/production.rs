//! Production reporting

use shared::ApiResponse;
use shared::models::{ProductionReportRequest, ProductionReportResponse};

use crate::http::HttpClient;

#[derive(Debug, Clone, Copy)]
pub struct ProductionApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ProductionApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `POST /api/staff/production`
    ///
    /// The backend allocates the batch to waiting orders and reports which
    /// orders became ready and what is left over.
    pub async fn report(
        &self,
        report: &ProductionReportRequest,
    ) -> ApiResponse<ProductionReportResponse> {
        self.http.post("/api/staff/production", report).await
    }
}
