//! Staff order endpoints

use shared::ApiResponse;
use shared::models::{
    CreateOrderRequest, Order, OrderStatus, UpdateNotificationRequest, UpdatePriorityRequest,
};

use crate::http::HttpClient;

const ORDERS_PATH: &str = "/api/staff/orders";

/// Build the order listing path; the `status` parameter is only added for a
/// non-empty filter and is joined with commas.
pub fn orders_path(statuses: &[OrderStatus]) -> String {
    if statuses.is_empty() {
        return ORDERS_PATH.to_string();
    }
    let joined = statuses
        .iter()
        .map(OrderStatus::as_str)
        .collect::<Vec<_>>()
        .join(",");
    format!("{}?status={}", ORDERS_PATH, joined)
}

#[derive(Debug, Clone, Copy)]
pub struct OrdersApi<'a> {
    http: &'a HttpClient,
}

impl<'a> OrdersApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `GET /api/staff/orders[?status=a,b]`
    pub async fn list(&self, statuses: &[OrderStatus]) -> ApiResponse<Vec<Order>> {
        self.http.get(&orders_path(statuses)).await
    }

    /// `POST /api/staff/orders`
    pub async fn create(&self, order: &CreateOrderRequest) -> ApiResponse<Order> {
        self.http.post(ORDERS_PATH, order).await
    }

    /// `POST /api/staff/orders/{id}/complete`
    pub async fn complete(&self, id: u32) -> ApiResponse<Order> {
        self.http
            .post_empty(&format!("{}/{}/complete", ORDERS_PATH, id))
            .await
    }

    /// `POST /api/staff/orders/{id}/cancel`
    pub async fn cancel(&self, id: u32) -> ApiResponse<Order> {
        self.http
            .post_empty(&format!("{}/{}/cancel", ORDERS_PATH, id))
            .await
    }

    /// `PUT /api/staff/orders/{id}/priority`
    pub async fn update_priority(
        &self,
        id: u32,
        priority: &UpdatePriorityRequest,
    ) -> ApiResponse<Order> {
        self.http
            .put(&format!("{}/{}/priority", ORDERS_PATH, id), priority)
            .await
    }

    /// `PUT /api/staff/orders/{id}/notification`
    pub async fn update_notification(
        &self,
        id: u32,
        notification: &UpdateNotificationRequest,
    ) -> ApiResponse<Order> {
        self.http
            .put(&format!("{}/{}/notification", ORDERS_PATH, id), notification)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_has_no_query() {
        assert_eq!(orders_path(&[]), "/api/staff/orders");
    }

    #[test]
    fn filter_is_comma_joined_in_order() {
        assert_eq!(
            orders_path(&[OrderStatus::Ready, OrderStatus::Cooking]),
            "/api/staff/orders?status=ready,cooking"
        );
        assert_eq!(
            orders_path(&[OrderStatus::Cancelled]),
            "/api/staff/orders?status=cancelled"
        );
    }
}
