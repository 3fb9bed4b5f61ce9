// taiyaki-staff/tests/resources.rs
// Paths, methods and bodies of the resource clients

mod common;

use std::sync::Arc;

use axum::http::Method;
use common::{MockBackend, Stub};
use serde_json::{Value, json};
use shared::models::{
    CreateOrderRequest, Flavor, FlavorConfig, Item, NotifyChannel, OrderStatus,
    ProductionReportRequest, UpdateNotificationRequest, UpdatePriorityRequest,
};
use taiyaki_staff::{ClientConfig, HttpClient, MemoryStore};

const ORDER_JSON: &str = r#"{
    "id": 5,
    "items": [{ "flavor": "custard", "quantity": 2 }],
    "status": "cooking",
    "orderedAt": "2025-05-01T10:00:00Z",
    "isPriority": true,
    "notify": { "channel": "email", "target": "a@example.com" }
}"#;

async fn backend() -> MockBackend {
    MockBackend::start(vec![
        Stub::new(Method::GET, "/api/staff/orders", 200, "[]"),
        Stub::new(Method::POST, "/api/staff/orders", 201, ORDER_JSON),
        Stub::new(Method::POST, "/api/staff/orders/5/complete", 200, ORDER_JSON),
        Stub::new(Method::POST, "/api/staff/orders/5/cancel", 200, ORDER_JSON),
        Stub::new(Method::PUT, "/api/staff/orders/5/priority", 200, ORDER_JSON),
        Stub::new(Method::PUT, "/api/staff/orders/5/notification", 200, ORDER_JSON),
        Stub::new(
            Method::GET,
            "/api/staff/flavors/config",
            200,
            r#"{
                "tsubuan": { "cookingTimeMinutes": 10, "quantityPerBatch": 8 },
                "custard": { "cookingTimeMinutes": 12, "quantityPerBatch": 6 },
                "kurikinton": { "cookingTimeMinutes": 15, "quantityPerBatch": 4 }
            }"#,
        ),
        Stub::new(
            Method::PUT,
            "/api/staff/flavors/kurikinton",
            200,
            r#"{ "cookingTimeMinutes": 20, "quantityPerBatch": 5 }"#,
        ),
        Stub::new(
            Method::GET,
            "/api/staff/stock",
            200,
            r#"{ "tsubuan": 4, "custard": 0, "kurikinton": 1 }"#,
        ),
        Stub::new(
            Method::POST,
            "/api/staff/production",
            200,
            r#"{ "newlyReadyOrders": [5, 6], "unallocatedItems": [{ "flavor": "tsubuan", "quantity": 2 }] }"#,
        ),
    ])
    .await
}

fn client_for(backend: &MockBackend) -> HttpClient {
    let mut client = ClientConfig::new(&backend.base_url)
        .build_http_client(Arc::new(MemoryStore::new()))
        .unwrap();
    client.set_token("staff").unwrap();
    client
}

fn sent_body(backend: &MockBackend) -> Value {
    serde_json::from_str(&backend.last_request().body).unwrap()
}

#[tokio::test]
async fn test_list_orders_query() {
    let backend = backend().await;
    let client = client_for(&backend);

    let resp = client.orders().list(&[]).await;
    assert_eq!(resp.data, Some(Vec::new()));
    assert_eq!(backend.last_request().uri, "/api/staff/orders");

    let resp = client
        .orders()
        .list(&[OrderStatus::Ready, OrderStatus::Cooking])
        .await;
    assert!(resp.is_ok());
    assert_eq!(
        backend.last_request().uri,
        "/api/staff/orders?status=ready,cooking"
    );
}

#[tokio::test]
async fn test_order_mutations() {
    let backend = backend().await;
    let client = client_for(&backend);
    let orders = client.orders();

    let created = orders
        .create(&CreateOrderRequest {
            items: vec![Item::new(Flavor::Custard, 2)],
            is_priority: Some(true),
        })
        .await
        .data
        .unwrap();
    assert_eq!(created.id, 5);
    assert!(created.is_priority);
    assert_eq!(
        sent_body(&backend),
        json!({ "items": [{ "flavor": "custard", "quantity": 2 }], "isPriority": true })
    );

    assert!(orders.complete(5).await.is_ok());
    let req = backend.last_request();
    assert_eq!((req.method, req.uri.as_str()), (Method::POST, "/api/staff/orders/5/complete"));

    assert!(orders.cancel(5).await.is_ok());
    assert_eq!(backend.last_request().uri, "/api/staff/orders/5/cancel");

    let resp = orders
        .update_priority(5, &UpdatePriorityRequest { is_priority: false })
        .await;
    assert!(resp.is_ok());
    assert_eq!(backend.last_request().method, Method::PUT);
    assert_eq!(sent_body(&backend), json!({ "isPriority": false }));

    let resp = orders
        .update_notification(
            5,
            &UpdateNotificationRequest {
                channel: NotifyChannel::Email,
                target: "a@example.com".into(),
            },
        )
        .await;
    let order = resp.data.unwrap();
    assert_eq!(order.notify.unwrap().target, "a@example.com");
    assert_eq!(
        sent_body(&backend),
        json!({ "channel": "email", "target": "a@example.com" })
    );
}

#[tokio::test]
async fn test_unknown_order_returns_error_envelope() {
    let backend = backend().await;
    let client = client_for(&backend);

    let resp = client.orders().complete(404).await;
    assert!(resp.data.is_none());
    assert_eq!(resp.status(), Some(404));
}

#[tokio::test]
async fn test_flavor_configs() {
    let backend = backend().await;
    let client = client_for(&backend);

    let configs = client.flavors().configs().await.data.unwrap();
    assert_eq!(configs.len(), 3);
    assert_eq!(configs[&Flavor::Kurikinton].cooking_time_minutes, 15);

    let updated = client
        .flavors()
        .update(
            Flavor::Kurikinton,
            &FlavorConfig {
                cooking_time_minutes: 20,
                quantity_per_batch: 5,
            },
        )
        .await
        .data
        .unwrap();
    assert_eq!(updated.quantity_per_batch, 5);

    let req = backend.last_request();
    assert_eq!(req.uri, "/api/staff/flavors/kurikinton");
    assert_eq!(req.authorization.as_deref(), Some("Bearer staff"));
}

#[tokio::test]
async fn test_stock_levels() {
    let backend = backend().await;
    let client = client_for(&backend);

    let stock = client.stock().levels().await.data.unwrap();
    assert_eq!(stock.get(Flavor::Tsubuan), 4);
    assert_eq!(stock.custard, 0);
}

#[tokio::test]
async fn test_production_report() {
    let backend = backend().await;
    let client = client_for(&backend);

    let report = ProductionReportRequest {
        items: vec![Item::new(Flavor::Tsubuan, 8)],
    };
    let resp = client.production().report(&report).await.data.unwrap();
    assert_eq!(resp.newly_ready_orders, vec![5, 6]);
    assert_eq!(resp.unallocated_items, vec![Item::new(Flavor::Tsubuan, 2)]);
    assert_eq!(
        sent_body(&backend),
        json!({ "items": [{ "flavor": "tsubuan", "quantity": 8 }] })
    );
}
