//! Integration tests for the payment flow and order status transitions.
//!
//! Status machine: `pending` -> `paid`. There is no way back and no other
//! state; paying twice is allowed and leaves the order paid.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::time::Duration;

use axum::http::StatusCode;
use demo_shop_api::config::ApiConfig;
use demo_shop_core::{Order, OrderId, OrderStatus, PaymentResponse, Product};
use demo_shop_integration_tests::TestApp;
use rust_decimal::Decimal;
use serde_json::json;

async fn create_order(app: &TestApp) -> Order {
    app.post_json(
        "/api/orders",
        &json!({"items": [{"product_id": 1, "quantity": 2}, {"product_id": 3, "quantity": 1}]}),
    )
    .await
    .json()
}

async fn order_status(app: &TestApp, id: OrderId) -> OrderStatus {
    let orders: Vec<Order> = app.get("/api/orders").await.json();
    orders
        .into_iter()
        .find(|order| order.id == id)
        .map(|order| order.status)
        .unwrap()
}

// =============================================================================
// POST /api/payment
// =============================================================================

#[tokio::test]
async fn test_payment_marks_order_paid() {
    let app = TestApp::new();
    let order = create_order(&app).await;
    assert_eq!(order.status, OrderStatus::Pending);

    let response = app
        .post_json(
            "/api/payment",
            &json!({"order_id": order.id, "amount": 279.97}),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let payment: PaymentResponse = response.json();
    assert!(payment.success);
    assert_eq!(payment.order_id, order.id);
    assert_eq!(payment.message, "Payment processed successfully");

    assert_eq!(order_status(&app, order.id).await, OrderStatus::Paid);
}

#[tokio::test]
async fn test_payment_amount_is_not_checked() {
    let app = TestApp::new();
    let order = create_order(&app).await;

    let response = app
        .post_json("/api/payment", &json!({"order_id": order.id, "amount": 0.01}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(order_status(&app, order.id).await, OrderStatus::Paid);
}

#[tokio::test]
async fn test_repeat_payment_stays_paid() {
    let app = TestApp::new();
    let order = create_order(&app).await;
    let body = json!({"order_id": order.id, "amount": 279.97});

    for _ in 0..3 {
        let response = app.post_json("/api/payment", &body).await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.json::<PaymentResponse>().success);
        assert_eq!(order_status(&app, order.id).await, OrderStatus::Paid);
    }
}

#[tokio::test]
async fn test_payment_order_not_found() {
    let app = TestApp::new();
    let order = create_order(&app).await;

    let response = app
        .post_json("/api/payment", &json!({"order_id": 999, "amount": 100.0}))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Order not found");

    let orders: Vec<Order> = app.get("/api/orders").await.json();
    assert_eq!(orders, vec![order]);
}

#[tokio::test]
async fn test_payment_huge_amount_is_accepted() {
    let app = TestApp::new();
    let order = create_order(&app).await;

    let response = app
        .post_json("/api/payment", &json!({"order_id": order.id, "amount": 1e30}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(order_status(&app, order.id).await, OrderStatus::Paid);
}

#[tokio::test]
async fn test_payment_wide_order_id_is_not_found() {
    let app = TestApp::new();
    create_order(&app).await;

    let response = app
        .post_json("/api/payment", &json!({"order_id": 3_000_000_000_i64, "amount": 1}))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Order not found");
}

#[tokio::test]
async fn test_payment_invalid_json() {
    let app = TestApp::new();

    let response = app.post_raw("/api/payment", "invalid json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Invalid request body");
}

#[tokio::test]
async fn test_payment_missing_order_id_is_not_found() {
    let app = TestApp::new();
    create_order(&app).await;

    let response = app.post_json("/api/payment", &json!({"amount": 10})).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Full flow
// =============================================================================

#[tokio::test]
async fn test_full_order_flow() {
    let app = TestApp::new();

    let products: Vec<Product> = app.get("/api/products").await.json();
    assert_eq!(products.len(), 5);

    let order: Order = app
        .post_json(
            "/api/orders",
            &json!({"items": [
                {"product_id": products[0].id, "quantity": 1},
                {"product_id": products[1].id, "quantity": 2}
            ]}),
        )
        .await
        .json();
    assert_eq!(order.total, products[0].price + products[1].price * Decimal::TWO);

    let payment: PaymentResponse = app
        .post_json("/api/payment", &json!({"order_id": order.id, "amount": 499.97}))
        .await
        .json();
    assert!(payment.success);

    let orders: Vec<Order> = app.get("/api/orders").await.json();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, OrderStatus::Paid);
    assert_eq!(orders[0].total, order.total);
}

// =============================================================================
// Simulated latency
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_payment_delay_does_not_block_other_requests() {
    let delay = Duration::from_secs(1);
    let app = TestApp::with_config(ApiConfig {
        payment_delay: delay,
        ..ApiConfig::default()
    });
    let order = create_order(&app).await;

    let paying = {
        let app = app.clone();
        tokio::spawn(async move {
            app.post_json("/api/payment", &json!({"order_id": order.id, "amount": 279.97}))
                .await
        })
    };
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }

    let start = tokio::time::Instant::now();
    let products = app.get("/api/products").await;
    assert_eq!(products.status, StatusCode::OK);
    assert_eq!(order_status(&app, order.id).await, OrderStatus::Pending);
    assert_eq!(start.elapsed(), Duration::ZERO);

    let response = paying.await.unwrap();
    assert_eq!(response.status, StatusCode::OK);
    assert!(start.elapsed() >= delay);
    assert_eq!(order_status(&app, order.id).await, OrderStatus::Paid);
}
