//! Order route handlers.

use axum::{Json, extract::State};
use demo_shop_core::{CreateOrderRequest, Order};

use crate::extract::JsonBody;
use crate::state::AppState;

/// Create an order from the submitted items.
///
/// Any `id`, `total`, `status` or `created_at` in the body is ignored.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateOrderRequest>,
) -> Json<Order> {
    Json(state.store().create_order(request.items).await)
}

/// List all orders, oldest first.
pub async fn index(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.store().list_orders().await)
}
