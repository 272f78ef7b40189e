//! Payment route handler.

use axum::{Json, extract::State};
use demo_shop_core::{PaymentRequest, PaymentResponse};

use crate::error::{Result, add_breadcrumb};
use crate::extract::JsonBody;
use crate::state::AppState;

/// Pay for an order.
///
/// Responds after the simulated gateway delay. If the client disconnects
/// first, the order is left unchanged.
pub async fn process(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<PaymentRequest>,
) -> Result<Json<PaymentResponse>> {
    let response = state.store().process_payment(request).await?;

    let order_id = response.order_id.to_string();
    add_breadcrumb(
        "payment",
        "Payment processed",
        Some(&[("order_id", order_id.as_str())]),
    );

    Ok(Json(response))
}
