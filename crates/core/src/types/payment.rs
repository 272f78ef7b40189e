//! Payment request and response bodies.

use serde::{Deserialize, Serialize};

use super::OrderId;

/// Message returned for every successful payment.
pub const PAYMENT_SUCCESS_MESSAGE: &str = "Payment processed successfully";

/// A request to pay for an order.
///
/// `amount` is what the client claims to pay. It is recorded in logs but is
/// not checked against the order total, so it is kept as a plain `f64` that
/// accepts any JSON number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentRequest {
    pub order_id: OrderId,
    pub amount: f64,
}

/// Outcome of a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub success: bool,
    pub message: String,
    pub order_id: OrderId,
}

impl PaymentResponse {
    /// Response for a payment that went through.
    #[must_use]
    pub fn succeeded(order_id: OrderId) -> Self {
        Self {
            success: true,
            message: PAYMENT_SUCCESS_MESSAGE.to_string(),
            order_id,
        }
    }
}
