//! Orders, order items, and total computation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderId, OrderStatus, ProductId};

/// A single line of an order.
///
/// Neither field is validated: the product may not exist in the catalog and
/// the quantity may be zero or negative. Missing fields decode as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl OrderItem {
    /// Create a new order item.
    #[must_use]
    pub const fn new(product_id: ProductId, quantity: i64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A customer order as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    /// Total computed from catalog prices at creation time. Never re-priced.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Body of an order submission.
///
/// Clients may post a whole `Order`; everything except `items` is ignored and
/// filled in by the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Sum `price_of(product) * quantity` over `items`, in item order.
///
/// `price_of` is expected to return zero for products it does not know, so
/// unknown products contribute nothing to the total.
pub fn order_total<F>(items: &[OrderItem], price_of: F) -> Decimal
where
    F: Fn(ProductId) -> Decimal,
{
    items.iter().fold(Decimal::ZERO, |total, item| {
        total + price_of(item.product_id) * Decimal::from(item.quantity)
    })
}
