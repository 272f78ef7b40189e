//! Append-only order ledger.

use chrono::{DateTime, Utc};
use demo_shop_core::{Order, OrderId, OrderItem, OrderStatus, order_total};

use super::catalog::Catalog;

/// Orders in creation order plus the counter that numbers them.
///
/// Orders are never removed, and IDs are handed out in ascending order, so
/// `orders` is always sorted by ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    orders: Vec<Order>,
    next_id: OrderId,
}

impl Ledger {
    /// An empty ledger whose first order will be number 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_id: OrderId::FIRST,
        }
    }

    /// Price `items` against `catalog`, record a pending order and return it.
    ///
    /// Items are stored exactly as given; unknown products add nothing to the
    /// total and non-positive quantities are kept.
    pub fn create_order(
        &mut self,
        items: Vec<OrderItem>,
        catalog: &Catalog,
        created_at: DateTime<Utc>,
    ) -> Order {
        let total = order_total(&items, |id| catalog.price_of(id));
        let id = self.next_id;
        self.next_id = id.next();

        let order = Order {
            id,
            items,
            total,
            status: OrderStatus::Pending,
            created_at,
        };
        self.orders.push(order.clone());
        order
    }

    /// All orders, oldest first.
    #[must_use]
    pub fn list_orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn get_order(&self, id: OrderId) -> Option<&Order> {
        self.position(id).and_then(|index| self.orders.get(index))
    }

    /// Mark an order as paid.
    ///
    /// Paying an order that is already paid leaves it paid.
    pub fn mark_paid(&mut self, id: OrderId) -> Option<&Order> {
        let order = self.position(id).and_then(|index| self.orders.get_mut(index))?;
        order.status = OrderStatus::Paid;
        Some(order)
    }

    /// The ID the next order will receive.
    #[must_use]
    pub const fn next_id(&self) -> OrderId {
        self.next_id
    }

    fn position(&self, id: OrderId) -> Option<usize> {
        self.orders
            .binary_search_by_key(&id, |order| order.id)
            .ok()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
