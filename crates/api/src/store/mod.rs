//! In-memory shop state: catalog, order ledger, and simulated payments.
//!
//! # Locking
//!
//! A single [`tokio::sync::Mutex`] guards both the catalog and the ledger,
//! including the order ID counter. Every operation takes the lock once,
//! copies out what it needs and releases it. The simulated payment delay in
//! [`Store::process_payment`] runs with the lock released.

pub mod catalog;
pub mod ledger;
pub mod payment;

use std::time::Duration;

use chrono::Utc;
use demo_shop_core::{Order, OrderId, OrderItem, Product, ProductId};
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};
use tracing::instrument;

pub use catalog::Catalog;
pub use ledger::Ledger;
pub use payment::SimulatedProcessor;

/// Errors returned by store lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("product {0} not found")]
    ProductNotFound(ProductId),
    #[error("order {0} not found")]
    OrderNotFound(OrderId),
}

/// Process-lifetime shop state shared by all request handlers.
#[derive(Debug)]
pub struct Store {
    state: Mutex<StoreState>,
    processor: SimulatedProcessor,
}

#[derive(Debug, Default)]
struct StoreState {
    catalog: Catalog,
    ledger: Ledger,
    /// Bumped by every reset. Order IDs are only unique within a generation.
    generation: u64,
}

impl Store {
    /// Create a store with the seed catalog and an empty ledger.
    ///
    /// `payment_delay` is how long each simulated payment takes.
    #[must_use]
    pub fn new(payment_delay: Duration) -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            processor: SimulatedProcessor::new(payment_delay),
        }
    }

    /// All products in catalog order.
    pub async fn list_products(&self) -> Vec<Product> {
        self.lock().await.catalog.list_products().to_vec()
    }

    /// Look up a single product.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProductNotFound` if the catalog has no such product.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, StoreError> {
        self.lock()
            .await
            .catalog
            .get_product(id)
            .cloned()
            .ok_or(StoreError::ProductNotFound(id))
    }

    /// Record a new pending order priced against the current catalog.
    #[instrument(skip(self, items), fields(item_count = items.len()))]
    pub async fn create_order(&self, items: Vec<OrderItem>) -> Order {
        let mut state = self.lock().await;
        let StoreState { catalog, ledger, .. } = &mut *state;
        let order = ledger.create_order(items, catalog, Utc::now());
        drop(state);

        tracing::info!(order_id = %order.id, total = %order.total, "Order created");
        order
    }

    /// All orders, oldest first.
    pub async fn list_orders(&self) -> Vec<Order> {
        self.lock().await.ledger.list_orders().to_vec()
    }

    /// Look up a single order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::OrderNotFound` if no order has this ID.
    pub async fn get_order(&self, id: OrderId) -> Result<Order, StoreError> {
        self.lock()
            .await
            .ledger
            .get_order(id)
            .cloned()
            .ok_or(StoreError::OrderNotFound(id))
    }

    /// Restore the seed catalog and empty the ledger.
    ///
    /// The next order created afterwards gets ID 1 again. Meant for test
    /// isolation; not reachable over HTTP.
    pub async fn reset(&self) {
        let mut state = self.lock().await;
        *state = StoreState {
            generation: state.generation.wrapping_add(1),
            ..StoreState::default()
        };
        drop(state);
        tracing::debug!("Store reset to seed state");
    }

    async fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().await
    }
}
