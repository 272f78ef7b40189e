//! Simulated payment processing.
//!
//! There is no real gateway. A payment waits for a fixed delay, standing in
//! for the gateway round trip, and then always succeeds.

use std::time::Duration;

use demo_shop_core::{OrderId, PaymentRequest, PaymentResponse};
use rust_decimal::{Decimal, prelude::FromPrimitive};
use tracing::instrument;

use super::{Store, StoreError};

/// Default latency of a simulated payment.
pub const DEFAULT_PAYMENT_DELAY: Duration = Duration::from_secs(1);

/// A payment processor that always approves after a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedProcessor {
    delay: Duration,
}

impl SimulatedProcessor {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Charge `amount` for an order.
    ///
    /// Suspends the calling task for the configured delay; never blocks the
    /// thread. Dropping the future before it completes cancels the charge.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis()))]
    pub async fn charge(&self, order_id: OrderId, amount: f64) {
        tracing::debug!("Contacting simulated payment gateway");
        tokio::time::sleep(self.delay).await;
    }
}

impl Default for SimulatedProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_PAYMENT_DELAY)
    }
}

impl Store {
    /// Pay for an order and mark it paid.
    ///
    /// The claimed amount is not compared with the order total, and paying an
    /// order that is already paid succeeds again. The store lock is released
    /// while the processor runs; only the status change happens under it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::OrderNotFound` if the order does not exist, either
    /// before the charge or after it (when the store was reset meanwhile).
    #[instrument(skip(self), fields(order_id = %request.order_id, amount = request.amount))]
    pub async fn process_payment(
        &self,
        request: PaymentRequest,
    ) -> Result<PaymentResponse, StoreError> {
        let (order, generation) = {
            let state = self.lock().await;
            let order = state
                .ledger
                .get_order(request.order_id)
                .cloned()
                .ok_or(StoreError::OrderNotFound(request.order_id))?;
            (order, state.generation)
        };
        if Decimal::from_f64(request.amount) != Some(order.total) {
            tracing::debug!(
                total = %order.total,
                "Payment amount differs from order total; accepting anyway"
            );
        }

        self.processor.charge(order.id, request.amount).await;

        let mut state = self.lock().await;
        if state.generation != generation {
            return Err(StoreError::OrderNotFound(order.id));
        }
        let paid = state
            .ledger
            .mark_paid(order.id)
            .ok_or(StoreError::OrderNotFound(order.id))?;
        let response = PaymentResponse::succeeded(paid.id);
        drop(state);

        tracing::info!("Payment processed");
        Ok(response)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use demo_shop_core::{OrderItem, OrderStatus, ProductId};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_charge_waits_for_delay() {
        let processor = SimulatedProcessor::default();
        let start = tokio::time::Instant::now();

        processor.charge(OrderId::new(1), 1.0).await;

        assert!(start.elapsed() >= DEFAULT_PAYMENT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_process_payment_marks_order_paid() {
        let store = Store::new(DEFAULT_PAYMENT_DELAY);
        let order = store
            .create_order(vec![OrderItem::new(ProductId::new(1), 2)])
            .await;

        let response = store
            .process_payment(PaymentRequest {
                order_id: order.id,
                amount: 199.98,
            })
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.order_id, order.id);
        assert_eq!(store.get_order(order.id).await.unwrap().status, OrderStatus::Paid);
    }

    #[tokio::test(start_paused = true)]
    async fn test_process_payment_ignores_amount_mismatch() {
        let store = Store::new(DEFAULT_PAYMENT_DELAY);
        let order = store
            .create_order(vec![OrderItem::new(ProductId::new(2), 1)])
            .await;

        let response = store
            .process_payment(PaymentRequest {
                order_id: order.id,
                amount: 1.0,
            })
            .await
            .unwrap();

        assert!(response.success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeat_payment_stays_paid() {
        let store = Store::new(DEFAULT_PAYMENT_DELAY);
        let order = store.create_order(Vec::new()).await;
        let request = PaymentRequest {
            order_id: order.id,
            amount: 0.0,
        };

        store.process_payment(request).await.unwrap();
        let again = store.process_payment(request).await.unwrap();

        assert!(again.success);
        assert_eq!(store.get_order(order.id).await.unwrap().status, OrderStatus::Paid);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_order_fails_without_waiting() {
        let store = Store::new(DEFAULT_PAYMENT_DELAY);
        let order = store.create_order(Vec::new()).await;
        let start = tokio::time::Instant::now();

        let result = store
            .process_payment(PaymentRequest {
                order_id: OrderId::new(99),
                amount: 1.0,
            })
            .await;

        assert_eq!(result, Err(StoreError::OrderNotFound(OrderId::new(99))));
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(
            store.get_order(order.id).await.unwrap().status,
            OrderStatus::Pending
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_payment_leaves_order_pending() {
        let store = Store::new(DEFAULT_PAYMENT_DELAY);
        let order = store.create_order(Vec::new()).await;

        let result = tokio::time::timeout(
            DEFAULT_PAYMENT_DELAY / 2,
            store.process_payment(PaymentRequest {
                order_id: order.id,
                amount: 0.0,
            }),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(
            store.get_order(order.id).await.unwrap().status,
            OrderStatus::Pending
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_lock_is_free_during_delay() {
        let store = std::sync::Arc::new(Store::new(DEFAULT_PAYMENT_DELAY));
        let order = store.create_order(Vec::new()).await;

        let paying = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .process_payment(PaymentRequest {
                        order_id: order.id,
                        amount: 0.0,
                    })
                    .await
            })
        };
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        let start = tokio::time::Instant::now();
        let second = store.create_order(Vec::new()).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(second.id, OrderId::new(2));

        paying.await.unwrap().unwrap();
        assert_eq!(store.get_order(order.id).await.unwrap().status, OrderStatus::Paid);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_during_payment_reports_not_found() {
        let store = std::sync::Arc::new(Store::new(DEFAULT_PAYMENT_DELAY));
        let order = store.create_order(Vec::new()).await;

        let paying = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .process_payment(PaymentRequest {
                        order_id: order.id,
                        amount: 0.0,
                    })
                    .await
            })
        };
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        store.reset().await;

        let result = paying.await.unwrap();
        assert_eq!(result, Err(StoreError::OrderNotFound(order.id)));
        assert!(store.list_orders().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_payment_does_not_pay_order_created_after_reset() {
        let store = std::sync::Arc::new(Store::new(DEFAULT_PAYMENT_DELAY));
        let order = store.create_order(Vec::new()).await;

        let paying = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .process_payment(PaymentRequest {
                        order_id: order.id,
                        amount: 0.0,
                    })
                    .await
            })
        };
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        store.reset().await;
        let fresh = store.create_order(Vec::new()).await;
        assert_eq!(fresh.id, order.id);

        let result = paying.await.unwrap();
        assert_eq!(result, Err(StoreError::OrderNotFound(order.id)));
        assert_eq!(
            store.get_order(fresh.id).await.unwrap().status,
            OrderStatus::Pending
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_process_payment_accepts_huge_amount() {
        let store = Store::new(Duration::ZERO);
        let order = store.create_order(Vec::new()).await;

        let response = store
            .process_payment(PaymentRequest {
                order_id: order.id,
                amount: 1e30,
            })
            .await
            .unwrap();

        assert!(response.success);
    }
}
