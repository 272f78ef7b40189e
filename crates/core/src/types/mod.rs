//! Core types for the demo shop.
//!
//! This module provides type-safe wrappers and wire types for the catalog,
//! the order ledger, and payment processing.

pub mod id;
pub mod order;
pub mod payment;
pub mod product;
pub mod status;

pub use id::*;
pub use order::{CreateOrderRequest, Order, OrderItem, order_total};
pub use payment::{PaymentRequest, PaymentResponse};
pub use product::Product;
pub use status::*;
