//! Demo Shop Core - Shared domain types.
//!
//! This crate provides the types used by the demo shop API and its tests:
//! - `api` - HTTP/JSON service (catalog, order ledger, simulated payments)
//! - `integration-tests` - End-to-end tests against the in-process router
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no locking,
//! no HTTP. Order totals are computed here so that the arithmetic can be tested
//! without standing up a store.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, products, orders, payments, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
