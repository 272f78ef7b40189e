//! Demo Shop API library.
//!
//! This crate provides the API as a library, allowing the full router to be
//! built in tests without binding a socket.
//!
//! # Modules
//!
//! - [`store`] - Catalog, order ledger and simulated payments behind one lock
//! - [`routes`] - Axum handlers and [`routes::app`], the complete router
//! - [`middleware`] - CORS and request IDs
//! - [`config`] - Environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

pub use routes::app;
pub use state::AppState;
