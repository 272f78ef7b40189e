//! HTTP middleware stack for the API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, capture errors and transactions)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (runs inside the span, so the ID lands on it)
//! 4. CORS (answers preflight requests itself, so preflights still get an ID)

pub mod cors;
pub mod request_id;

pub use cors::cors_layer;
pub use request_id::request_id_middleware;
