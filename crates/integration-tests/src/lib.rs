//! Integration tests for the demo shop API.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p demo-shop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog` - Product listing and lookup
//! - `orders` - Order creation, totals and numbering
//! - `payment` - Payment flow and status transitions
//! - `cors` - Cross-origin policy and response headers
//!
//! The router is built in-process with [`demo_shop_api::app`] and driven with
//! `tower::ServiceExt::oneshot`; no socket is bound. Each [`TestApp`] owns a
//! fresh store, so tests never share orders.

use axum::{
    Router,
    body::{Body, Bytes, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use demo_shop_api::{AppState, app, config::ApiConfig, store::Store};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tower::ServiceExt;

/// Origin the browser client is served from.
pub const CLIENT_ORIGIN: &str = "http://localhost:3000";

/// An in-process API with its own store.
#[derive(Clone)]
pub struct TestApp {
    state: AppState,
    router: Router,
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Decode the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON for `T`.
    #[must_use]
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|err| {
            panic!(
                "response body is not the expected JSON ({err}): {}",
                self.text()
            )
        })
    }

    /// The body as UTF-8 text.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Value of a response header, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// An app whose payments complete immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ApiConfig {
            payment_delay: Duration::ZERO,
            ..ApiConfig::default()
        })
    }

    /// An app built from an explicit configuration.
    #[must_use]
    pub fn with_config(config: ApiConfig) -> Self {
        let state = AppState::new(config);
        let router = app(state.clone());
        Self { state, router }
    }

    /// Direct access to the store, for setup and reset.
    #[must_use]
    pub fn store(&self) -> &Store {
        self.state.store()
    }

    /// Send a request through the full middleware stack.
    ///
    /// # Panics
    ///
    /// Panics if the body cannot be buffered.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|never| match never {});

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// `GET uri`.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(request(Method::GET, uri, Body::empty())).await
    }

    /// `POST uri` with a JSON body.
    pub async fn post_json(&self, uri: &str, body: &serde_json::Value) -> TestResponse {
        let mut request = request(Method::POST, uri, Body::from(body.to_string()));
        request.headers_mut().insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        self.send(request).await
    }

    /// `POST uri` with an arbitrary body and no content type.
    pub async fn post_raw(&self, uri: &str, body: &'static str) -> TestResponse {
        self.send(request(Method::POST, uri, Body::from(body))).await
    }
}

/// Build a request.
///
/// # Panics
///
/// Panics if `uri` is not a valid URI.
#[must_use]
pub fn request(method: Method, uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .expect("Failed to build request")
}
