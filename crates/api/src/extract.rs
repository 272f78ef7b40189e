//! Request extractors.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::{AppError, INVALID_BODY};

/// JSON request body.
///
/// Unlike `axum::Json`, this does not require a `Content-Type` header, and
/// every failure (unreadable body, invalid JSON, wrong field types) is a
/// 400 with the same plain-text message.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection, "Failed to read request body");
            AppError::BadRequest(INVALID_BODY.to_string())
        })?;

        serde_json::from_slice(&bytes).map(Self).map_err(|err| {
            tracing::debug!(error = %err, "Failed to decode request body");
            AppError::BadRequest(INVALID_BODY.to_string())
        })
    }
}
