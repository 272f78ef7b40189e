//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use demo_shop_core::{Product, ProductId};
use tracing::instrument;

use crate::error::{AppError, INVALID_PRODUCT_ID, Result};
use crate::state::AppState;

/// List every product in the catalog.
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store().list_products().await)
}

/// Show a single product.
///
/// The ID segment is taken as a raw string so that a non-integer ID gets the
/// same plain-text 400 as every other bad request.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let id: ProductId = id
        .parse()
        .map_err(|_| AppError::BadRequest(INVALID_PRODUCT_ID.to_string()))?;

    let product = state.store().get_product(id).await?;
    Ok(Json(product))
}
