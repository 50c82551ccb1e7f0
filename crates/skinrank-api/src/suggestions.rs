//! Handlers for `/suggested-products`.
//!
//! | Method | Path | Input |
//! |--------|------|-------|
//! | `POST` | `/suggested-products` | Body: `{"skinTypeTitle":"Oily","skinConcernTitle":"Acne","limit":3}` |
//! | `GET`  | `/suggested-products` | `?skinTypeTitle=...&skinConcernTitle=...[&limit=N]` |
//!
//! `limit` is clamped to `[1, 3]`. Floats and numeric strings are accepted;
//! anything else falls back to the default.

use axum::{
  Json,
  extract::{Query, State},
};
use skinrank_core::{
  store::CatalogStore,
  suggest::{SuggestedProductsRequest, SuggestedProductsResponse, suggest_products},
};

use crate::{AppState, error::ApiError};

/// `POST /suggested-products`
pub async fn body<S>(
  State(state): State<AppState<S>>,
  Json(request): Json<SuggestedProductsRequest>,
) -> Result<Json<SuggestedProductsResponse>, ApiError>
where
  S: CatalogStore,
{
  let response = suggest_products(state.store.as_ref(), &state.policy, &request).await?;
  Ok(Json(response))
}

/// `GET /suggested-products?skinTypeTitle=...&skinConcernTitle=...[&limit=N]`
pub async fn query<S>(
  State(state): State<AppState<S>>,
  Query(request): Query<SuggestedProductsRequest>,
) -> Result<Json<SuggestedProductsResponse>, ApiError>
where
  S: CatalogStore,
{
  let response = suggest_products(state.store.as_ref(), &state.policy, &request).await?;
  Ok(Json(response))
}
