//! Handlers for `/science-basics`.
//!
//! | Method | Path | Input |
//! |--------|------|-------|
//! | `POST` | `/science-basics` | Body: `{"skinTypeTitle":"Oily","skinConcernTitle":"Acne"}` |
//! | `GET`  | `/science-basics` | `?skinTypeTitle=...&skinConcernTitle=...` |

use axum::{
  Json,
  extract::{Query, State},
};
use skinrank_core::{
  science::{ScienceBasicsRequest, ScienceBasicsResponse, science_basics},
  store::CatalogStore,
};

use crate::{AppState, error::ApiError};

/// `POST /science-basics`
pub async fn body<S>(
  State(state): State<AppState<S>>,
  Json(request): Json<ScienceBasicsRequest>,
) -> Result<Json<ScienceBasicsResponse>, ApiError>
where
  S: CatalogStore,
{
  Ok(Json(science_basics(state.store.as_ref(), &request).await?))
}

/// `GET /science-basics?skinTypeTitle=...&skinConcernTitle=...`
pub async fn query<S>(
  State(state): State<AppState<S>>,
  Query(request): Query<ScienceBasicsRequest>,
) -> Result<Json<ScienceBasicsResponse>, ApiError>
where
  S: CatalogStore,
{
  Ok(Json(science_basics(state.store.as_ref(), &request).await?))
}
