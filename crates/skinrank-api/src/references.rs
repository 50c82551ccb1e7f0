//! Handlers for the selection lists a client offers the user.
//!
//! | Method | Path |
//! |--------|------|
//! | `GET`  | `/skin-types` |
//! | `GET`  | `/skin-concerns` |

use axum::{Json, extract::State};
use skinrank_core::{
  catalog::{ReferenceEntry, ReferenceTable},
  store::CatalogStore,
};

use crate::{AppState, error::ApiError};

async fn list<S: CatalogStore>(
  state: &AppState<S>,
  table: ReferenceTable,
) -> Result<Json<Vec<ReferenceEntry>>, ApiError> {
  let entries = state
    .store
    .list_references(table)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(entries))
}

/// `GET /skin-types`
pub async fn skin_types<S: CatalogStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<ReferenceEntry>>, ApiError> {
  list(&state, ReferenceTable::SkinTypes).await
}

/// `GET /skin-concerns`
pub async fn skin_concerns<S: CatalogStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<ReferenceEntry>>, ApiError> {
  list(&state, ReferenceTable::SkinConcerns).await
}
