//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Input-state outcomes (unsure selections, empty matches) are not errors;
/// they travel as ordinary responses with a `message`. Anything that lands
/// here is a storage failure and maps to a generic 500.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("engine error: {0}")]
  Engine(#[from] skinrank_core::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    tracing::error!(error = %self, "request failed");
    (
      StatusCode::INTERNAL_SERVER_ERROR,
      Json(json!({ "error": "internal server error" })),
    )
      .into_response()
  }
}
