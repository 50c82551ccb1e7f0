//! JSON REST API for skinrank.
//!
//! Exposes an axum [`Router`] backed by any
//! [`skinrank_core::store::CatalogStore`]. TLS, CORS and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", skinrank_api::api_router(state))
//! ```

pub mod error;
pub mod references;
pub mod science;
pub mod suggestions;

use std::sync::Arc;

use axum::{Router, routing::get};
use skinrank_core::{store::CatalogStore, suggest::SuggestionPolicy};

pub use error::ApiError;

/// Shared state threaded through all handlers.
#[derive(Clone)]
pub struct AppState<S: CatalogStore> {
  pub store:  Arc<S>,
  pub policy: SuggestionPolicy,
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  Router::new()
    // Analyses (POST with a JSON body, GET with query params)
    .route(
      "/science-basics",
      get(science::query::<S>).post(science::body::<S>),
    )
    .route(
      "/suggested-products",
      get(suggestions::query::<S>).post(suggestions::body::<S>),
    )
    // Selection lists
    .route("/skin-types", get(references::skin_types::<S>))
    .route("/skin-concerns", get(references::skin_concerns::<S>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
