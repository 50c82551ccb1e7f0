//! Error types for `skinrank-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The backing store failed. Every storage failure surfaces through this
  /// variant regardless of cause.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("catalog parse error: {0}")]
  Catalog(#[from] serde_json::Error),
}

impl Error {
  pub(crate) fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
