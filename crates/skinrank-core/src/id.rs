//! Catalog identifiers.
//!
//! Ingredient and product identifiers arrive from storage as either integers
//! or text. [`CatalogId::key`] is the one place they are folded into a
//! canonical string; the engine joins, intersects and tallies on keys and only
//! turns back to the original [`CatalogId`] when emitting a response.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a reference row (a skin type or a skin concern).
pub type ReferenceId = i64;

/// An ingredient or product identifier as stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogId {
  Int(i64),
  Text(String),
}

/// Canonical string form of a [`CatalogId`].
pub type IdKey = String;

impl CatalogId {
  /// Build an identifier from text, returning `None` when the text is blank.
  ///
  /// Text that is a plain decimal integer is kept as text; `key()` makes the
  /// two forms compare equal.
  pub fn from_text(s: &str) -> Option<Self> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
      None
    } else {
      Some(Self::Text(trimmed.to_owned()))
    }
  }

  /// Canonical join key. Integer-valued text folds to the integer's decimal
  /// form, so `101`, `"101"` and `" 0101 "` share the key `"101"`.
  pub fn key(&self) -> IdKey {
    match self {
      Self::Int(n) => n.to_string(),
      Self::Text(s) => {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
          Ok(n) => n.to_string(),
          Err(_) => trimmed.to_owned(),
        }
      }
    }
  }
}

impl From<i64> for CatalogId {
  fn from(n: i64) -> Self { Self::Int(n) }
}

impl fmt::Display for CatalogId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Int(n) => write!(f, "{n}"),
      Self::Text(s) => f.write_str(s.trim()),
    }
  }
}
