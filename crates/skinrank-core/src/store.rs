//! The `CatalogStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `skinrank-store-sqlite`).
//! The engine and the HTTP layer depend on this abstraction, not on any
//! concrete backend. Every method is a read; nothing in this crate writes to
//! the catalog.

use std::future::Future;

use crate::{
  catalog::{
    EffectRow, IngredientRow, MappingTable, ProductIngredientRow, ProductRow,
    ReferenceEntry, ReferenceTable, ReviewRow,
  },
  id::{CatalogId, ReferenceId},
};

/// Read access to the skincare catalog.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait CatalogStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Reference tables ──────────────────────────────────────────────────

  /// Find the first row of `table` whose title matches `title`
  /// case-insensitively. Returns `None` if nothing matches.
  fn find_reference<'a>(
    &'a self,
    table: ReferenceTable,
    title: &'a str,
  ) -> impl Future<Output = Result<Option<ReferenceEntry>, Self::Error>> + Send + 'a;

  /// List every row of `table`, ordered by title.
  fn list_references(
    &self,
    table: ReferenceTable,
  ) -> impl Future<Output = Result<Vec<ReferenceEntry>, Self::Error>> + Send + '_;

  // ── Effect mappings ───────────────────────────────────────────────────

  /// All rows of `mapping` whose foreign key equals `reference_id`.
  fn effect_rows(
    &self,
    mapping: MappingTable,
    reference_id: ReferenceId,
  ) -> impl Future<Output = Result<Vec<EffectRow>, Self::Error>> + Send + '_;

  // ── Bulk fetches ──────────────────────────────────────────────────────

  /// Ingredient rows whose id is in `ids`.
  fn ingredients_by_ids<'a>(
    &'a self,
    ids: &'a [CatalogId],
  ) -> impl Future<Output = Result<Vec<IngredientRow>, Self::Error>> + Send + 'a;

  /// Product/ingredient membership rows whose ingredient is in
  /// `ingredient_ids`.
  fn product_ingredients<'a>(
    &'a self,
    ingredient_ids: &'a [CatalogId],
  ) -> impl Future<Output = Result<Vec<ProductIngredientRow>, Self::Error>> + Send + 'a;

  /// Reviews for any of `product_ids`, scoped to exactly this skin type and
  /// concern.
  fn reviews_for<'a>(
    &'a self,
    product_ids: &'a [CatalogId],
    skin_type_id: ReferenceId,
    concern_id: ReferenceId,
  ) -> impl Future<Output = Result<Vec<ReviewRow>, Self::Error>> + Send + 'a;

  /// Product rows whose id is in `ids`.
  fn products_by_ids<'a>(
    &'a self,
    ids: &'a [CatalogId],
  ) -> impl Future<Output = Result<Vec<ProductRow>, Self::Error>> + Send + 'a;
}
