//! Loading ingredient effect mappings for one skin type or concern.

use std::collections::BTreeMap;

use crate::{
  catalog::{EffectRow, MappingTable},
  effect::Effect,
  id::{CatalogId, IdKey, ReferenceId},
  store::CatalogStore,
  Error, Result,
};

/// One ingredient's effect relative to a single skin type or concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectEntry {
  pub ingredient_id: CatalogId,
  pub effect:        Effect,
  pub note:          Option<String>,
}

impl EffectEntry {
  /// Interpret a raw mapping row. Rows without an ingredient id are dropped;
  /// a missing effect falls back to the default policy.
  pub fn from_row(row: EffectRow) -> Option<Self> {
    let ingredient_id = row.ingredient_id?;
    if ingredient_id.key().is_empty() {
      return None;
    }
    Some(Self {
      effect: Effect::from_raw(row.effect.as_deref()),
      note: row.note,
      ingredient_id,
    })
  }
}

/// Effect entries keyed by canonical ingredient key. When a mapping lists an
/// ingredient twice, the last row wins.
pub type EffectMap = BTreeMap<IdKey, EffectEntry>;

/// Load every effect row of `mapping` that references `reference_id`.
///
/// A `None` id (unresolved or unsure) short-circuits to an empty map without
/// querying.
pub async fn load_effects<S: CatalogStore>(
  store: &S,
  mapping: MappingTable,
  reference_id: Option<ReferenceId>,
) -> Result<EffectMap> {
  let Some(reference_id) = reference_id else {
    return Ok(EffectMap::new());
  };

  let rows = store
    .effect_rows(mapping, reference_id)
    .await
    .map_err(Error::store)?;

  Ok(
    rows
      .into_iter()
      .filter_map(EffectEntry::from_row)
      .map(|e| (e.ingredient_id.key(), e))
      .collect(),
  )
}
