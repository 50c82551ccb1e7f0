//! Science basics: which ingredients suit a skin type and concern, and which
//! to avoid.

use std::{cmp::Ordering, collections::HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
  catalog::{IngredientRow, MappingTable, ReferenceTable},
  effect::Effect,
  id::{CatalogId, IdKey},
  intersect::{intersect, MatchedIngredient},
  mapping::load_effects,
  messages,
  resolve::resolve_reference,
  selection::Selection,
  store::CatalogStore,
  Error, Result,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScienceBasicsRequest {
  pub skin_type_title:    String,
  pub skin_concern_title: String,
}

/// An ingredient merged with its two effect mappings for the current query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScienceBasicsIngredient {
  pub id:               CatalogId,
  pub name:             String,
  pub description:      Option<String>,
  /// Overall effect (worst case of the two below).
  pub effect:           Effect,
  pub concern_effect:   Effect,
  pub concern_note:     Option<String>,
  pub skin_type_effect: Effect,
  pub skin_type_note:   Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScienceBasicsResponse {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message:     Option<String>,
  pub ingredients: Vec<ScienceBasicsIngredient>,
}

impl ScienceBasicsResponse {
  fn message(message: &str) -> Self {
    Self { message: Some(message.to_owned()), ingredients: Vec::new() }
  }
}

/// Build the science-basics ingredient guide for a skin type and concern.
///
/// Unsure selections, unresolvable titles and empty intersections all produce
/// a response with a message and no ingredients. Only storage failures are
/// errors.
pub async fn science_basics<S: CatalogStore>(
  store: &S,
  request: &ScienceBasicsRequest,
) -> Result<ScienceBasicsResponse> {
  let skin_type = Selection::parse(&request.skin_type_title);
  let concern = Selection::parse(&request.skin_concern_title);

  match (skin_type.is_unsure(), concern.is_unsure()) {
    (true, true) => return Ok(ScienceBasicsResponse::message(messages::PICK_SKIN_TYPE_FIRST)),
    (true, false) => return Ok(ScienceBasicsResponse::message(messages::PICK_SKIN_TYPE)),
    (false, true) => return Ok(ScienceBasicsResponse::message(messages::PICK_CONCERN)),
    (false, false) => {}
  }

  let skin_type_id = resolve_reference(store, ReferenceTable::SkinTypes, &skin_type).await?;
  let concern_id = resolve_reference(store, ReferenceTable::SkinConcerns, &concern).await?;

  let concern_map = load_effects(store, MappingTable::ConcernIngredients, concern_id).await?;
  let skin_type_map = load_effects(store, MappingTable::SkinTypeIngredients, skin_type_id).await?;

  let matched = intersect(&concern_map, &skin_type_map);
  if matched.is_empty() {
    debug!(?skin_type_id, ?concern_id, "no ingredient intersection");
    return Ok(ScienceBasicsResponse::message(messages::NO_MATCHES_YET));
  }

  let ids: Vec<CatalogId> = matched.iter().map(|m| m.id.clone()).collect();
  let rows = store.ingredients_by_ids(&ids).await.map_err(Error::store)?;
  let details: HashMap<IdKey, IngredientRow> = rows
    .into_iter()
    .filter_map(|row| Some((row.id.as_ref()?.key(), row)))
    .collect();

  let mut ingredients: Vec<ScienceBasicsIngredient> = matched
    .into_iter()
    .map(|m| {
      let row = details.get(&m.key);
      assemble(m, row)
    })
    .collect();
  sort_ingredients(&mut ingredients);

  debug!(
    ?skin_type_id,
    ?concern_id,
    count = ingredients.len(),
    "assembled science basics"
  );

  Ok(ScienceBasicsResponse { message: None, ingredients })
}

fn assemble(m: MatchedIngredient, row: Option<&IngredientRow>) -> ScienceBasicsIngredient {
  ScienceBasicsIngredient {
    name:             display_name(&m.id, row),
    description:      row.and_then(|r| non_blank(r.description.as_deref())),
    effect:           m.effect,
    concern_effect:   m.concern.effect,
    concern_note:     m.concern.note,
    skin_type_effect: m.skin_type.effect,
    skin_type_note:   m.skin_type.note,
    id:               m.id,
  }
}

/// Display name: `title`, then `name`, then `ingredient`, then the id itself.
pub fn display_name(id: &CatalogId, row: Option<&IngredientRow>) -> String {
  row
    .and_then(|r| {
      non_blank(r.title.as_deref())
        .or_else(|| non_blank(r.name.as_deref()))
        .or_else(|| non_blank(r.ingredient.as_deref()))
    })
    .unwrap_or_else(|| id.to_string())
}

fn non_blank(s: Option<&str>) -> Option<String> {
  s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}

/// Helpful before avoid, then by name ascending.
pub fn sort_ingredients(ingredients: &mut [ScienceBasicsIngredient]) {
  ingredients.sort_by(|a, b| {
    a.effect
      .cmp(&b.effect)
      .then_with(|| compare_names(&a.name, &b.name))
  });
}

/// Case-insensitive name order, with a byte-wise tiebreak so that names
/// differing only in case still sort deterministically.
fn compare_names(a: &str, b: &str) -> Ordering {
  a.to_lowercase()
    .cmp(&b.to_lowercase())
    .then_with(|| a.cmp(b))
}
