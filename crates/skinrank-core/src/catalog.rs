//! Catalog row types: the shapes a [`CatalogStore`](crate::store::CatalogStore)
//! hands to the engine.
//!
//! Rows are loosely typed on purpose: every field that storage may leave
//! empty is an `Option`, and nothing here rejects a malformed row. The engine
//! modules decide what a missing value means.

use serde::{Deserialize, Serialize};

use crate::{
  id::{CatalogId, ReferenceId},
  Result,
};

// ─── Reference tables ────────────────────────────────────────────────────────

/// One of the two reference tables a selection title resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceTable {
  SkinTypes,
  SkinConcerns,
}

impl ReferenceTable {
  pub fn table_name(self) -> &'static str {
    match self {
      Self::SkinTypes => "skin_types",
      Self::SkinConcerns => "skin_concerns",
    }
  }
}

/// A skin type or skin concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
  pub id:    ReferenceId,
  pub title: String,
}

/// Pick the entry `title` refers to: a case-insensitive exact match first,
/// then the first entry whose title contains it. Folding is Unicode-aware and
/// surrounding whitespace is ignored on both sides. Entries are searched in
/// the order given, so callers pass them sorted by id.
pub fn match_title<'a>(entries: &'a [ReferenceEntry], title: &str) -> Option<&'a ReferenceEntry> {
  let needle = title.trim().to_lowercase();
  if needle.is_empty() {
    return None;
  }
  let folded: Vec<String> = entries.iter().map(|e| e.title.trim().to_lowercase()).collect();
  folded
    .iter()
    .position(|t| *t == needle)
    .or_else(|| folded.iter().position(|t| t.contains(&needle)))
    .map(|i| &entries[i])
}

// ─── Effect mappings ─────────────────────────────────────────────────────────

/// One of the two many-to-many ingredient effect tables. They share a shape
/// and are never merged at the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingTable {
  ConcernIngredients,
  SkinTypeIngredients,
}

impl MappingTable {
  pub fn table_name(self) -> &'static str {
    match self {
      Self::ConcernIngredients => "skin_concern_ingredients",
      Self::SkinTypeIngredients => "skin_type_ingredients",
    }
  }

  /// The column referencing the reference table.
  pub fn foreign_key(self) -> &'static str {
    match self {
      Self::ConcernIngredients => "skin_concern_id",
      Self::SkinTypeIngredients => "skin_type_id",
    }
  }
}

/// A raw row of a mapping table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectRow {
  pub ingredient_id: Option<CatalogId>,
  pub effect:        Option<String>,
  pub note:          Option<String>,
}

// ─── Ingredients, products, reviews ──────────────────────────────────────────

/// A raw ingredient row. Older rows carry their display name in `title` or
/// `ingredient` rather than `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientRow {
  pub id:          Option<CatalogId>,
  pub title:       Option<String>,
  pub name:        Option<String>,
  pub ingredient:  Option<String>,
  pub description: Option<String>,
}

/// Membership of an ingredient in a product. No effect is attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductIngredientRow {
  pub product_id:    Option<CatalogId>,
  pub ingredient_id: Option<CatalogId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductRow {
  pub id:    Option<CatalogId>,
  pub title: Option<String>,
  pub brand: Option<String>,
}

/// A review scoped to one (product, skin type, concern) triple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewRow {
  pub product_id:             Option<CatalogId>,
  pub review_link:            Option<String>,
  pub review_text:            Option<String>,
  pub sentiment:              Option<String>,
  pub skin_type_reasoning:    Option<String>,
  pub skin_concern_reasoning: Option<String>,
}

// ─── Import format ───────────────────────────────────────────────────────────

/// A complete catalog snapshot, as loaded from a JSON file by storage
/// backends that support importing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
  pub skin_types:          Vec<ReferenceEntry>,
  pub skin_concerns:       Vec<ReferenceEntry>,
  pub ingredients:         Vec<CatalogIngredient>,
  pub concern_effects:     Vec<CatalogConcernEffect>,
  pub skin_type_effects:   Vec<CatalogSkinTypeEffect>,
  pub products:            Vec<CatalogProduct>,
  pub product_ingredients: Vec<CatalogProductIngredient>,
  pub reviews:             Vec<CatalogReview>,
}

impl Catalog {
  pub fn from_json(raw: &str) -> Result<Self> { Ok(serde_json::from_str(raw)?) }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogIngredient {
  pub id:          CatalogId,
  pub name:        Option<String>,
  #[serde(default)]
  pub title:       Option<String>,
  #[serde(default)]
  pub ingredient:  Option<String>,
  #[serde(default)]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConcernEffect {
  pub skin_concern_id: ReferenceId,
  pub ingredient_id:   Option<CatalogId>,
  #[serde(default)]
  pub effect:          Option<String>,
  #[serde(default)]
  pub note:            Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSkinTypeEffect {
  pub skin_type_id:  ReferenceId,
  pub ingredient_id: Option<CatalogId>,
  #[serde(default)]
  pub effect:        Option<String>,
  #[serde(default)]
  pub note:          Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogProduct {
  pub id:    CatalogId,
  pub title: String,
  #[serde(default)]
  pub brand: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogProductIngredient {
  pub product_id:    CatalogId,
  pub ingredient_id: CatalogId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogReview {
  pub product_id:             CatalogId,
  pub skin_type_id:           ReferenceId,
  pub skin_concern_id:        ReferenceId,
  #[serde(default)]
  pub review_link:            Option<String>,
  #[serde(default)]
  pub review_text:            Option<String>,
  #[serde(default)]
  pub sentiment:              Option<String>,
  #[serde(default)]
  pub skin_type_reasoning:    Option<String>,
  #[serde(default)]
  pub skin_concern_reasoning: Option<String>,
}
