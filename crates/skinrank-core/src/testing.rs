//! In-memory [`CatalogStore`] used by the engine unit tests.

use thiserror::Error;

use crate::{
  catalog::{
    match_title, EffectRow, IngredientRow, MappingTable, ProductIngredientRow, ProductRow,
    ReferenceEntry, ReferenceTable, ReviewRow,
  },
  id::{CatalogId, ReferenceId},
  store::CatalogStore,
};

#[derive(Debug, Error)]
#[error("memory store unavailable")]
pub struct Unavailable;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  pub fail:                bool,
  pub skin_types:          Vec<ReferenceEntry>,
  pub skin_concerns:       Vec<ReferenceEntry>,
  pub concern_effects:     Vec<(ReferenceId, EffectRow)>,
  pub skin_type_effects:   Vec<(ReferenceId, EffectRow)>,
  pub ingredients:         Vec<IngredientRow>,
  pub products:            Vec<ProductRow>,
  /// `(product_id, ingredient_id)`
  pub product_ingredients: Vec<(i64, i64)>,
  /// `(skin_type_id, concern_id, review)`
  pub reviews:             Vec<(ReferenceId, ReferenceId, ReviewRow)>,
}

fn entry(id: ReferenceId, title: &str) -> ReferenceEntry {
  ReferenceEntry { id, title: title.into() }
}

fn effect(ingredient: i64, effect: &str, note: Option<&str>) -> EffectRow {
  EffectRow {
    ingredient_id: Some(CatalogId::Int(ingredient)),
    effect:        Some(effect.into()),
    note:          note.map(Into::into),
  }
}

fn ingredient(id: i64, name: &str, description: Option<&str>) -> IngredientRow {
  IngredientRow {
    id: Some(CatalogId::Int(id)),
    name: Some(name.into()),
    description: description.map(Into::into),
    ..Default::default()
  }
}

fn product(id: i64, title: &str, brand: Option<&str>) -> ProductRow {
  ProductRow {
    id:    Some(CatalogId::Int(id)),
    title: Some(title.into()),
    brand: brand.map(Into::into),
  }
}

fn review(product_id: i64, sentiment: &str, text: &str) -> ReviewRow {
  ReviewRow {
    product_id:             Some(CatalogId::Int(product_id)),
    review_link:            Some(format!("https://reddit.com/r/SkincareAddiction/{product_id}")),
    review_text:            Some(text.into()),
    sentiment:              Some(sentiment.into()),
    skin_type_reasoning:    None,
    skin_concern_reasoning: None,
  }
}

impl MemoryStore {
  /// Acne (7) / Oily (3) catalog:
  ///
  /// - concern: 101 helpful, 102 avoid, 103 helpful
  /// - skin type: 101 helpful, 102 helpful, 104 avoid
  /// - P1 {101} reviewed for Oily+Acne, P2 {101, 102}, P3 {101} reviewed for
  ///   Dry+Acne only
  pub fn example() -> Self {
    Self {
      fail:                false,
      skin_types:          vec![entry(1, "Dry"), entry(3, "Oily")],
      skin_concerns:       vec![entry(7, "Acne"), entry(8, "Redness")],
      concern_effects:     vec![
        (7, effect(101, "HELPFUL", None)),
        (7, effect(102, "AVOID", Some("can clog pores"))),
        (7, effect(103, "HELPFUL", None)),
        (8, effect(104, "HELPFUL", None)),
      ],
      skin_type_effects:   vec![
        (3, effect(101, "HELPFUL", None)),
        (3, effect(102, "HELPFUL", None)),
        (3, effect(104, "AVOID", None)),
      ],
      ingredients:         vec![
        ingredient(101, "Niacinamide", Some("Vitamin B3.")),
        ingredient(102, "Coconut Oil", None),
        ingredient(103, "Salicylic Acid", None),
        ingredient(104, "Shea Butter", None),
      ],
      products:            vec![
        product(1, "Clear Serum", Some("Acme")),
        product(2, "Heavy Balm", None),
        product(3, "Quiet Cream", Some("Bloom")),
      ],
      product_ingredients: vec![(1, 101), (2, 101), (2, 102), (3, 101)],
      reviews:             vec![
        (3, 7, review(1, "negative", "broke me out once")),
        (3, 7, review(1, "positive", "cleared my chin")),
        (3, 7, review(1, "neutral", "fine")),
        (1, 7, review(3, "positive", "great on dry skin")),
      ],
    }
  }

  /// A store whose every query fails.
  pub fn failing() -> Self { Self { fail: true, ..Default::default() } }

  fn check(&self) -> Result<(), Unavailable> {
    if self.fail { Err(Unavailable) } else { Ok(()) }
  }

  fn references(&self, table: ReferenceTable) -> &[ReferenceEntry] {
    match table {
      ReferenceTable::SkinTypes => &self.skin_types,
      ReferenceTable::SkinConcerns => &self.skin_concerns,
    }
  }
}

fn contains_key(ids: &[CatalogId], id: &CatalogId) -> bool {
  let key = id.key();
  ids.iter().any(|i| i.key() == key)
}

impl CatalogStore for MemoryStore {
  type Error = Unavailable;

  async fn find_reference(
    &self,
    table: ReferenceTable,
    title: &str,
  ) -> Result<Option<ReferenceEntry>, Unavailable> {
    self.check()?;
    Ok(match_title(self.references(table), title).cloned())
  }

  async fn list_references(
    &self,
    table: ReferenceTable,
  ) -> Result<Vec<ReferenceEntry>, Unavailable> {
    self.check()?;
    Ok(self.references(table).to_vec())
  }

  async fn effect_rows(
    &self,
    mapping: MappingTable,
    reference_id: ReferenceId,
  ) -> Result<Vec<EffectRow>, Unavailable> {
    self.check()?;
    let rows = match mapping {
      MappingTable::ConcernIngredients => &self.concern_effects,
      MappingTable::SkinTypeIngredients => &self.skin_type_effects,
    };
    Ok(
      rows
        .iter()
        .filter(|(id, _)| *id == reference_id)
        .map(|(_, row)| row.clone())
        .collect(),
    )
  }

  async fn ingredients_by_ids(
    &self,
    ids: &[CatalogId],
  ) -> Result<Vec<IngredientRow>, Unavailable> {
    self.check()?;
    Ok(
      self
        .ingredients
        .iter()
        .filter(|r| r.id.as_ref().is_some_and(|id| contains_key(ids, id)))
        .cloned()
        .collect(),
    )
  }

  async fn product_ingredients(
    &self,
    ingredient_ids: &[CatalogId],
  ) -> Result<Vec<ProductIngredientRow>, Unavailable> {
    self.check()?;
    Ok(
      self
        .product_ingredients
        .iter()
        .filter(|(_, i)| contains_key(ingredient_ids, &CatalogId::Int(*i)))
        .map(|&(p, i)| ProductIngredientRow {
          product_id:    Some(CatalogId::Int(p)),
          ingredient_id: Some(CatalogId::Int(i)),
        })
        .collect(),
    )
  }

  async fn reviews_for(
    &self,
    product_ids: &[CatalogId],
    skin_type_id: ReferenceId,
    concern_id: ReferenceId,
  ) -> Result<Vec<ReviewRow>, Unavailable> {
    self.check()?;
    Ok(
      self
        .reviews
        .iter()
        .filter(|(s, c, r)| {
          *s == skin_type_id
            && *c == concern_id
            && r.product_id.as_ref().is_some_and(|id| contains_key(product_ids, id))
        })
        .map(|(_, _, r)| r.clone())
        .collect(),
    )
  }

  async fn products_by_ids(
    &self,
    ids: &[CatalogId],
  ) -> Result<Vec<ProductRow>, Unavailable> {
    self.check()?;
    Ok(
      self
        .products
        .iter()
        .filter(|r| r.id.as_ref().is_some_and(|id| contains_key(ids, id)))
        .cloned()
        .collect(),
    )
  }
}
