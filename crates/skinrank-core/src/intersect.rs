//! Intersection of the concern and skin-type effect mappings.

use crate::{
  effect::Effect,
  id::{CatalogId, IdKey},
  mapping::{EffectEntry, EffectMap},
};

/// An ingredient present in both mappings, with its combined effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedIngredient {
  pub key:       IdKey,
  pub id:        CatalogId,
  pub concern:   EffectEntry,
  pub skin_type: EffectEntry,
  /// Worst case of the two per-axis effects.
  pub effect:    Effect,
}

/// Ingredients relevant to both the selected concern and skin type, in key
/// order.
pub fn intersect(concern: &EffectMap, skin_type: &EffectMap) -> Vec<MatchedIngredient> {
  concern
    .iter()
    .filter_map(|(key, c)| {
      let s = skin_type.get(key)?;
      Some(MatchedIngredient {
        key:       key.clone(),
        id:        c.ingredient_id.clone(),
        concern:   c.clone(),
        skin_type: s.clone(),
        effect:    c.effect.combine(s.effect),
      })
    })
    .collect()
}

/// Split matched ingredients into helpful and avoid id sets. Every matched
/// ingredient lands in exactly one of the two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
  pub helpful: Vec<CatalogId>,
  pub avoid:   Vec<CatalogId>,
}

impl Partition {
  pub fn of(matched: &[MatchedIngredient]) -> Self {
    let (avoid, helpful): (Vec<_>, Vec<_>) =
      matched.iter().partition(|m| m.effect.is_avoid());
    Self {
      helpful: helpful.into_iter().map(|m| m.id.clone()).collect(),
      avoid:   avoid.into_iter().map(|m| m.id.clone()).collect(),
    }
  }

  /// Helpful ids followed by avoid ids.
  pub fn union(&self) -> Vec<CatalogId> {
    self.helpful.iter().chain(&self.avoid).cloned().collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn map(entries: &[(i64, Effect)]) -> EffectMap {
    entries
      .iter()
      .map(|&(id, effect)| {
        (id.to_string(), EffectEntry {
          ingredient_id: CatalogId::Int(id),
          effect,
          note: None,
        })
      })
      .collect()
  }

  #[test]
  fn intersects_and_applies_worst_case() {
    use Effect::*;
    let concern = map(&[(101, Helpful), (102, Avoid), (103, Helpful)]);
    let skin = map(&[(101, Helpful), (102, Helpful), (104, Avoid)]);

    let matched = intersect(&concern, &skin);
    let summary: Vec<_> = matched.iter().map(|m| (m.key.as_str(), m.effect)).collect();
    assert_eq!(summary, [("101", Helpful), ("102", Avoid)]);

    let partition = Partition::of(&matched);
    assert_eq!(partition.helpful, [CatalogId::Int(101)]);
    assert_eq!(partition.avoid, [CatalogId::Int(102)]);
    assert_eq!(partition.union(), [CatalogId::Int(101), CatalogId::Int(102)]);
  }

  #[test]
  fn swapping_axes_keeps_effects() {
    use Effect::*;
    let a = map(&[(1, Avoid), (2, Helpful), (3, Helpful)]);
    let b = map(&[(1, Helpful), (2, Avoid), (3, Helpful)]);

    let ab: Vec<_> = intersect(&a, &b).into_iter().map(|m| (m.key, m.effect)).collect();
    let ba: Vec<_> = intersect(&b, &a).into_iter().map(|m| (m.key, m.effect)).collect();
    assert_eq!(ab, ba);
  }

  #[test]
  fn text_and_int_ids_meet() {
    let concern = map(&[(5, Effect::Helpful)]);
    let mut skin = EffectMap::new();
    skin.insert("5".into(), EffectEntry {
      ingredient_id: CatalogId::Text("5".into()),
      effect:        Effect::Helpful,
      note:          Some("fine".into()),
    });
    let matched = intersect(&concern, &skin);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, CatalogId::Int(5));
  }
}
