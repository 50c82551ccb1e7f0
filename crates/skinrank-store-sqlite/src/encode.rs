//! Decoding helpers between SQLite values and the loosely-typed catalog rows.
//!
//! Columns holding ids are untyped, so a value may come back as an integer,
//! a real, text, or NULL. These readers never fail: anything that cannot be
//! read as the wanted shape becomes `None` and the engine applies its own
//! defaults.

use rusqlite::{types::Value, Row};
use skinrank_core::{
  catalog::{EffectRow, IngredientRow, ProductIngredientRow, ProductRow, ReviewRow},
  id::CatalogId,
};

// ─── Scalars ─────────────────────────────────────────────────────────────────

pub fn decode_id(value: Value) -> Option<CatalogId> {
  match value {
    Value::Integer(n) => Some(CatalogId::Int(n)),
    Value::Real(f) if f.fract() == 0.0 => Some(CatalogId::Int(f as i64)),
    Value::Text(s) => CatalogId::from_text(&s),
    _ => None,
  }
}

/// Text columns: numbers are rendered, blobs and NULL are absent.
pub fn decode_text(value: Value) -> Option<String> {
  match value {
    Value::Text(s) => Some(s),
    Value::Integer(n) => Some(n.to_string()),
    Value::Real(f) => Some(f.to_string()),
    _ => None,
  }
}

pub fn encode_id(id: &CatalogId) -> Value {
  match id {
    CatalogId::Int(n) => Value::Integer(*n),
    CatalogId::Text(s) => Value::Text(s.trim().to_owned()),
  }
}

/// Bind values for an `IN (...)` list. Every form that shares the id's
/// [`CatalogId::key`] is bound, so `'101'` matches a stored `101`, `'007'`
/// matches a stored `7` and `'7'`, and vice versa.
pub fn encode_id_list(ids: &[CatalogId]) -> Vec<Value> {
  let mut values = Vec::with_capacity(ids.len() * 2);
  for id in ids {
    values.push(encode_id(id));
    match id {
      CatalogId::Int(n) => values.push(Value::Text(n.to_string())),
      CatalogId::Text(s) => {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
          values.push(Value::Integer(n));
          let canonical = n.to_string();
          if canonical != trimmed {
            values.push(Value::Text(canonical));
          }
        }
      }
    }
  }
  values
}

/// `?1, ?2, …, ?n` starting at `first`.
pub fn placeholders(first: usize, count: usize) -> String {
  (first..first + count)
    .map(|i| format!("?{i}"))
    .collect::<Vec<_>>()
    .join(", ")
}

// ─── Rows ────────────────────────────────────────────────────────────────────

fn col(row: &Row<'_>, idx: usize) -> rusqlite::Result<Value> { row.get::<_, Value>(idx) }

/// `ingredient_id, effect, note`
pub fn effect_row(row: &Row<'_>) -> rusqlite::Result<EffectRow> {
  Ok(EffectRow {
    ingredient_id: decode_id(col(row, 0)?),
    effect:        decode_text(col(row, 1)?),
    note:          decode_text(col(row, 2)?),
  })
}

/// `id, title, name, ingredient, description`
pub fn ingredient_row(row: &Row<'_>) -> rusqlite::Result<IngredientRow> {
  Ok(IngredientRow {
    id:          decode_id(col(row, 0)?),
    title:       decode_text(col(row, 1)?),
    name:        decode_text(col(row, 2)?),
    ingredient:  decode_text(col(row, 3)?),
    description: decode_text(col(row, 4)?),
  })
}

/// `product_id, ingredient_id`
pub fn product_ingredient_row(row: &Row<'_>) -> rusqlite::Result<ProductIngredientRow> {
  Ok(ProductIngredientRow {
    product_id:    decode_id(col(row, 0)?),
    ingredient_id: decode_id(col(row, 1)?),
  })
}

/// `id, title, brand`
pub fn product_row(row: &Row<'_>) -> rusqlite::Result<ProductRow> {
  Ok(ProductRow {
    id:    decode_id(col(row, 0)?),
    title: decode_text(col(row, 1)?),
    brand: decode_text(col(row, 2)?),
  })
}

/// `product_id, review_link, review_text, sentiment, skin_type_reasoning,
/// skin_concern_reasoning`
pub fn review_row(row: &Row<'_>) -> rusqlite::Result<ReviewRow> {
  Ok(ReviewRow {
    product_id:             decode_id(col(row, 0)?),
    review_link:            decode_text(col(row, 1)?),
    review_text:            decode_text(col(row, 2)?),
    sentiment:              decode_text(col(row, 3)?),
    skin_type_reasoning:    decode_text(col(row, 4)?),
    skin_concern_reasoning: decode_text(col(row, 5)?),
  })
}
