//! [`SqliteStore`], the SQLite implementation of [`CatalogStore`].

use std::path::Path;

use rusqlite::{types::Value, Row};
use skinrank_core::{
  catalog::{
    match_title, Catalog, EffectRow, IngredientRow, MappingTable, ProductIngredientRow,
    ProductRow, ReferenceEntry, ReferenceTable, ReviewRow,
  },
  id::{CatalogId, ReferenceId},
  store::CatalogStore,
};
use tracing::info;

use crate::{
  encode::{
    effect_row, encode_id, encode_id_list, ingredient_row, placeholders,
    product_ingredient_row, product_row, review_row,
  },
  schema::SCHEMA,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A skinrank catalog backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a raw SQL batch. Used to seed rows the import format cannot
  /// express (e.g. deliberately malformed ones).
  pub async fn execute_batch(&self, sql: impl Into<String>) -> Result<()> {
    let sql = sql.into();
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(&sql)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Read a JSON catalog from `path` and [`import`](Self::import) it.
  pub async fn import_file(&self, path: impl AsRef<Path>) -> Result<()> {
    let raw = tokio::fs::read_to_string(path).await?;
    let catalog = Catalog::from_json(&raw)?;
    self.import(catalog).await
  }

  /// Load `catalog` in a single transaction. Reference rows, ingredients and
  /// products replace existing rows with the same id; mapping rows and
  /// reviews are appended.
  pub async fn import(&self, catalog: Catalog) -> Result<()> {
    let ingredients = catalog.ingredients.len();
    let products = catalog.products.len();
    let reviews = catalog.reviews.len();

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt =
            tx.prepare("INSERT OR REPLACE INTO skin_types (id, title) VALUES (?1, ?2)")?;
          for e in &catalog.skin_types {
            stmt.execute(rusqlite::params![e.id, e.title])?;
          }

          let mut stmt =
            tx.prepare("INSERT OR REPLACE INTO skin_concerns (id, title) VALUES (?1, ?2)")?;
          for e in &catalog.skin_concerns {
            stmt.execute(rusqlite::params![e.id, e.title])?;
          }

          let mut stmt = tx.prepare(
            "INSERT OR REPLACE INTO ingredients (id, name, title, ingredient, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
          )?;
          for i in &catalog.ingredients {
            stmt.execute(rusqlite::params![
              encode_id(&i.id),
              i.name,
              i.title,
              i.ingredient,
              i.description,
            ])?;
          }

          let mut stmt = tx.prepare(
            "INSERT INTO skin_concern_ingredients (skin_concern_id, ingredient_id, effect, note)
             VALUES (?1, ?2, ?3, ?4)",
          )?;
          for m in &catalog.concern_effects {
            stmt.execute(rusqlite::params![
              m.skin_concern_id,
              m.ingredient_id.as_ref().map(encode_id),
              m.effect,
              m.note,
            ])?;
          }

          let mut stmt = tx.prepare(
            "INSERT INTO skin_type_ingredients (skin_type_id, ingredient_id, effect, note)
             VALUES (?1, ?2, ?3, ?4)",
          )?;
          for m in &catalog.skin_type_effects {
            stmt.execute(rusqlite::params![
              m.skin_type_id,
              m.ingredient_id.as_ref().map(encode_id),
              m.effect,
              m.note,
            ])?;
          }

          let mut stmt = tx
            .prepare("INSERT OR REPLACE INTO products (id, title, brand) VALUES (?1, ?2, ?3)")?;
          for p in &catalog.products {
            stmt.execute(rusqlite::params![encode_id(&p.id), p.title, p.brand])?;
          }

          let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO product_ingredients (product_id, ingredient_id)
             VALUES (?1, ?2)",
          )?;
          for pi in &catalog.product_ingredients {
            stmt.execute(rusqlite::params![
              encode_id(&pi.product_id),
              encode_id(&pi.ingredient_id),
            ])?;
          }

          let mut stmt = tx.prepare(
            "INSERT INTO reviews (
               product_id, skin_type_id, skin_concern_id, review_link, review_text,
               sentiment, skin_type_reasoning, skin_concern_reasoning
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          )?;
          for r in &catalog.reviews {
            stmt.execute(rusqlite::params![
              encode_id(&r.product_id),
              r.skin_type_id,
              r.skin_concern_id,
              r.review_link,
              r.review_text,
              r.sentiment,
              r.skin_type_reasoning,
              r.skin_concern_reasoning,
            ])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await?;

    info!(ingredients, products, reviews, "imported catalog");
    Ok(())
  }

  /// Run `sql` with `params` and read every row with `read`.
  async fn select<T>(
    &self,
    sql: String,
    params: Vec<Value>,
    read: fn(&Row<'_>) -> rusqlite::Result<T>,
  ) -> Result<Vec<T>>
  where
    T: Send + 'static,
  {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params.iter()), |row| read(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}

fn reference_entry(row: &Row<'_>) -> rusqlite::Result<ReferenceEntry> {
  Ok(ReferenceEntry { id: row.get(0)?, title: row.get(1)? })
}

// ─── CatalogStore impl ───────────────────────────────────────────────────────

impl CatalogStore for SqliteStore {
  type Error = crate::Error;

  // ── Reference tables ──────────────────────────────────────────────────────

  async fn find_reference(
    &self,
    table: ReferenceTable,
    title: &str,
  ) -> Result<Option<ReferenceEntry>> {
    // SQLite's NOCASE and LIKE fold ASCII only, so matching happens here.
    let sql = format!("SELECT id, title FROM {} ORDER BY id", table.table_name());
    let entries = self.select(sql, vec![], reference_entry).await?;
    Ok(match_title(&entries, title).cloned())
  }

  async fn list_references(&self, table: ReferenceTable) -> Result<Vec<ReferenceEntry>> {
    let sql = format!(
      "SELECT id, title FROM {} ORDER BY title COLLATE NOCASE, id",
      table.table_name()
    );
    self.select(sql, vec![], reference_entry).await
  }

  // ── Effect mappings ───────────────────────────────────────────────────────

  async fn effect_rows(
    &self,
    mapping: MappingTable,
    reference_id: ReferenceId,
  ) -> Result<Vec<EffectRow>> {
    let sql = format!(
      "SELECT ingredient_id, effect, note FROM {} WHERE {} = ?1 ORDER BY id",
      mapping.table_name(),
      mapping.foreign_key(),
    );
    self
      .select(sql, vec![Value::Integer(reference_id)], effect_row)
      .await
  }

  // ── Bulk fetches ──────────────────────────────────────────────────────────

  async fn ingredients_by_ids(&self, ids: &[CatalogId]) -> Result<Vec<IngredientRow>> {
    if ids.is_empty() {
      return Ok(vec![]);
    }
    let params = encode_id_list(ids);
    let sql = format!(
      "SELECT id, title, name, ingredient, description FROM ingredients
       WHERE id IN ({})",
      placeholders(1, params.len())
    );
    self.select(sql, params, ingredient_row).await
  }

  async fn product_ingredients(
    &self,
    ingredient_ids: &[CatalogId],
  ) -> Result<Vec<ProductIngredientRow>> {
    if ingredient_ids.is_empty() {
      return Ok(vec![]);
    }
    let params = encode_id_list(ingredient_ids);
    let sql = format!(
      "SELECT product_id, ingredient_id FROM product_ingredients
       WHERE ingredient_id IN ({})",
      placeholders(1, params.len())
    );
    self.select(sql, params, product_ingredient_row).await
  }

  async fn reviews_for(
    &self,
    product_ids: &[CatalogId],
    skin_type_id: ReferenceId,
    concern_id: ReferenceId,
  ) -> Result<Vec<ReviewRow>> {
    if product_ids.is_empty() {
      return Ok(vec![]);
    }
    let ids = encode_id_list(product_ids);
    let sql = format!(
      "SELECT product_id, review_link, review_text, sentiment,
              skin_type_reasoning, skin_concern_reasoning
       FROM reviews
       WHERE skin_type_id = ?1 AND skin_concern_id = ?2 AND product_id IN ({})
       ORDER BY id",
      placeholders(3, ids.len())
    );
    let mut params = vec![Value::Integer(skin_type_id), Value::Integer(concern_id)];
    params.extend(ids);
    self.select(sql, params, review_row).await
  }

  async fn products_by_ids(&self, ids: &[CatalogId]) -> Result<Vec<ProductRow>> {
    if ids.is_empty() {
      return Ok(vec![]);
    }
    let params = encode_id_list(ids);
    let sql = format!(
      "SELECT id, title, brand FROM products WHERE id IN ({})",
      placeholders(1, params.len())
    );
    self.select(sql, params, product_row).await
  }
}
