//! Title → identifier resolution against the reference tables.

use tracing::debug;

use crate::{
  catalog::ReferenceTable,
  id::ReferenceId,
  selection::Selection,
  store::CatalogStore,
  Error, Result,
};

/// Resolve a selection to a reference id.
///
/// `Unsure` and empty titles resolve to `None` without touching the store;
/// so does a title with no matching row. Callers that need to tell "unsure"
/// apart from "not found" check [`Selection::is_unsure`] first.
pub async fn resolve_reference<S: CatalogStore>(
  store: &S,
  table: ReferenceTable,
  selection: &Selection,
) -> Result<Option<ReferenceId>> {
  let title = match selection.title() {
    Some(t) if !t.is_empty() => t,
    _ => return Ok(None),
  };

  let entry = store
    .find_reference(table, title)
    .await
    .map_err(Error::store)?;

  debug!(
    table = table.table_name(),
    title,
    resolved = ?entry.as_ref().map(|e| e.id),
    "resolved selection"
  );

  Ok(entry.map(|e| e.id))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::MemoryStore;

  #[tokio::test]
  async fn resolves_case_insensitively() {
    let store = MemoryStore::example();
    let id = resolve_reference(
      &store,
      ReferenceTable::SkinConcerns,
      &Selection::parse(" acne "),
    )
    .await
    .unwrap();
    assert_eq!(id, Some(7));
  }

  #[tokio::test]
  async fn unsure_and_empty_skip_the_store() {
    let store = MemoryStore::failing();
    for raw in ["not sure", "", "   "] {
      let id = resolve_reference(&store, ReferenceTable::SkinTypes, &Selection::parse(raw))
        .await
        .unwrap();
      assert_eq!(id, None);
    }
  }

  #[tokio::test]
  async fn unknown_title_is_none() {
    let store = MemoryStore::example();
    let id = resolve_reference(&store, ReferenceTable::SkinTypes, &Selection::parse("Scaly"))
      .await
      .unwrap();
    assert_eq!(id, None);
  }

  #[tokio::test]
  async fn store_failure_propagates() {
    let store = MemoryStore::failing();
    let err = resolve_reference(&store, ReferenceTable::SkinTypes, &Selection::parse("Oily"))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::Store(_)));
  }
}
